/*
 * @Author       : 老董
 * @Date         : 2026-02-07
 * @Description  : 基于 image + imageproc 的 PNG 渲染器。
 *                 不附带字体，因此不画标题与刻度文字，图例只画色块。
 */

use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut,
};
use imageproc::rect::Rect;
use std::path::Path;

use super::{check_size, Bounds, Figure, ImageFormat, Render, VisionError};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([0, 0, 0]);
const GRID: Rgb<u8> = Rgb([225, 225, 225]);

// 绘图区四周的留白（像素）
const MARGIN_LEFT: u32 = 50;
const MARGIN_RIGHT: u32 = 20;
const MARGIN_TOP: u32 = 30;
const MARGIN_BOTTOM: u32 = 40;

const POINT_RADIUS: i32 = 3;
const TICKS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngRenderer {
    size: (u32, u32),
}

/// 数据坐标 → 像素坐标
struct Projection {
    bounds: Bounds,
    left: f32,
    top: f32,
    width: f32,
    height: f32,
}

impl Projection {
    fn new(bounds: Bounds, (w, h): (u32, u32)) -> Self {
        Self {
            bounds,
            left: MARGIN_LEFT as f32,
            top: MARGIN_TOP as f32,
            width: w.saturating_sub(MARGIN_LEFT + MARGIN_RIGHT) as f32,
            height: h.saturating_sub(MARGIN_TOP + MARGIN_BOTTOM) as f32,
        }
    }

    fn project(&self, (x, y): (f32, f32)) -> (f32, f32) {
        let b = &self.bounds;
        let u = (x - b.x_min) / (b.x_max - b.x_min);
        let v = (y - b.y_min) / (b.y_max - b.y_min);
        (self.left + u * self.width, self.top + (1.0 - v) * self.height)
    }

    fn frame(&self) -> Rect {
        Rect::at(self.left as i32, self.top as i32).of_size(self.width as u32, self.height as u32)
    }
}

impl PngRenderer {
    /// 每边至少`PlotConfig::MIN_SIDE`像素
    pub fn new(size: (u32, u32)) -> Result<Self, VisionError> {
        Ok(Self {
            size: check_size(size)?,
        })
    }

    pub(crate) fn draw(&self, figure: &Figure) -> RgbImage {
        let (w, h) = self.size;
        let mut canvas = RgbImage::from_pixel(w, h, BACKGROUND);
        let proj = Projection::new(figure.bounds(), self.size);
        let frame = proj.frame();

        // 网格与刻度
        for i in 0..=TICKS {
            let t = i as f32 / TICKS as f32;
            let x = proj.left + t * proj.width;
            let y = proj.top + t * proj.height;
            let (right, bottom) = (proj.left + proj.width, proj.top + proj.height);
            draw_line_segment_mut(&mut canvas, (x, proj.top), (x, bottom), GRID);
            draw_line_segment_mut(&mut canvas, (proj.left, y), (right, y), GRID);
            draw_line_segment_mut(&mut canvas, (x, bottom), (x, bottom + 5.0), AXIS);
            draw_line_segment_mut(&mut canvas, (proj.left - 5.0, y), (proj.left, y), AXIS);
        }
        draw_hollow_rect_mut(&mut canvas, frame, AXIS);

        // 散点
        let scatter_color = Rgb(figure.scatter.color);
        for p in figure.scatter.finite_points() {
            let (px, py) = proj.project(p);
            draw_filled_circle_mut(
                &mut canvas,
                (px.round() as i32, py.round() as i32),
                POINT_RADIUS,
                scatter_color,
            );
        }

        // 预测线（2 像素宽）
        let line_color = Rgb(figure.line.color);
        let pixels: Vec<(f32, f32)> = figure.line.finite_points().map(|p| proj.project(p)).collect();
        for pair in pixels.windows(2) {
            let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
            draw_line_segment_mut(&mut canvas, (x0, y0), (x1, y1), line_color);
            draw_line_segment_mut(&mut canvas, (x0, y0 + 1.0), (x1, y1 + 1.0), line_color);
        }

        // 图例：左上角，每个序列一行色块
        let legend = Rect::at(frame.left() + 10, frame.top() + 10).of_size(48, 40);
        draw_filled_rect_mut(&mut canvas, legend, BACKGROUND);
        draw_hollow_rect_mut(&mut canvas, legend, AXIS);
        let (lx, ly) = (legend.left() as f32, legend.top() as f32);
        draw_filled_circle_mut(
            &mut canvas,
            (legend.left() + 24, legend.top() + 12),
            POINT_RADIUS,
            scatter_color,
        );
        for dy in [28.0, 29.0] {
            draw_line_segment_mut(&mut canvas, (lx + 10.0, ly + dy), (lx + 38.0, ly + dy), line_color);
        }

        canvas
    }
}

impl Render for PngRenderer {
    fn format(&self) -> ImageFormat {
        ImageFormat::Png
    }

    fn render(&self, figure: &Figure, path: &Path) -> Result<(), VisionError> {
        self.draw(figure)
            .save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}
