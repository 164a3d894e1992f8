/*
 * @Author       : 老董
 * @Date         : 2026-02-07
 * @Description  : 基于 plotters 的 SVG 渲染器
 */

use plotters::prelude::*;
use std::fmt::Display;
use std::path::Path;

use super::{check_size, Figure, ImageFormat, Render, VisionError};

fn backend_error(e: impl Display) -> VisionError {
    VisionError::Backend(e.to_string())
}

const fn rgb([r, g, b]: [u8; 3]) -> RGBColor {
    RGBColor(r, g, b)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgRenderer {
    size: (u32, u32),
}

impl SvgRenderer {
    /// 每边至少`PlotConfig::MIN_SIDE`像素
    pub fn new(size: (u32, u32)) -> Result<Self, VisionError> {
        Ok(Self {
            size: check_size(size)?,
        })
    }

    /// 先画到内存里的字符串，最后一次性写文件
    fn draw(&self, figure: &Figure, buf: &mut String) -> Result<(), VisionError> {
        let root = SVGBackend::with_string(buf, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(backend_error)?;

        let bounds = figure.bounds();
        let mut chart = ChartBuilder::on(&root)
            .caption(&figure.title, ("sans-serif", 24).into_font())
            .margin(16)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(bounds.x_min..bounds.x_max, bounds.y_min..bounds.y_max)
            .map_err(backend_error)?;

        chart
            .configure_mesh()
            .x_desc("x")
            .y_desc("y")
            .draw()
            .map_err(backend_error)?;

        let scatter_color = rgb(figure.scatter.color);
        chart
            .draw_series(
                figure
                    .scatter
                    .finite_points()
                    .map(|p| Circle::new(p, 3, scatter_color.filled())),
            )
            .map_err(backend_error)?
            .label(figure.scatter.label.as_str())
            .legend(move |(x, y)| Circle::new((x + 10, y), 3, scatter_color.filled()));

        let line_color = rgb(figure.line.color);
        chart
            .draw_series(LineSeries::new(
                figure.line.finite_points(),
                line_color.stroke_width(2),
            ))
            .map_err(backend_error)?
            .label(figure.line.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], line_color.stroke_width(2))
            });

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(backend_error)?;

        root.present().map_err(backend_error)?;
        Ok(())
    }
}

impl Render for SvgRenderer {
    fn format(&self) -> ImageFormat {
        ImageFormat::Svg
    }

    fn render(&self, figure: &Figure, path: &Path) -> Result<(), VisionError> {
        let mut content = String::new();
        self.draw(figure, &mut content)?;
        std::fs::write(path, content).map_err(|source| VisionError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
