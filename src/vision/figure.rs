/*
 * @Author       : 老董
 * @Date         : 2026-02-07
 * @Description  : 与后端无关的图形描述：标题 + 散点序列 + 折线序列 + 坐标范围
 */

use ndarray::Array1;
use std::path::PathBuf;

use super::{PlotConfig, Render, Renderer, VisionError};
use crate::data::SampleSet;

pub const DEFAULT_TITLE: &str = "Linear regressor trained by gradient descent";
pub const SCATTER_LABEL: &str = "Real data";
pub const LINE_LABEL: &str = "Prediction";

/// 可绘制坐标的绝对值上限；超出的点不画，坐标轴范围也不会超过它
pub const PLOT_LIMIT: f32 = 1e37;

/// 散点默认色（蓝）
pub const SCATTER_COLOR: [u8; 3] = [31, 119, 180];
/// 预测线颜色（红）
pub const LINE_COLOR: [u8; 3] = [214, 39, 40];

/// 一组 (x, y) 数据及其图例
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: [u8; 3],
    xs: Vec<f32>,
    ys: Vec<f32>,
}

impl Series {
    pub fn new(
        label: impl Into<String>,
        color: [u8; 3],
        xs: Vec<f32>,
        ys: Vec<f32>,
    ) -> Result<Self, VisionError> {
        let label = label.into();
        if xs.len() != ys.len() {
            return Err(VisionError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if xs.is_empty() {
            return Err(VisionError::EmptySeries(label));
        }
        Ok(Self {
            label,
            color,
            xs,
            ys,
        })
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// 只保留能画出来的点：两个坐标的绝对值都不超过`PLOT_LIMIT`
    /// （发散的训练结果里可能有 NaN/inf 或接近 f32::MAX 的值）
    pub fn finite_points(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.points()
            .filter(|(x, y)| x.abs() <= PLOT_LIMIT && y.abs() <= PLOT_LIMIT)
    }
}

/// 坐标轴范围
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Bounds {
    /// 每侧留出跨度的 5%
    const PAD_RATIO: f64 = 0.05;

    /// 在 f64 中计算留白，再截断到 ±`PLOT_LIMIT`，保证范围有限且跨度非零
    fn padded(lo: f32, hi: f32) -> (f32, f32) {
        let (lo, hi) = (f64::from(lo), f64::from(hi));
        let span = hi - lo;
        let pad = if span > f64::from(f32::EPSILON) * lo.abs().max(hi.abs()).max(1.0) {
            span * Self::PAD_RATIO
        } else {
            // 所有值相同：以该值为中心撑开，至少一个单位
            (lo.abs() * Self::PAD_RATIO).max(1.0)
        };
        let limit = f64::from(PLOT_LIMIT);
        (
            (lo - pad).max(-limit) as f32,
            (hi + pad).min(limit) as f32,
        )
    }

    fn covering(points: impl Iterator<Item = (f32, f32)>) -> Self {
        let mut acc: Option<(f32, f32, f32, f32)> = None;
        for (x, y) in points {
            acc = Some(match acc {
                None => (x, x, y, y),
                Some((x0, x1, y0, y1)) => (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
            });
        }
        let (x_min, x_max, y_min, y_max) = acc.unwrap_or((0.0, 1.0, 0.0, 1.0));
        let (x_min, x_max) = Self::padded(x_min, x_max);
        let (y_min, y_max) = Self::padded(y_min, y_max);
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn contains(&self, (x, y): (f32, f32)) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }
}

/// 一张完整的图
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub scatter: Series,
    pub line: Series,
}

impl Figure {
    /// 样本散点 + 同一组输入上的预测线
    pub fn regression(samples: &SampleSet, predictions: &Array1<f32>) -> Result<Self, VisionError> {
        if predictions.len() != samples.len() {
            return Err(VisionError::LengthMismatch {
                xs: samples.len(),
                ys: predictions.len(),
            });
        }
        let xs = samples.inputs().to_vec();
        Ok(Self {
            title: DEFAULT_TITLE.to_string(),
            scatter: Series::new(SCATTER_LABEL, SCATTER_COLOR, xs.clone(), samples.labels().to_vec())?,
            line: Series::new(LINE_LABEL, LINE_COLOR, xs, predictions.to_vec())?,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::covering(self.scatter.finite_points().chain(self.line.finite_points()))
    }

    /// 按配置选择渲染器并写入文件，返回输出路径
    pub fn save(&self, config: &PlotConfig) -> Result<PathBuf, VisionError> {
        let renderer = Renderer::for_config(config)?;
        renderer.render(self, &config.path)?;
        log::info!(
            "已保存图像（{}，{}x{}）: {}",
            renderer.format().extension(),
            config.width,
            config.height,
            config.path.display()
        );
        Ok(config.path.clone())
    }
}
