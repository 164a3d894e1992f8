/*
 * @Author       : 老董
 * @Date         : 2026-02-07
 * @Description  : 本模块负责把拟合结果画出来：原始样本的散点 + 模型预测的直线。
 *                 不弹出窗口，而是按输出路径的扩展名选择渲染器写入文件：
 *                 1. svg：矢量图（plotters），带标题、坐标轴和图例文字；
 *                 2. png：位图（image + imageproc），因为不附带字体，图例只有色块。
 */

mod figure;
mod png;
mod svg;

#[cfg(test)]
mod tests;

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use figure::{Bounds, Figure, Series};
pub use png::PngRenderer;
pub use svg::SvgRenderer;

#[derive(Debug, Error)]
pub enum VisionError {
    #[error("数据序列为空：{0}")]
    EmptySeries(String),
    #[error("序列长度不一致：x 有{xs}个，y 有{ys}个")]
    LengthMismatch { xs: usize, ys: usize },
    #[error("不支持的输出格式：{0:?}（仅支持 svg、png）")]
    UnsupportedFormat(String),
    #[error("图像尺寸非法：{width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("写入`{path}`失败：{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error("绘图后端错误：{0}")]
    Backend(String),
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }

    /// 扩展名不区分大小写
    pub fn from_extension(ext: &str) -> Result<Self, VisionError> {
        match ext.to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            _ => Err(VisionError::UnsupportedFormat(ext.to_string())),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, VisionError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| VisionError::UnsupportedFormat(path.display().to_string()))?;
        Self::from_extension(ext)
    }
}

/// 输出配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("linear_fit.svg"),
            width: 800,
            height: 600,
        }
    }
}

impl PlotConfig {
    /// 画布过小时坐标轴和边距会挤在一起
    pub const MIN_SIDE: u32 = 128;

    pub fn validate(&self) -> Result<ImageFormat, VisionError> {
        check_size((self.width, self.height))?;
        ImageFormat::from_path(&self.path)
    }
}

/// 各渲染器构造时共用的尺寸检查
pub(crate) fn check_size((width, height): (u32, u32)) -> Result<(u32, u32), VisionError> {
    if width < PlotConfig::MIN_SIDE || height < PlotConfig::MIN_SIDE {
        return Err(VisionError::InvalidSize { width, height });
    }
    Ok((width, height))
}

#[enum_dispatch]
pub enum Renderer {
    SvgRenderer,
    PngRenderer,
}

#[enum_dispatch(Renderer)]
pub trait Render {
    fn format(&self) -> ImageFormat;

    /// 把`figure`画到`path`上（已存在则覆盖）
    fn render(&self, figure: &Figure, path: &Path) -> Result<(), VisionError>;
}

impl Renderer {
    pub fn for_config(config: &PlotConfig) -> Result<Self, VisionError> {
        let size = (config.width, config.height);
        Ok(match config.validate()? {
            ImageFormat::Svg => SvgRenderer::new(size)?.into(),
            ImageFormat::Png => PngRenderer::new(size)?.into(),
        })
    }
}
