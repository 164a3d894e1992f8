//! 数据生成错误类型定义

use thiserror::Error;

/// 数据生成/构造相关错误
#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    /// 样本数为 0
    #[error("样本集为空")]
    EmptySampleSet,

    /// 区间非法（非有限值，或下界不小于上界）
    #[error("区间非法: [{lo}, {hi}]")]
    InvalidInterval { lo: f32, hi: f32 },

    /// 噪声分布参数非法
    #[error("噪声参数非法: mean={mean}, std={std_dev}")]
    InvalidNoise { mean: f32, std_dev: f32 },

    /// 真实直线的系数非法
    #[error("真实直线系数非法: weight={weight}, bias={bias}")]
    InvalidCoefficients { weight: f32, bias: f32 },

    /// 输入和标签长度不一致
    #[error("长度不一致: 输入 {inputs}, 标签 {labels}")]
    LengthMismatch { inputs: usize, labels: usize },
}
