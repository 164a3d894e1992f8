/*
 * @Author       : 老董
 * @Date         : 2026-02-03
 * @Description  : 全局错误类型。各子模块（data、vision、config）有各自的错误类型，
 *                 这里统一汇总为 `FitError`，供训练流程和 main 直接用 `?` 传播。
 */

use thiserror::Error;

use crate::config::ConfigError;
use crate::data::DataError;
use crate::vision::VisionError;

#[derive(Error, Debug)]
pub enum FitError {
    // 张量（向量）运算
    #[error("样本为空，无法计算均值")]
    EmptyBatch,
    #[error("形状不一致：期望长度为{expected}，实际长度为{got}")]
    ShapeMismatch { expected: usize, got: usize },

    // 训练超参
    #[error("学习率须为有限正数，实际为{0}")]
    InvalidLearningRate(f32),
    #[error("配置无效：{0}")]
    InvalidConfig(String),

    // 子模块错误
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Vision(#[from] VisionError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FitError {
    /// 校验两个序列长度一致，且不为空
    pub(crate) fn check_aligned(expected: usize, got: usize) -> Result<(), FitError> {
        if expected != got {
            return Err(FitError::ShapeMismatch { expected, got });
        }
        if expected == 0 {
            return Err(FitError::EmptyBatch);
        }
        Ok(())
    }
}
