/*
 * @Author       : 老董
 * @Date         : 2026-02-04
 * @Description  : 损失函数封装（PyTorch 风格 API）
 *
 * 与计算图无关：每次调用都从预测值和目标值重新计算，不缓存任何中间结果。
 */

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::errors::FitError;

/// Reduction 模式
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reduction {
    /// 对所有元素求平均（默认）
    #[default]
    Mean,
    /// 对所有元素求和
    Sum,
}

/// MSE（均方误差）损失
///
/// ## 公式
/// - Mean reduction: `MSE = sum((input - target)^2) / N`
/// - Sum reduction: `MSE = sum((input - target)^2)`
///
/// ## 梯度
/// - Mean: `∂L/∂input = 2 * (input - target) / N`
/// - Sum: `∂L/∂input = 2 * (input - target)`
///
/// ## 参考
/// - `PyTorch`: `torch.nn.MSELoss`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    /// 使用默认 Mean reduction 创建
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_reduction(reduction: Reduction) -> Self {
        Self { reduction }
    }

    pub const fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// 计算损失值
    pub fn forward(&self, input: &Array1<f32>, target: &Array1<f32>) -> Result<f32, FitError> {
        FitError::check_aligned(input.len(), target.len())?;
        let diff = input - target;
        let squared_sum = diff.mapv(|d| d * d).sum();
        Ok(match self.reduction {
            Reduction::Mean => squared_sum / input.len() as f32,
            Reduction::Sum => squared_sum,
        })
    }

    /// 计算 ∂L/∂input
    pub fn grad(
        &self,
        input: &Array1<f32>,
        target: &Array1<f32>,
    ) -> Result<Array1<f32>, FitError> {
        FitError::check_aligned(input.len(), target.len())?;
        let diff = input - target;
        Ok(match self.reduction {
            Reduction::Mean => diff * (2.0 / input.len() as f32),
            Reduction::Sum => diff * 2.0,
        })
    }
}
