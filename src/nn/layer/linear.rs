/*
 * @Author       : 老董
 * @Date         : 2026-02-04
 * @Description  : Linear (仿射) 层：单输入单输出，output = w * x + b
 */

use ndarray::Array1;
use rand::Rng;
use rand::distributions::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

use crate::distribution::Normal;
use crate::errors::FitError;
use crate::nn::{Module, Parameters};

// ==================== Init 枚举 ====================

/// 参数初始化策略
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Init {
    /// 框架默认初始化：w、b 均服从 U(-1/√fan_in, 1/√fan_in)，单输入时即 U(-1, 1)
    #[default]
    Default,
    /// 全零
    Zeros,
    /// 常数初始化
    Constant { weight: f32, bias: f32 },
    /// 正态分布
    Normal { mean: f32, std: f32 },
}

impl Init {
    /// 单输入仿射层的扇入
    const FAN_IN: usize = 1;

    /// 正态初始化的分布；参数非法时报初始化配置错误
    fn normal(mean: f32, std: f32) -> Result<Normal, FitError> {
        Normal::new(mean, std).map_err(|_| {
            FitError::InvalidConfig(format!(
                "正态初始化参数非法: mean={mean}, std={std}（须为有限值且 std >= 0）"
            ))
        })
    }

    /// 不消耗随机数的前置校验
    pub fn validate(&self) -> Result<(), FitError> {
        match *self {
            Self::Default | Self::Zeros => Ok(()),
            Self::Constant { weight, bias } => {
                if Parameters::new(weight, bias).is_finite() {
                    Ok(())
                } else {
                    Err(FitError::InvalidConfig(format!(
                        "常数初始化须为有限值: weight={weight}, bias={bias}"
                    )))
                }
            }
            Self::Normal { mean, std } => Self::normal(mean, std).map(|_| ()),
        }
    }

    /// 用指定的 RNG 生成初始参数
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Parameters, FitError> {
        let params = match *self {
            Self::Default => {
                let bound = 1.0 / (Self::FAN_IN as f32).sqrt();
                let uniform = Uniform::from(-bound..=bound);
                Parameters::new(uniform.sample(rng), uniform.sample(rng))
            }
            Self::Zeros => Parameters::zeros(),
            Self::Constant { weight, bias } => Parameters::new(weight, bias),
            Self::Normal { mean, std } => {
                let normal = Self::normal(mean, std)?;
                Parameters::new(normal.sample(rng), normal.sample(rng))
            }
        };
        if !params.is_finite() {
            return Err(FitError::InvalidConfig(format!(
                "初始参数须为有限值，实际为 {params}"
            )));
        }
        Ok(params)
    }
}

// ==================== Linear 结构体 ====================

/// Linear 层
///
/// PyTorch 风格的 `nn.Linear(1, 1)`：`output = x * w + b`
///
/// # 使用示例
/// ```ignore
/// let mut rng = StdRng::seed_from_u64(42);
/// let model = Linear::with_init(&Init::Default, &mut rng)?;
/// let y = model.forward(3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Linear {
    params: Parameters,
}

impl Linear {
    pub const fn new(params: Parameters) -> Self {
        Self { params }
    }

    /// 按初始化策略创建（参数初始化会消耗`rng`的随机数）
    pub fn with_init<R: Rng + ?Sized>(init: &Init, rng: &mut R) -> Result<Self, FitError> {
        Ok(Self::new(init.generate(rng)?))
    }

    pub const fn weight(&self) -> f32 {
        self.params.weight
    }

    pub const fn bias(&self) -> f32 {
        self.params.bias
    }

    /// 单个输入的前向计算
    pub fn forward(&self, x: f32) -> f32 {
        self.params.weight * x + self.params.bias
    }

    /// 批量前向计算
    pub fn forward_batch(&self, inputs: &Array1<f32>) -> Array1<f32> {
        inputs.mapv(|x| self.forward(x))
    }

    /// 反向传播（VJP）：给定 ∂L/∂output，返回 (∂L/∂w, ∂L/∂b)
    ///
    /// - ∂L/∂w = Σ upstream_i * x_i
    /// - ∂L/∂b = Σ upstream_i
    pub fn backward(
        &self,
        inputs: &Array1<f32>,
        upstream: &Array1<f32>,
    ) -> Result<Parameters, FitError> {
        FitError::check_aligned(inputs.len(), upstream.len())?;
        Ok(Parameters::new(upstream.dot(inputs), upstream.sum()))
    }
}

impl Module for Linear {
    fn parameters(&self) -> Parameters {
        self.params
    }

    fn set_parameters(&mut self, params: Parameters) {
        self.params = params;
    }
}
