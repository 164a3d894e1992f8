/*
 * @Author       : 老董
 * @Date         : 2026-02-03
 * @Description  : 随机分布采样。所有采样都使用调用方传入的 RNG，
 *                 不再依赖全局 `thread_rng`，以保证给定种子时结果可复现。
 */

use ndarray::Array1;
use rand::Rng;

use crate::data::DataError;


/// 正态分布 N(mean, std²)，采用 Box-Muller 变换生成
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mean: f32,
    std_dev: f32,
}

impl Normal {
    /// 创建正态分布；`std_dev` 必须为有限的非负数（为 0 时退化为常数 `mean`）
    pub fn new(mean: f32, std_dev: f32) -> Result<Self, DataError> {
        if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
            return Err(DataError::InvalidNoise { mean, std_dev });
        }
        Ok(Self { mean, std_dev })
    }

    /// 标准正态分布 N(0, 1)
    pub const fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    pub const fn mean(&self) -> f32 {
        self.mean
    }

    pub const fn std_dev(&self) -> f32 {
        self.std_dev
    }

    /// 采样一个值
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        // u1 取 (0, 1]，避免 ln(0)
        let u1: f32 = 1.0 - rng.r#gen::<f32>();
        let u2: f32 = rng.r#gen();
        let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).cos();
        self.mean + self.std_dev * z0
    }

    /// 连续采样`n`个值
    pub fn sample_n<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Array1<f32> {
        Array1::from_iter((0..n).map(|_| self.sample(rng)))
    }
}

impl Default for Normal {
    fn default() -> Self {
        Self::standard()
    }
}
