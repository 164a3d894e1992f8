/*
 * @Author       : 老董
 * @Date         : 2026-02-03
 * @Description  : 合成线性数据：x 在 [lo, hi] 上均匀取点，y = weight * x + bias + 噪声
 */

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::DataError;
use crate::distribution::Normal;

/// 样本集：按下标对齐的输入和标签，构造后不可变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    inputs: Array1<f32>,
    labels: Array1<f32>,
}

impl SampleSet {
    /// 由已有数据构造样本集（长度须一致且非空）
    pub fn new(inputs: Array1<f32>, labels: Array1<f32>) -> Result<Self, DataError> {
        if inputs.len() != labels.len() {
            return Err(DataError::LengthMismatch {
                inputs: inputs.len(),
                labels: labels.len(),
            });
        }
        if inputs.is_empty() {
            return Err(DataError::EmptySampleSet);
        }
        Ok(Self { inputs, labels })
    }

    pub const fn inputs(&self) -> &Array1<f32> {
        &self.inputs
    }

    pub const fn labels(&self) -> &Array1<f32> {
        &self.labels
    }

    /// 样本数 N（恒 >= 1）
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// 以 (x, y) 对的形式遍历
    pub fn iter(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.inputs.iter().copied().zip(self.labels.iter().copied())
    }
}

/// 合成数据参数
///
/// 默认值：100 个样本，区间 [0, 10]，真实直线 y = 2x + 1，噪声标准差 0.5
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticSpec {
    /// 样本数 N
    pub count: usize,
    /// 区间下界（含）
    pub lo: f32,
    /// 区间上界（含）
    pub hi: f32,
    /// 真实斜率
    pub weight: f32,
    /// 真实截距
    pub bias: f32,
    /// 高斯噪声的标准差（0 表示无噪声）
    pub noise_std: f32,
}

impl Default for SyntheticSpec {
    fn default() -> Self {
        Self {
            count: 100,
            lo: 0.0,
            hi: 10.0,
            weight: 2.0,
            bias: 1.0,
            noise_std: 0.5,
        }
    }
}

impl SyntheticSpec {
    /// 同默认参数，但不加噪声（最优解恰为真实直线）
    pub fn noiseless() -> Self {
        Self {
            noise_std: 0.0,
            ..Self::default()
        }
    }

    /// 校验参数
    pub fn validate(&self) -> Result<(), DataError> {
        if self.count == 0 {
            return Err(DataError::EmptySampleSet);
        }
        if !self.lo.is_finite() || !self.hi.is_finite() || self.lo >= self.hi {
            return Err(DataError::InvalidInterval {
                lo: self.lo,
                hi: self.hi,
            });
        }
        if !self.weight.is_finite() || !self.bias.is_finite() {
            return Err(DataError::InvalidCoefficients {
                weight: self.weight,
                bias: self.bias,
            });
        }
        Normal::new(0.0, self.noise_std)?;
        Ok(())
    }

    /// 无噪声的真实值 weight * x + bias
    pub fn truth(&self, x: f32) -> f32 {
        self.weight * x + self.bias
    }

    /// 生成样本集
    ///
    /// 噪声按输入顺序依次从`rng`中采样，所以相同种子得到相同的样本集。
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SampleSet, DataError> {
        self.validate()?;
        let noise = Normal::new(0.0, self.noise_std)?;

        let inputs = linspace(self.lo, self.hi, self.count);
        let labels = inputs.mapv(|x| self.truth(x) + noise.sample(rng));
        log::debug!(
            "合成 {} 个样本: x ∈ [{}, {}], y = {}x + {} + N(0, {}²)",
            self.count,
            self.lo,
            self.hi,
            self.weight,
            self.bias,
            self.noise_std
        );

        SampleSet::new(inputs, labels)
    }
}

/// 在 [lo, hi] 上均匀取`n`个点，两端点精确取到；`n == 1` 时只有 `lo`
pub(crate) fn linspace(lo: f32, hi: f32, n: usize) -> Array1<f32> {
    if n <= 1 {
        return Array1::from_elem(n, lo);
    }
    let step = (hi - lo) / (n - 1) as f32;
    Array1::from_shape_fn(n, |i| if i == n - 1 { hi } else { lo + step * i as f32 })
}
