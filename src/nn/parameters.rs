/*
 * @Author       : 老董
 * @Date         : 2026-02-04
 * @Description  : 仿射模型的参数对 (weight, bias)，同时也用来表示对应的梯度
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// 参数对 (weight, bias)
///
/// 训练中跨迭代保留的唯一状态；梯度也用同一类型表示，
/// 这样 SGD 更新可以直接写成 `params - lr * grad`。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Parameters {
    pub weight: f32,
    pub bias: f32,
}

impl Parameters {
    pub const fn new(weight: f32, bias: f32) -> Self {
        Self { weight, bias }
    }

    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0)
    }

    pub const fn as_array(&self) -> [f32; 2] {
        [self.weight, self.bias]
    }

    pub fn is_finite(&self) -> bool {
        self.weight.is_finite() && self.bias.is_finite()
    }
}

impl From<(f32, f32)> for Parameters {
    fn from((weight, bias): (f32, f32)) -> Self {
        Self::new(weight, bias)
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w = {:.4}, b = {:.4}", self.weight, self.bias)
    }
}

impl Add for Parameters {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.weight + rhs.weight, self.bias + rhs.bias)
    }
}

impl Sub for Parameters {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.weight - rhs.weight, self.bias - rhs.bias)
    }
}

impl Mul<Parameters> for f32 {
    type Output = Parameters;

    fn mul(self, rhs: Parameters) -> Parameters {
        Parameters::new(self * rhs.weight, self * rhs.bias)
    }
}
