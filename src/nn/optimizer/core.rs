/*
 * @Author       : 老董
 * @Date         : 2026-02-04
 * @Description  : Optimizer API - PyTorch 风格
 *
 * 核心特性：
 * - 梯度保存在优化器内部的缓冲区，`backward()` 会累加到缓冲区
 * - `zero_grad()` 清空缓冲区
 * - `step()` 只根据缓冲区里的梯度更新模型参数
 * - `minimize()` 一步完成 zero_grad → backward → step
 */

use crate::data::SampleSet;
use crate::errors::FitError;
use crate::nn::{Module, Parameters, affine_step};

/// Optimizer trait（PyTorch 风格）
///
/// # 使用示例
/// ```ignore
/// let mut optimizer = SGD::new(0.01)?;
///
/// // 训练循环
/// optimizer.zero_grad();
/// let loss = optimizer.backward(&model, &samples)?;
/// optimizer.step(&mut model)?;
///
/// // 或者一步完成
/// let loss = optimizer.minimize(&mut model, &samples)?;
/// ```
pub trait Optimizer {
    /// 清零梯度
    fn zero_grad(&mut self);

    /// 在整个样本集上计算梯度并累加到缓冲区，返回本次（更新前的）损失
    fn backward(&mut self, model: &dyn Module, samples: &SampleSet) -> Result<f32, FitError>;

    /// 用缓冲区中的梯度更新参数；缓冲区为空时不做任何事
    fn step(&mut self, model: &mut dyn Module) -> Result<(), FitError>;

    /// 当前缓冲区中的梯度
    fn grad(&self) -> Option<Parameters>;

    /// `一步完成训练：zero_grad` → backward → step
    ///
    /// # 执行顺序
    /// 1. `zero_grad()` - 清零梯度（必须在前，因为 backward 会累加梯度）
    /// 2. `backward()` - 计算梯度
    /// 3. `step()` - 更新参数
    ///
    /// # 返回
    /// 本步的损失值
    fn minimize(&mut self, model: &mut dyn Module, samples: &SampleSet) -> Result<f32, FitError> {
        self.zero_grad();
        let loss = self.backward(&*model, samples)?;
        self.step(model)?;
        Ok(loss)
    }

    /// 获取学习率
    fn learning_rate(&self) -> f32;

    /// 设置学习率
    fn set_learning_rate(&mut self, lr: f32) -> Result<(), FitError>;

    /// 重置累积状态
    fn reset(&mut self);
}

/// 校验学习率：须为有限正数
fn check_learning_rate(lr: f32) -> Result<f32, FitError> {
    if lr.is_finite() && lr > 0.0 {
        Ok(lr)
    } else {
        Err(FitError::InvalidLearningRate(lr))
    }
}

/// SGD 优化器（PyTorch 风格）
///
/// 梯度下降：θ = θ - α * ∇θ
///
/// # 使用示例
/// ```ignore
/// let mut optimizer = SGD::new(0.01)?;
/// optimizer.zero_grad();
/// optimizer.backward(&model, &samples)?;
/// optimizer.step(&mut model)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SGD {
    /// 学习率
    lr: f32,
    /// 梯度缓冲区
    grad: Option<Parameters>,
}

impl SGD {
    /// 创建新的 SGD 优化器
    pub fn new(lr: f32) -> Result<Self, FitError> {
        Ok(Self {
            lr: check_learning_rate(lr)?,
            grad: None,
        })
    }
}

impl Optimizer for SGD {
    fn zero_grad(&mut self) {
        self.grad = None;
    }

    fn backward(&mut self, model: &dyn Module, samples: &SampleSet) -> Result<f32, FitError> {
        let out = affine_step(samples.inputs(), samples.labels(), model.parameters())?;
        self.grad = Some(match self.grad {
            Some(acc) => acc + out.grad,
            None => out.grad,
        });
        Ok(out.loss)
    }

    fn step(&mut self, model: &mut dyn Module) -> Result<(), FitError> {
        if let Some(grad) = self.grad {
            let current = model.parameters();
            model.set_parameters(current - self.lr * grad);
        }
        Ok(())
    }

    fn grad(&self) -> Option<Parameters> {
        self.grad
    }

    fn learning_rate(&self) -> f32 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f32) -> Result<(), FitError> {
        self.lr = check_learning_rate(lr)?;
        Ok(())
    }

    fn reset(&mut self) {
        // SGD 除梯度缓冲区外无状态
        self.grad = None;
    }
}
