/*
 * @Author       : 老董
 * @Date         : 2026-02-04
 * @Description  : 无状态的单步计算：(inputs, labels, w, b) -> (loss, grad_w, grad_b)
 *
 * 每个 epoch 都从头调用，不保留任何计算图；梯度由 MSE 的 VJP 经仿射层链式传回，
 * 结果与闭式解一致：
 *   ∂loss/∂w = (2/N)·Σ(pred − y)·x
 *   ∂loss/∂b = (2/N)·Σ(pred − y)
 */

use ndarray::Array1;

use super::{Linear, MseLoss, Parameters};
use crate::errors::FitError;

/// 单步计算结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutput {
    /// 本步（更新前）的损失
    pub loss: f32,
    /// 损失对 (w, b) 的梯度
    pub grad: Parameters,
}

/// 以参数`params`在整个样本集上做一次前向 + 反向
pub fn affine_step(
    inputs: &Array1<f32>,
    labels: &Array1<f32>,
    params: Parameters,
) -> Result<StepOutput, FitError> {
    let model = Linear::new(params);
    let criterion = MseLoss::new();

    let predictions = model.forward_batch(inputs);
    let loss = criterion.forward(&predictions, labels)?;
    let upstream = criterion.grad(&predictions, labels)?;
    let grad = model.backward(inputs, &upstream)?;

    Ok(StepOutput { loss, grad })
}
