/*
 * @Author       : 老董
 * @Date         : 2026-02-04
 * @Description  : 负责模型（仿射层）、损失函数、单步梯度计算与优化器
 */

mod criterion;
pub mod layer;
mod module;
pub mod optimizer;
mod parameters;
mod step;

pub use criterion::{MseLoss, Reduction};
pub use layer::{Init, Linear};
pub use module::Module;
pub use optimizer::{Optimizer, SGD};
pub use parameters::Parameters;
pub use step::{StepOutput, affine_step};

#[cfg(test)]
mod tests;
