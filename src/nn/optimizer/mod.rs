/*
 * @Author       : 老董
 * @Date         : 2026-02-04
 * @Description  : 优化器模块，实现 PyTorch 风格的梯度优化算法
 */

mod core;

pub use self::core::{Optimizer, SGD};
