//! # Linear Fit
//!
//! `linear_fit`用纯rust演示最基本的梯度下降：在`y = 2x + 1`加高斯噪声生成的合成数据上，
//! 用均方误差和 SGD 训练一个单输入单输出的仿射层，定期打印损失，
//! 最后把样本散点和拟合直线画成图（svg 或 png）。
//!
//! 整个运行只使用一个显式传入的随机源：先生成数据，再初始化参数。
//! 给定种子（`LINEAR_FIT_SEED`）时结果完全可复现。

pub mod config;
pub mod data;
pub mod distribution;
pub mod errors;
pub mod nn;
pub mod pipeline;
pub mod train;
pub mod utils;
pub mod vision;

pub use config::FitConfig;
pub use errors::FitError;
pub use pipeline::{RunOutcome, fit, run};
