//! 数据模块
//!
//! 生成线性回归所需的合成样本。
//!
//! # 主要组件
//!
//! - [`SampleSet`]: 按下标对齐的输入/标签序列，生成后不可变
//! - [`SyntheticSpec`]: 合成数据的参数（样本数、区间、真实直线、噪声）
//! - [`DataError`]: 数据错误类型
//!
//! # 使用示例
//!
//! ```ignore
//! use linear_fit::data::SyntheticSpec;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let samples = SyntheticSpec::default().generate(&mut rng)?;
//! assert_eq!(samples.len(), 100);
//! ```

pub mod error;
mod synthetic;


// Re-exports
pub use error::DataError;
pub use synthetic::{SampleSet, SyntheticSpec};
