/*
 * @Author       : 老董
 * @Date         : 2026-02-08
 * @Description  : 运行配置：默认值 ← JSON 文件 ← 环境变量，逐层覆盖。
 *                 所有字段都带 `#[serde(default)]`，JSON 里只写需要改的部分即可。
 */

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::data::SyntheticSpec;
use crate::errors::FitError;
use crate::nn::Init;
use crate::train::TrainerConfig;
use crate::vision::PlotConfig;

/// 随机种子（u64）；不设置时使用系统熵
pub const ENV_SEED: &str = "LINEAR_FIT_SEED";
/// JSON 配置文件路径
pub const ENV_CONFIG: &str = "LINEAR_FIT_CONFIG";
/// 图像输出路径，扩展名决定格式
pub const ENV_PLOT: &str = "LINEAR_FIT_PLOT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("读取配置文件`{path}`失败：{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("配置文件解析失败：{0}")]
    Parse(#[from] serde_json::Error),
    #[error("随机种子须为 u64，实际为{0:?}")]
    InvalidSeed(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    pub data: SyntheticSpec,
    pub init: Init,
    pub trainer: TrainerConfig,
    pub seed: Option<u64>,
    pub plot: PlotConfig,
}

impl FitConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// 从进程环境变量构造并校验
    pub fn from_env() -> Result<Self, FitError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// 同`from_env`，但变量来源可替换（便于测试）
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, FitError> {
        let mut config = match get(ENV_CONFIG) {
            Some(path) => {
                log::debug!("从`{path}`加载配置");
                Self::load(path)?
            }
            None => Self::default(),
        };
        if let Some(seed) = get(ENV_SEED) {
            let parsed = seed
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSeed(seed.clone()))?;
            config.seed = Some(parsed);
        }
        if let Some(path) = get(ENV_PLOT) {
            config.plot.path = PathBuf::from(path);
        }
        config.validate()?;
        Ok(config)
    }

    /// 一次性检查所有参数，避免训练跑完才发现输出路径不对
    pub fn validate(&self) -> Result<(), FitError> {
        self.data.validate()?;
        self.init.validate()?;
        self.trainer.validate()?;
        self.plot.validate()?;
        Ok(())
    }

    /// 整个运行唯一的随机源
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
