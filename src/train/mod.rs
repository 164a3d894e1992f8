/*
 * @Author       : 老董
 * @Date         : 2026-02-06
 * @Description  : 训练循环
 *
 * 固定跑满`epochs`轮：没有早停，也不检查收敛。每轮都是
 * zero_grad → 前向 + 损失 + 反向 → 更新参数，
 * 每`report_every`轮产生一条进度记录 (epoch, loss)。
 */

mod progress;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::data::SampleSet;
use crate::errors::FitError;
use crate::nn::{Linear, Module, Optimizer, Parameters, SGD};

pub use progress::{ConsoleProgress, Progress, ProgressSink};

/// 训练超参
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// 总轮数
    pub epochs: usize,
    /// 学习率
    pub learning_rate: f32,
    /// 每隔多少轮报告一次进度（第 0 轮总会报告）
    pub report_every: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            epochs: 300,
            learning_rate: 0.01,
            report_every: 50,
        }
    }
}

impl TrainerConfig {
    pub fn validate(&self) -> Result<(), FitError> {
        if self.epochs == 0 {
            return Err(FitError::InvalidConfig("epochs 须大于 0".to_string()));
        }
        if self.report_every == 0 {
            return Err(FitError::InvalidConfig("report_every 须大于 0".to_string()));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(FitError::InvalidLearningRate(self.learning_rate));
        }
        Ok(())
    }

    /// 第`epoch`轮是否需要报告
    pub const fn is_report_epoch(&self, epoch: usize) -> bool {
        epoch % self.report_every == 0
    }
}

/// 训练结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// 训练结束后的参数
    pub parameters: Parameters,
    /// 每轮（更新前）的损失，长度等于 epochs
    pub losses: Vec<f32>,
    /// 已发出的进度记录
    pub progress: Vec<Progress>,
}

impl TrainingReport {
    /// 最后一轮的损失
    pub fn final_loss(&self) -> Option<f32> {
        self.losses.last().copied()
    }
}

/// 训练器
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trainer {
    config: TrainerConfig,
}

impl Trainer {
    pub fn new(config: TrainerConfig) -> Result<Self, FitError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub const fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// 用 SGD（学习率取自配置）训练
    pub fn fit(
        &self,
        model: &mut Linear,
        samples: &SampleSet,
        sink: &mut dyn ProgressSink,
    ) -> Result<TrainingReport, FitError> {
        let mut optimizer = SGD::new(self.config.learning_rate)?;
        self.fit_with(model, samples, &mut optimizer, sink)
    }

    /// 用指定优化器训练
    pub fn fit_with<O: Optimizer + ?Sized>(
        &self,
        model: &mut dyn Module,
        samples: &SampleSet,
        optimizer: &mut O,
        sink: &mut dyn ProgressSink,
    ) -> Result<TrainingReport, FitError> {
        let TrainerConfig {
            epochs,
            learning_rate,
            report_every,
        } = self.config;
        log::info!(
            "开始训练: {} 个样本, epochs={}, lr={}, report_every={}, 初始参数 {}",
            samples.len(),
            epochs,
            learning_rate,
            report_every,
            model.parameters()
        );

        let mut losses = Vec::with_capacity(epochs);
        let mut progress = Vec::with_capacity(epochs.div_ceil(report_every));
        let mut warned_non_finite = false;

        for epoch in 0..epochs {
            let loss = optimizer.minimize(model, samples)?;
            losses.push(loss);

            if !loss.is_finite() && !warned_non_finite {
                log::warn!("第 {epoch} 轮损失为非有限值 ({loss})，训练继续，但结果可能已发散");
                warned_non_finite = true;
            }

            if self.config.is_report_epoch(epoch) {
                let observation = Progress { epoch, loss };
                log::debug!("{observation} ({})", model.parameters());
                sink.observe(&observation);
                progress.push(observation);
            }
        }

        let parameters = model.parameters();
        log::info!(
            "训练结束: {parameters}, 最终损失 {:.6}",
            losses.last().copied().unwrap_or(f32::NAN)
        );

        Ok(TrainingReport {
            parameters,
            losses,
            progress,
        })
    }
}
