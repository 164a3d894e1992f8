/*
 * @Author       : 老董
 * @Date         : 2026-02-08
 * @Description  : 端到端流程：生成数据 → 初始化模型 → 训练 → 作图。
 *                 同一个 RNG 先用于生成数据、再用于初始化参数，顺序固定，
 *                 因此给定种子时整个运行可复现。
 */

use ndarray::Array1;
use std::path::PathBuf;

use crate::config::FitConfig;
use crate::data::SampleSet;
use crate::errors::FitError;
use crate::nn::Linear;
use crate::train::{ProgressSink, Trainer, TrainingReport};
use crate::vision::Figure;

/// 训练完成（尚未作图）时的结果
#[derive(Debug, Clone)]
pub struct Fitted {
    pub samples: SampleSet,
    pub model: Linear,
    pub report: TrainingReport,
}

impl Fitted {
    /// 训练后的模型在样本输入上的预测
    pub fn predictions(&self) -> Array1<f32> {
        self.model.forward_batch(self.samples.inputs())
    }

    pub fn figure(&self) -> Result<Figure, FitError> {
        Ok(Figure::regression(&self.samples, &self.predictions())?)
    }
}

/// 完整运行的结果
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub fitted: Fitted,
    pub figure_path: PathBuf,
}

/// 生成数据并训练
pub fn fit(config: &FitConfig, sink: &mut dyn ProgressSink) -> Result<Fitted, FitError> {
    config.validate()?;
    let trainer = Trainer::new(config.trainer)?;

    let mut rng = config.rng();
    match config.seed {
        Some(seed) => log::debug!("随机种子: {seed}"),
        None => log::debug!("未指定随机种子，使用系统熵"),
    }

    let samples = config.data.generate(&mut rng)?;
    let mut model = Linear::with_init(&config.init, &mut rng)?;
    let report = trainer.fit(&mut model, &samples, sink)?;

    Ok(Fitted {
        samples,
        model,
        report,
    })
}

/// 生成数据、训练，并把结果画到`config.plot.path`
pub fn run(config: &FitConfig, sink: &mut dyn ProgressSink) -> Result<RunOutcome, FitError> {
    let fitted = fit(config, sink)?;
    let figure_path = fitted.figure()?.save(&config.plot)?;
    Ok(RunOutcome {
        fitted,
        figure_path,
    })
}
