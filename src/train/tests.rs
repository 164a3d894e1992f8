/*
 * @Author       : 老董
 * @Date         : 2026-02-06
 * @Description  : 训练循环单元测试
 */

use approx::assert_abs_diff_eq;
use ndarray::array;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{Progress, Trainer, TrainerConfig};
use crate::assert_err;
use crate::data::{SampleSet, SyntheticSpec};
use crate::errors::FitError;
use crate::nn::{Init, Linear, Module, Parameters};

fn noiseless_samples() -> SampleSet {
    SyntheticSpec::noiseless()
        .generate(&mut StdRng::seed_from_u64(0))
        .unwrap()
}

// ========== 进度报告 ==========

/// epochs=300、report_every=50 时恰好 6 条记录：0, 50, ..., 250
#[test]
fn test_progress_epochs() {
    let samples = noiseless_samples();
    let mut model = Linear::new(Parameters::zeros());
    let mut sink: Vec<Progress> = Vec::new();

    let trainer = Trainer::new(TrainerConfig::default()).unwrap();
    let report = trainer.fit(&mut model, &samples, &mut sink).unwrap();

    let epochs: Vec<usize> = sink.iter().map(|p| p.epoch).collect();
    assert_eq!(epochs, vec![0, 50, 100, 150, 200, 250]);
    assert_eq!(report.progress, sink);
    assert_eq!(report.losses.len(), 300);

    // 记录的损失就是该轮更新前的损失
    for p in &sink {
        assert_eq!(p.loss, report.losses[p.epoch]);
    }
}

#[test]
fn test_progress_display() {
    let p = Progress {
        epoch: 50,
        loss: 1.234_56,
    };
    assert_eq!(p.to_string(), "Epoch 50, Loss: 1.2346");
    assert_abs_diff_eq!(p.rounded_loss(), 1.2346, epsilon = 1e-6);
}

#[test]
fn test_progress_interval_not_dividing_epochs() {
    let samples = noiseless_samples();
    let mut model = Linear::new(Parameters::zeros());
    let mut sink: Vec<Progress> = Vec::new();
    let config = TrainerConfig {
        epochs: 10,
        report_every: 4,
        ..TrainerConfig::default()
    };
    Trainer::new(config)
        .unwrap()
        .fit(&mut model, &samples, &mut sink)
        .unwrap();
    let epochs: Vec<usize> = sink.iter().map(|p| p.epoch).collect();
    assert_eq!(epochs, vec![0, 4, 8]);
}

// ========== 收敛性 ==========

/// 无噪声数据上损失单调不增；300 轮后 w 已接近 2，
/// b 方向的收敛较慢（该方向的收缩因子约为 0.995/轮），误差仍在 0.2 以内
#[test]
fn test_noiseless_300_epochs() {
    let samples = noiseless_samples();
    let mut model = Linear::new(Parameters::zeros());
    let trainer = Trainer::new(TrainerConfig::default()).unwrap();
    let report = trainer.fit(&mut model, &samples, &mut Vec::<Progress>::new()).unwrap();

    for pair in report.losses.windows(2) {
        assert!(pair[1] <= pair[0], "loss 增加: {} -> {}", pair[0], pair[1]);
    }
    assert_abs_diff_eq!(report.parameters.weight, 2.0, epsilon = 0.05);
    assert_abs_diff_eq!(report.parameters.bias, 1.0, epsilon = 0.2);
    assert!(report.final_loss().unwrap() < 0.01);
    assert_eq!(report.parameters, model.parameters());
}

/// 训练足够久后收敛到 (2, 1)
#[test]
fn test_noiseless_long_run_converges() {
    let samples = noiseless_samples();
    let mut model = Linear::new(Parameters::zeros());
    let config = TrainerConfig {
        epochs: 3000,
        ..TrainerConfig::default()
    };
    let report = Trainer::new(config)
        .unwrap()
        .fit(&mut model, &samples, &mut Vec::<Progress>::new())
        .unwrap();

    assert_abs_diff_eq!(report.parameters.weight, 2.0, epsilon = 1e-3);
    assert_abs_diff_eq!(report.parameters.bias, 1.0, epsilon = 1e-3);
}

/// 有噪声数据 + 默认随机初始化：仍然能拟合出接近真实直线的结果
#[test]
fn test_noisy_fit() {
    let mut rng = StdRng::seed_from_u64(42);
    let samples = SyntheticSpec::default().generate(&mut rng).unwrap();
    let mut model = Linear::with_init(&Init::Default, &mut rng).unwrap();
    let report = Trainer::new(TrainerConfig::default())
        .unwrap()
        .fit(&mut model, &samples, &mut Vec::<Progress>::new())
        .unwrap();

    assert!(report.losses[299] < report.losses[0]);
    assert_abs_diff_eq!(report.parameters.weight, 2.0, epsilon = 0.15);
}

// ========== 边界 ==========

/// 单个样本：不会除零，损失保持有限且收敛
#[test]
fn test_single_sample() {
    let samples = SampleSet::new(array![0.0], array![1.0]).unwrap();
    let mut model = Linear::new(Parameters::new(0.5, 0.5));
    let report = Trainer::new(TrainerConfig::default())
        .unwrap()
        .fit(&mut model, &samples, &mut Vec::<Progress>::new())
        .unwrap();

    assert!(report.losses.iter().all(|l| l.is_finite()));
    // x = 0 时 w 的梯度恒为 0；b 的误差每轮收缩为原来的 0.98
    assert_eq!(report.parameters.weight, 0.5);
    assert_abs_diff_eq!(report.parameters.bias, 1.0, epsilon = 1e-2);
}

/// 学习率过大时发散，但循环照常跑满，不报错
#[test]
fn test_divergence_is_not_an_error() {
    let samples = noiseless_samples();
    let mut model = Linear::new(Parameters::zeros());
    let config = TrainerConfig {
        learning_rate: 0.1,
        ..TrainerConfig::default()
    };
    let report = Trainer::new(config)
        .unwrap()
        .fit(&mut model, &samples, &mut Vec::<Progress>::new())
        .unwrap();

    assert_eq!(report.losses.len(), 300);
    assert_eq!(report.progress.len(), 6);
    let last = report.final_loss().unwrap();
    assert!(!last.is_finite() || last > report.losses[0]);
}

#[test]
fn test_invalid_config() {
    let zero_epochs = TrainerConfig {
        epochs: 0,
        ..TrainerConfig::default()
    };
    assert_err!(Trainer::new(zero_epochs), FitError::InvalidConfig(msg) if msg.contains("epochs"));

    let zero_interval = TrainerConfig {
        report_every: 0,
        ..TrainerConfig::default()
    };
    assert_err!(
        Trainer::new(zero_interval),
        FitError::InvalidConfig("report_every 须大于 0")
    );

    let bad_lr = TrainerConfig {
        learning_rate: -0.01,
        ..TrainerConfig::default()
    };
    assert_err!(Trainer::new(bad_lr), FitError::InvalidLearningRate(_));
}
