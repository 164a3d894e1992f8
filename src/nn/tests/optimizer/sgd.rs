/*
 * @Author       : 老董
 * @Date         : 2026-02-05
 * @Description  : SGD (梯度下降) 优化器测试
 */

use approx::assert_abs_diff_eq;
use ndarray::array;

use crate::assert_err;
use crate::data::SampleSet;
use crate::errors::FitError;
use crate::nn::optimizer::{Optimizer, SGD};
use crate::nn::{Linear, Module, Parameters};

fn tiny_samples() -> SampleSet {
    // y = 2x + 1
    SampleSet::new(array![0.0, 1.0, 2.0], array![1.0, 3.0, 5.0]).unwrap()
}

#[test]
fn test_sgd_creation() {
    let sgd = SGD::new(0.01).unwrap();
    assert_eq!(sgd.learning_rate(), 0.01);
    assert_eq!(sgd.grad(), None);
}

#[test]
fn test_sgd_invalid_learning_rate() {
    assert_err!(SGD::new(0.0), FitError::InvalidLearningRate(_));
    assert_err!(SGD::new(-0.1), FitError::InvalidLearningRate(_));
    assert_err!(SGD::new(f32::NAN), FitError::InvalidLearningRate(_));

    let mut sgd = SGD::new(0.01).unwrap();
    assert_err!(sgd.set_learning_rate(f32::INFINITY), FitError::InvalidLearningRate(_));
    assert_eq!(sgd.learning_rate(), 0.01);
}

#[test]
fn test_sgd_learning_rate_modification() {
    let mut sgd = SGD::new(0.01).unwrap();
    sgd.set_learning_rate(0.001).unwrap();
    assert_eq!(sgd.learning_rate(), 0.001);
}

#[test]
fn test_sgd_update_formula() {
    // 测试SGD更新公式：θ_new = θ_old - α * ∇θ
    // 初始 w=0, b=0，样本 x=[0,1,2], y=[1,3,5]
    // pred = 0, r = pred - y = [-1, -3, -5]
    // ∂w = (2/3)·Σ r·x = (2/3)·(-13) = -26/3
    // ∂b = (2/3)·Σ r   = (2/3)·(-9)  = -6
    // w_new = 0 - 0.1 * (-26/3) = 0.8667, b_new = 0 - 0.1 * (-6) = 0.6
    let samples = tiny_samples();
    let mut model = Linear::new(Parameters::zeros());
    let mut sgd = SGD::new(0.1).unwrap();

    let loss = sgd.minimize(&mut model, &samples).unwrap();

    // loss = (1 + 9 + 25) / 3
    assert_abs_diff_eq!(loss, 35.0 / 3.0, epsilon = 1e-5);
    assert_abs_diff_eq!(model.weight(), 0.1 * 26.0 / 3.0, epsilon = 1e-5);
    assert_abs_diff_eq!(model.bias(), 0.6, epsilon = 1e-6);
}

/// backward 会累加梯度，zero_grad 负责清零
#[test]
fn test_sgd_backward_accumulates() {
    let samples = tiny_samples();
    let model = Linear::new(Parameters::zeros());
    let mut sgd = SGD::new(0.1).unwrap();

    sgd.backward(&model, &samples).unwrap();
    let once = sgd.grad().unwrap();
    sgd.backward(&model, &samples).unwrap();
    let twice = sgd.grad().unwrap();
    assert_abs_diff_eq!(twice.weight, 2.0 * once.weight, epsilon = 1e-5);
    assert_abs_diff_eq!(twice.bias, 2.0 * once.bias, epsilon = 1e-5);

    sgd.zero_grad();
    assert_eq!(sgd.grad(), None);
}

/// minimize 每次都先清零，所以连续两步之间不会累加梯度
#[test]
fn test_sgd_minimize_does_not_accumulate() {
    let samples = tiny_samples();
    let mut model = Linear::new(Parameters::zeros());
    let mut sgd = SGD::new(0.05).unwrap();

    sgd.minimize(&mut model, &samples).unwrap();
    let after_first = model.parameters();
    sgd.minimize(&mut model, &samples).unwrap();

    // 第二步的梯度只取决于第一步之后的参数
    let expected = crate::nn::affine_step(samples.inputs(), samples.labels(), after_first)
        .unwrap()
        .grad;
    assert_eq!(sgd.grad(), Some(expected));
    let second = after_first - 0.05 * expected;
    assert_eq!(model.parameters(), second);
}

#[test]
fn test_sgd_step_without_grad_is_noop() {
    let mut model = Linear::new(Parameters::new(1.0, 2.0));
    let mut sgd = SGD::new(0.1).unwrap();
    sgd.step(&mut model).unwrap();
    assert_eq!(model.parameters(), Parameters::new(1.0, 2.0));
}

#[test]
fn test_sgd_reset_clears_grad() {
    let samples = tiny_samples();
    let model = Linear::new(Parameters::zeros());
    let mut sgd = SGD::new(0.1).unwrap();
    sgd.backward(&model, &samples).unwrap();
    sgd.reset();
    assert_eq!(sgd.grad(), None);
    assert_eq!(sgd.learning_rate(), 0.1);
}
