/*
 * @Author       : 老董
 * @Date         : 2026-02-05
 * @Description  : Optimizer trait 通用行为测试
 */

use ndarray::array;

use crate::data::SampleSet;
use crate::nn::optimizer::{Optimizer, SGD};
use crate::nn::{Linear, Module, Parameters};

#[test]
fn test_optimizer_as_trait_object() {
    let mut sgd: Box<dyn Optimizer> = Box::new(SGD::new(0.01).unwrap());
    assert_eq!(sgd.learning_rate(), 0.01);
    sgd.set_learning_rate(0.02).unwrap();
    assert_eq!(sgd.learning_rate(), 0.02);
}

/// 在无噪声数据上，每一步的损失都不增加
#[test]
fn test_minimize_decreases_loss() {
    let xs = array![0.0, 0.5, 1.0, 1.5, 2.0];
    let samples = SampleSet::new(xs.clone(), xs.mapv(|x| 2.0 * x + 1.0)).unwrap();
    let mut model = Linear::new(Parameters::zeros());
    let mut sgd: Box<dyn Optimizer> = Box::new(SGD::new(0.05).unwrap());

    let mut prev = f32::INFINITY;
    for _ in 0..200 {
        let loss = sgd.minimize(&mut model, &samples).unwrap();
        assert!(loss <= prev, "loss 增加: {prev} -> {loss}");
        prev = loss;
    }
    assert!(prev < 1e-2);
    assert!(model.parameters().is_finite());
}
