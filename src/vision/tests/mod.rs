
use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::data::{SampleSet, SyntheticSpec};

/// 100 个无噪声样本，以及一条略有偏差的预测线
fn fitted() -> (SampleSet, Array1<f32>) {
    let samples = SyntheticSpec::noiseless()
        .generate(&mut StdRng::seed_from_u64(1))
        .unwrap();
    let predictions = samples.inputs().mapv(|x| 1.9 * x + 1.2);
    (samples, predictions)
}
