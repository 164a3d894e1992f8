use log::info;

use linear_fit::config::FitConfig;
use linear_fit::errors::FitError;
use linear_fit::pipeline;
use linear_fit::train::ConsoleProgress;

fn main() -> Result<(), FitError> {
    env_logger::init();

    let config = FitConfig::from_env()?;
    let outcome = pipeline::run(&config, &mut ConsoleProgress)?;

    info!(
        "拟合结果 {}, 图像已写入 {}",
        outcome.fitted.report.parameters,
        outcome.figure_path.display()
    );
    Ok(())
}
