/*
 * @Author       : 老董
 * @Date         : 2026-02-06
 * @Description  : 训练进度记录及其输出目标
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// 一条进度记录：第`epoch`轮（更新前）的损失
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub epoch: usize,
    pub loss: f32,
}

impl Progress {
    /// 保留 4 位小数后的损失
    pub fn rounded_loss(&self) -> f32 {
        (self.loss * 1e4).round() / 1e4
    }
}

/// 格式：`Epoch <n>, Loss: <loss:.4f>`
impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Epoch {}, Loss: {:.4}", self.epoch, self.loss)
    }
}

/// 进度记录的接收方
pub trait ProgressSink {
    fn observe(&mut self, progress: &Progress);
}

/// 打印到标准输出
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn observe(&mut self, progress: &Progress) {
        println!("{progress}");
    }
}

/// 收集到内存中（测试、事后分析用）
impl ProgressSink for Vec<Progress> {
    fn observe(&mut self, progress: &Progress) {
        self.push(*progress);
    }
}
