/*
 * @Author       : 老董
 * @Date         : 2026-02-04
 * @Description  : Module trait 定义
 */

use super::Parameters;

/// 模块 trait
///
/// # 设计原则
/// - `forward()` **不是** trait 方法（签名各异）
/// - `new()` **不是** trait 方法（参数各异）
/// - `parameters()` / `set_parameters()` 签名一致，放入 trait，供优化器读写
pub trait Module {
    /// 获取当前可训练参数
    fn parameters(&self) -> Parameters;

    /// 覆盖可训练参数（优化器更新时调用）
    fn set_parameters(&mut self, params: Parameters);

    /// 获取参数数量
    fn num_params(&self) -> usize {
        self.parameters().as_array().len()
    }
}
