/*
 * @Author       : 老董
 * @Date         : 2026-02-04
 * @Description  : Layer 模块 - 目前只有单输入单输出的仿射层
 */

mod linear;

pub use linear::{Init, Linear};
