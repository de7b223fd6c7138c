//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 两个工具各自维护组件级错误（`GeneratorError` / `ExtractError`），
//! 入口层统一上转为 `AppError`，由 `main` 打印并以退出码 1 结束进程。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 组件错误通过 `#[from]` 自动转换，无需手动 map。

use crate::extractor::ExtractError;
use crate::generator::GeneratorError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 印章生成失败（配置非法 / 渲染异常）
    #[error("{0}")]
    Generator(#[from] GeneratorError),

    /// 印章提取失败（源图缺失 / 解码失败 / 资源限制）
    #[error("{0}")]
    Extract(#[from] ExtractError),

    /// 输出目录不可用
    #[error("存储目录不可用: {0}")]
    Storage(String),

    /// PNG 编码或写入失败
    #[error("图片写入失败: {0}")]
    Encode(String),
}
