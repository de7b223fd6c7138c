//! # 提取错误模型
//!
//! 单一错误枚举承载提取链路中的所有失败来源，调用侧可按分支匹配。

use std::path::PathBuf;

/// 印章提取错误类型。
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("源图片不存在: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),
}
