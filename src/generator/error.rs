//! # 生成错误模型

/// 印章生成错误类型。
///
/// 字体缺失不在其中：字体按候选顺序回退，最终总能落到内置字体。
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("印章配置无效：{0}")]
    InvalidConfig(String),
}
