//! # 印章提取模块（extractor）
//!
//! ## 设计思路
//!
//! 将“源图定位 → 加载校验 → 逐像素红色判定 → 透明背景输出”按职责拆分：
//!
//! - `source`：默认路径 / 备用路径 / 命令行覆盖的解析顺序
//! - `pipeline`：读取、尺寸预检、解码为 RGBA，以及单遍提取
//! - `classify`：红色判定规则与输出像素换算（纯函数）
//! - `config`：判定阈值与资源上限
//! - `handler`：`StampExtractor` 编排整条流程并记录阶段耗时
//!
//! ## 调用链
//!
//! ```text
//! bin/extract_stamp [SOURCE]
//!    ↓
//! SourceCandidates::resolve
//!    ↓
//! pipeline::load_source（存在性 + 体积 + 像素上限 + 解码）
//!    ↓
//! pipeline::extract_red（classify::extract_pixel 逐像素）
//!    ↓
//! storage::save_png → 印章.png
//! ```

pub mod classify;
mod config;
mod error;
mod handler;
pub mod pipeline;
pub mod source;

pub use config::ExtractConfig;
pub use error::ExtractError;
pub use handler::StampExtractor;
pub use source::{ResolvedSource, SourceCandidates, SourceOrigin};
