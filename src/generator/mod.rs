//! # 印章生成模块（generator）
//!
//! ## 设计思路
//!
//! 按“画布 → 红框 → 选字体 → 量字 → 排版 → 写字 → 落盘”的顺序生成横版印章，
//! 每一步拆到独立子模块，固定参数全部集中在 `StampConfig`。
//!
//! - `config`：尺寸、线宽、留白、字号、颜色与文字
//! - `canvas`：底色填充、边框绘制、按覆盖率混色
//! - `font`：候选字体依次尝试，全部失败时回退内置位图字体
//! - `layout`：两行文字整体垂直居中、逐行水平居中
//! - `handler`：`StampGenerator` 编排整条流程
//!
//! ## 调用链
//!
//! ```text
//! bin/create_stamp
//!    ↓
//! settings::load_settings（可选覆盖）
//!    ↓
//! StampGenerator::new（校验配置 + 选定字体）
//!    ↓
//! StampGenerator::generate
//!    ├─ canvas::new_canvas / draw_border
//!    ├─ StampFont::measure
//!    ├─ layout::layout_two_lines
//!    └─ StampFont::draw
//!    ↓
//! storage::save_png → 印章.png
//! ```

pub mod canvas;
mod config;
mod error;
pub mod font;
mod handler;
pub mod layout;

pub use config::StampConfig;
pub use error::GeneratorError;
pub use font::{StampFont, TextBounds};
pub use handler::StampGenerator;
