//! # 印章工具库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────┐   ┌──────────────────────────────┐
//! │  bin/create_stamp            │   │  bin/extract_stamp [SOURCE]  │
//! └──────────────┬───────────────┘   └──────────────┬───────────────┘
//!                ↓                                  ↓
//! ┌─ generator ─────────────────┐    ┌─ extractor ─────────────────┐
//! │  config  StampConfig        │    │  config   ExtractConfig     │
//! │  canvas  黑底 + 红框        │    │  source   源图路径解析      │
//! │  font    字体候选 + 内置回退│    │  pipeline 加载 + 逐像素提取 │
//! │  layout  两行居中排版       │    │  classify 红色判定          │
//! │  handler StampGenerator     │    │  handler  StampExtractor    │
//! └──────────────┬──────────────┘    └──────────────┬──────────────┘
//!                └──────────────┬───────────────────┘
//!                               ↓
//!          settings（可选 JSON 覆盖） · storage（输出 印章.png）
//!                               ↓
//!                      error ── AppError
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，两个命令行入口的返回类型 |
//! | [`generator`] | 按固定参数合成红框黑底、两行红字的印章图片 |
//! | [`extractor`] | 从文档图片中提取红色像素，输出透明背景 PNG |
//! | [`settings`] | 读取可选的 `seal_stamp.json`，覆盖默认参数 |
//! | [`storage`] | 基准目录、输出路径与 PNG 写入 |

pub mod error;
pub mod extractor;
pub mod generator;
pub mod settings;
pub mod storage;
