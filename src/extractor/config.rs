//! # 提取配置模块
//!
//! ## 设计思路
//!
//! 判定阈值与输出换算参数集中在 `ExtractConfig`，`Default` 与印章红的标准规则逐位一致：
//! `alpha >= 30`、`r >= 60`、`r > g`、`r > b`、`(r-g) + (r-b) >= 40`，
//! 命中像素 `r + 20`（封顶 255）、`alpha = 220`。
//!
//! 另外两项是加载阶段的资源上限，避免误把超大文件整读进内存。

use serde::{Deserialize, Serialize};

/// 印章提取配置。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// 参与判定的最小 alpha。
    pub min_alpha: u8,
    /// 红色通道最小值。
    pub min_red: u8,
    /// `(r-g) + (r-b)` 的最小值。
    pub min_dominance: i32,
    /// 命中像素红色通道的增量（封顶 255）。
    pub red_boost: u8,
    /// 命中像素输出的 alpha。
    pub output_alpha: u8,
    /// 源文件体积上限（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_alpha: 30,
            min_red: 60,
            min_dominance: 40,
            red_boost: 20,
            output_alpha: 220,
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
        }
    }
}
