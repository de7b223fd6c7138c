//! # 生成配置模块
//!
//! ## 设计思路
//!
//! 所有“固定常量”集中到 `StampConfig`，`Default` 即横版印章的标准参数。
//! 配置可由 `seal_stamp.json` 的 `generator` 段覆盖，未填写的字段沿用默认值。

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::GeneratorError;

/// 单边尺寸上限，防止配置文件误写导致超大画布。
const MAX_CANVAS_DIMENSION: u32 = 8192;

/// 默认字体候选：先 macOS 系统中文字体，再常见 Linux / Windows 中文字体。
const DEFAULT_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/Supplemental/Songti.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-zenhei.ttc",
    "C:/Windows/Fonts/msyh.ttc",
    "C:/Windows/Fonts/simsun.ttc",
];

/// 印章生成配置。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StampConfig {
    /// 画布宽度（像素）。横版要求宽 > 高。
    pub width: u32,
    /// 画布高度（像素）。
    pub height: u32,
    /// 红框线宽（像素），从画布边缘向内计。
    pub border: u32,
    /// 红框内侧到文字区域的留白（像素）。
    pub inset: u32,
    /// 字号（像素 / em）。
    pub font_size: f32,
    /// 两行文字之间的间距（像素）。
    pub line_gap: f32,
    /// 边框与文字颜色（RGBA）。
    pub ink: [u8; 4],
    /// 底色（RGBA）。
    pub background: [u8; 4],
    /// 第一行文字。
    pub first_line: String,
    /// 第二行文字。
    pub second_line: String,
    /// 字体文件候选，按优先级排列。
    pub font_candidates: Vec<PathBuf>,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 160,
            border: 12,
            inset: 8,
            font_size: 42.0,
            line_gap: 16.0,
            ink: [200, 0, 0, 255],
            background: [0, 0, 0, 255],
            first_line: "注塑".to_string(),
            second_line: "部印".to_string(),
            font_candidates: DEFAULT_FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
        }
    }
}

impl StampConfig {
    /// 校验配置是否能画出一枚完整的印章。
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.width == 0 || self.height == 0 {
            return Err(GeneratorError::InvalidConfig("画布宽高必须大于 0".to_string()));
        }
        if self.width > MAX_CANVAS_DIMENSION || self.height > MAX_CANVAS_DIMENSION {
            return Err(GeneratorError::InvalidConfig(format!(
                "画布过大：{}x{}（单边上限：{}）",
                self.width, self.height, MAX_CANVAS_DIMENSION
            )));
        }

        let margin = self.border.checked_add(self.inset).ok_or_else(|| {
            GeneratorError::InvalidConfig(format!(
                "红框与留白溢出：border={} inset={}",
                self.border, self.inset
            ))
        })?;
        let frame = margin.checked_mul(2).ok_or_else(|| {
            GeneratorError::InvalidConfig(format!("红框与留白溢出：{} 像素", margin))
        })?;
        if self.width <= frame || self.height <= frame {
            return Err(GeneratorError::InvalidConfig(format!(
                "红框与留白（{} 像素）占满了 {}x{} 的画布",
                margin, self.width, self.height
            )));
        }

        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(GeneratorError::InvalidConfig(format!(
                "字号必须为正数：{}",
                self.font_size
            )));
        }
        // 字形栅格缓冲按字号分配，字号不超过画布长边
        let max_font_size = self.width.max(self.height) as f32;
        if self.font_size > max_font_size {
            return Err(GeneratorError::InvalidConfig(format!(
                "字号过大：{}（上限：{}）",
                self.font_size, max_font_size
            )));
        }
        if !self.line_gap.is_finite() || self.line_gap < 0.0 {
            return Err(GeneratorError::InvalidConfig(format!(
                "行距不能为负数：{}",
                self.line_gap
            )));
        }

        if self.first_line.trim().is_empty() && self.second_line.trim().is_empty() {
            return Err(GeneratorError::InvalidConfig("两行文字不能同时为空".to_string()));
        }

        Ok(())
    }
}
