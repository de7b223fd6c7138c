//! # 生成编排模块
//!
//! ## 设计思路
//!
//! `StampGenerator` 持有已校验的配置与已选定的字体，只负责流程编排：
//! 1. 黑底画布
//! 2. 红色边框
//! 3. 量字与两行排版
//! 4. 写字
//! 5. 写出 `印章.png`
//!
//! 字体在构造时选定一次；同一个生成器多次 `generate` 的结果逐字节一致。

use std::path::{Path, PathBuf};
use std::time::Instant;

use image::{Rgba, RgbaImage};

use super::canvas::{draw_border, new_canvas};
use super::layout::{layout_two_lines, InnerRegion};
use super::{GeneratorError, StampConfig, StampFont};
use crate::error::AppError;
use crate::storage;

/// 印章生成器。
#[derive(Debug)]
pub struct StampGenerator {
    config: StampConfig,
    font: StampFont,
}

impl StampGenerator {
    /// 校验配置并按候选顺序选定字体。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use seal_stamp::generator::{StampConfig, StampGenerator};
    ///
    /// let generator = StampGenerator::new(StampConfig::default())?;
    /// let image = generator.generate();
    /// assert_eq!(image.dimensions(), (320, 160));
    /// # Ok::<(), seal_stamp::generator::GeneratorError>(())
    /// ```
    pub fn new(config: StampConfig) -> Result<Self, GeneratorError> {
        config.validate()?;
        let font = StampFont::load(&config.font_candidates, config.font_size);
        Ok(Self { config, font })
    }

    /// 使用外部已选定的字体创建生成器。
    pub fn with_font(config: StampConfig, font: StampFont) -> Result<Self, GeneratorError> {
        config.validate()?;
        Ok(Self { config, font })
    }

    pub fn font(&self) -> &StampFont {
        &self.font
    }

    /// 在内存中合成印章。
    pub fn generate(&self) -> RgbaImage {
        let config = &self.config;
        let ink = Rgba(config.ink);

        let mut canvas = new_canvas(config.width, config.height, Rgba(config.background));
        draw_border(&mut canvas, ink, config.border);

        let region = InnerRegion::new(config.width, config.height, config.border, config.inset);
        let first_bounds = self.font.measure(&config.first_line);
        let second_bounds = self.font.measure(&config.second_line);
        let layout = layout_two_lines(region, first_bounds, second_bounds, config.line_gap);

        if !layout.fits {
            log::warn!(
                "⚠️ 文字超出内区 {}x{}：第一行 {}x{}，第二行 {}x{}，行距 {}",
                region.width(),
                region.height(),
                first_bounds.width(),
                first_bounds.height(),
                second_bounds.width(),
                second_bounds.height(),
                config.line_gap
            );
        }

        let (x1, y1) = layout.first;
        let (x2, y2) = layout.second;
        self.font.draw(&mut canvas, &config.first_line, x1, y1, ink);
        self.font.draw(&mut canvas, &config.second_line, x2, y2, ink);

        log::debug!(
            "🖋️ 排版完成 - 字体: {} 第一行原点: ({:.1}, {:.1}) 第二行原点: ({:.1}, {:.1})",
            self.font.source_label(),
            x1,
            y1,
            x2,
            y2
        );

        canvas
    }

    /// 生成印章并写出到 `base` 目录下的 `印章.png`，返回输出路径。
    pub fn run(&self, base: &Path) -> Result<PathBuf, AppError> {
        let total_start = Instant::now();

        let render_start = Instant::now();
        let image = self.generate();
        let render_elapsed = render_start.elapsed();

        let out = storage::output_path(base);
        let save_start = Instant::now();
        storage::save_png(&image, &out)?;
        let save_elapsed = save_start.elapsed();

        log::info!(
            "✅ 印章生成完成 - 字体: {} render={}ms save={}ms total={}ms",
            self.font.source_label(),
            render_elapsed.as_millis(),
            save_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(out)
    }
}
