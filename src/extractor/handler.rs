//! # 提取编排模块
//!
//! ## 设计思路
//!
//! `StampExtractor` 只负责流程编排，处理链路固定为：
//! 1. 定位源图
//! 2. 加载并解码为 RGBA
//! 3. 逐像素提取印章红
//! 4. 写出 `印章.png`
//!
//! 记录 `load/extract/save/total` 阶段耗时，便于诊断大图处理。

use std::path::{Path, PathBuf};
use std::time::Instant;

use image::RgbaImage;

use super::pipeline::{extract_red, load_source};
use super::{ExtractConfig, ExtractError, SourceCandidates};
use crate::error::AppError;
use crate::storage;

/// 印章提取器。
#[derive(Debug, Clone, Default)]
pub struct StampExtractor {
    config: ExtractConfig,
}

impl StampExtractor {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// 从指定文件提取印章，只返回内存中的结果。
    pub fn extract_file(&self, path: &Path) -> Result<RgbaImage, ExtractError> {
        let source = load_source(path, &self.config)?;
        Ok(extract_red(&source, &self.config))
    }

    /// 处理主入口：定位源图、提取并写出到 `base` 目录下的 `印章.png`。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use seal_stamp::extractor::{ExtractConfig, SourceCandidates, StampExtractor};
    ///
    /// let base = std::env::current_dir()?;
    /// let candidates = SourceCandidates::from_environment(&base, Some("scan.png".into()));
    /// let out = StampExtractor::new(ExtractConfig::default()).run(&base, &candidates)?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn run(&self, base: &Path, candidates: &SourceCandidates) -> Result<PathBuf, AppError> {
        let total_start = Instant::now();
        let resolved = candidates.resolve()?;

        let load_start = Instant::now();
        let source = load_source(&resolved.path, &self.config)?;
        let load_elapsed = load_start.elapsed();

        let extract_start = Instant::now();
        let stamp = extract_red(&source, &self.config);
        let extract_elapsed = extract_start.elapsed();

        let kept = stamp.pixels().filter(|p| p.0[3] != 0).count();
        let out = storage::output_path(base);

        let save_start = Instant::now();
        storage::save_png(&stamp, &out)?;
        let save_elapsed = save_start.elapsed();

        log::info!(
            "✅ 印章提取完成 - 红色像素: {}/{} load={}ms extract={}ms save={}ms total={}ms",
            kept,
            stamp.width() as u64 * stamp.height() as u64,
            load_elapsed.as_millis(),
            extract_elapsed.as_millis(),
            save_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(out)
    }
}
