//! 输出存储模块
//!
//! # 设计思路
//!
//! 两个工具约定把结果写到同一个文件名 `印章.png`，位置是“基准目录”。
//! 基准目录默认为当前工作目录，可通过环境变量 `SEAL_STAMP_BASE_DIR` 指定。
//!
//! # 实现思路
//!
//! - 基准目录解析失败时返回 `AppError::Storage`，不使用 `expect()`。
//! - 写入前自动 `create_dir_all` 父目录，避免上层判断。
//! - PNG 编码委托 `image` crate，固定 `ImageFormat::Png` 以保留 alpha 通道。

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::error::AppError;

/// 输出文件名（两个工具共用）。
pub const OUTPUT_FILE_NAME: &str = "印章.png";

/// 指定基准目录的环境变量。
pub const BASE_DIR_ENV: &str = "SEAL_STAMP_BASE_DIR";

/// 获取基准目录
///
/// # 返回
/// - `Ok(PathBuf)`：环境变量指定的目录，或当前工作目录
/// - `Err(AppError::Storage)`：当前工作目录不可读
pub fn base_dir() -> Result<PathBuf, AppError> {
    if let Some(dir) = std::env::var_os(BASE_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    std::env::current_dir()
        .map_err(|e| AppError::Storage(format!("获取当前工作目录失败: {}", e)))
}

/// 基准目录下的输出文件路径。
pub fn output_path(base: &Path) -> PathBuf {
    base.join(OUTPUT_FILE_NAME)
}

/// 以 PNG 格式写出 RGBA 图像，父目录不存在时自动创建。
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Storage(format!("创建输出目录 '{}' 失败: {}", parent.display(), e))
            })?;
        }
    }

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| AppError::Encode(format!("{}: {}", path.display(), e)))?;

    log::info!(
        "💾 已写出 PNG - 路径: {} 尺寸: {}x{}",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(())
}
