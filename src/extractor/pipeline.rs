//! # 加载与提取流水线模块
//!
//! ## 设计思路
//!
//! 将“文件 → 字节 → 图像 → RGBA → 提取结果”的过程集中管理，
//! 并在完整解码之前先做体积与像素上限检查，尽快失败。
//!
//! ## 实现思路
//!
//! 1. 存在性 + metadata 体积限制
//! 2. 读取字节，猜测格式并读取 header 尺寸
//! 3. 按像素上限快速拒绝
//! 4. 完整解码并统一转换为 RGBA8
//! 5. 单遍逐像素提取，输出与输入同尺寸

use std::io::Cursor;
use std::path::Path;

use image::{ImageBuffer, ImageReader, RgbaImage};

use super::classify::extract_pixel;
use super::{ExtractConfig, ExtractError};

/// 从本地路径加载源图并转换为 RGBA8。
pub fn load_source(path: &Path, config: &ExtractConfig) -> Result<RgbaImage, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::SourceNotFound(path.to_path_buf()));
    }

    let metadata = std::fs::metadata(path)
        .map_err(|e| ExtractError::FileSystem(format!("无法读取文件信息：{}", e)))?;
    if metadata.len() > config.max_file_size {
        return Err(ExtractError::ResourceLimit(format!(
            "文件过大：{:.2} MB（限制：{:.2} MB）",
            metadata.len() as f64 / 1024.0 / 1024.0,
            config.max_file_size as f64 / 1024.0 / 1024.0
        )));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| ExtractError::FileSystem(format!("无法读取图片文件：{}", e)))?;
    decode_rgba(&bytes, config)
}

/// 把内存中的图片字节解码为 RGBA8。
pub fn decode_rgba(bytes: &[u8], config: &ExtractConfig) -> Result<RgbaImage, ExtractError> {
    let (header_width, header_height) = inspect_dimensions(bytes)?;
    validate_pixel_limits(config, header_width, header_height)?;

    let decoded = image::load_from_memory(bytes)
        .map_err(|e| ExtractError::Decode(format!("图片解码失败：{}", e)))?;
    let rgba = decoded.to_rgba8();

    log::info!(
        "✅ 图片解码成功 - 尺寸: {}x{} 原始色彩: {:?}",
        rgba.width(),
        rgba.height(),
        decoded.color()
    );
    Ok(rgba)
}

/// 逐像素提取印章红，输出与输入同尺寸的透明背景图。
pub fn extract_red(source: &RgbaImage, config: &ExtractConfig) -> RgbaImage {
    let (width, height) = source.dimensions();
    ImageBuffer::from_fn(width, height, |x, y| extract_pixel(*source.get_pixel(x, y), config))
}

/// 仅通过图片头信息读取宽高。
fn inspect_dimensions(bytes: &[u8]) -> Result<(u32, u32), ExtractError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ExtractError::InvalidFormat(format!("无法识别图片格式：{}", e)))?;

    if reader.format().is_none() {
        return Err(ExtractError::InvalidFormat("不支持的图片格式".to_string()));
    }

    reader
        .into_dimensions()
        .map_err(|e| ExtractError::InvalidFormat(format!("无法读取图片尺寸：{}", e)))
}

fn validate_pixel_limits(config: &ExtractConfig, width: u32, height: u32) -> Result<(), ExtractError> {
    let pixels = (width as u64)
        .checked_mul(height as u64)
        .ok_or_else(|| ExtractError::ResourceLimit("图片像素数溢出".to_string()))?;

    if pixels > config.max_decoded_pixels {
        return Err(ExtractError::ResourceLimit(format!(
            "图片像素过大：{} 像素（限制：{} 像素）",
            pixels, config.max_decoded_pixels
        )));
    }

    Ok(())
}
