//! # 红色判定模块
//!
//! 纯函数，输出只取决于像素四个通道与配置。差值一律按有符号整数计算。

use image::Rgba;

use super::ExtractConfig;

/// 完全透明的黑色，非红色像素的输出。
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// 判断像素是否属于印章红（含淡红、半透明红）。
pub fn is_red(pixel: Rgba<u8>, config: &ExtractConfig) -> bool {
    let [r, g, b, a] = pixel.0;
    if a < config.min_alpha {
        return false;
    }
    if r < config.min_red {
        return false;
    }

    let (r, g, b) = (r as i32, g as i32, b as i32);
    r > g && r > b && (r - g) + (r - b) >= config.min_dominance
}

/// 换算输出像素：红色保留并略微加深、固定 alpha，其余全透明。
pub fn extract_pixel(pixel: Rgba<u8>, config: &ExtractConfig) -> Rgba<u8> {
    if !is_red(pixel, config) {
        return TRANSPARENT;
    }

    let [r, g, b, _] = pixel.0;
    Rgba([r.saturating_add(config.red_boost), g, b, config.output_alpha])
}
