//! # 画布模块
//!
//! 底色填充、边框绘制与按覆盖率混色。所有坐标越界的写入都会被静默丢弃。

use image::{Rgba, RgbaImage};

/// 以不透明底色填充新画布。
pub fn new_canvas(width: u32, height: u32, background: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, background)
}

/// 沿画布边缘绘制线宽为 `stroke` 的矩形边框。
///
/// 等价于对 `[0, 0, W-1, H-1]` 画描边矩形：最外圈 `stroke` 像素全部着色。
pub fn draw_border(canvas: &mut RgbaImage, color: Rgba<u8>, stroke: u32) {
    let (width, height) = canvas.dimensions();
    if stroke == 0 {
        return;
    }

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let on_ring = x < stroke
            || y < stroke
            || x >= width.saturating_sub(stroke)
            || y >= height.saturating_sub(stroke);
        if on_ring {
            *pixel = color;
        }
    }
}

/// 按覆盖率把 `color` 叠加到 `(x, y)` 处。
///
/// 四个通道统一线性插值：`out = bg + (fg - bg) * coverage`。
pub fn blend_pixel(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= canvas.width() || y >= canvas.height() {
        return;
    }

    let coverage = coverage.clamp(0.0, 1.0);
    if coverage <= 0.0 {
        return;
    }

    let pixel = canvas.get_pixel_mut(x, y);
    for channel in 0..4 {
        let bg = pixel.0[channel] as f32;
        let fg = color.0[channel] as f32;
        pixel.0[channel] = (bg + (fg - bg) * coverage).round().clamp(0.0, 255.0) as u8;
    }
}
