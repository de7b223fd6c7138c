//! # 字体模块
//!
//! ## 设计思路
//!
//! 字体在一次运行中只选定一次，之后只读。候选字体文件按优先级依次尝试，
//! 第一个能读取并解析成功的胜出；全部失败时回退到内置位图字体，
//! 因此字体选择永远不会向调用方返回错误。
//!
//! ## 实现思路
//!
//! - 矢量字体使用 `ab_glyph` 解析，`.ttc` 字体集合取第 0 个字面。
//! - 字号按 em 计算：`PxScale = size * height / units_per_em`。
//! - 量字与绘制共用同一套排版逻辑：绘制原点位于行的上升线顶部，
//!   基线在原点下方 `ascent` 处，与常见图像库 `textbbox((0, 0))` 的语义一致。
//! - 内置字体每个可见字符画成一个空心方框，等宽、与字号无关。

use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontVec, Glyph, GlyphId, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};

use super::canvas::blend_pixel;

/// 内置字体的字符步进（像素）。
const BUILTIN_ADVANCE: i32 = 8;
/// 内置字体方框在字符格内的范围：`[left, right) x [top, bottom)`。
const BUILTIN_BOX: (i32, i32, i32, i32) = (1, 2, 7, 12);

/// 文字墨迹包围盒，坐标相对绘制原点，右 / 下边界为开区间。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    fn union(self, other: TextBounds) -> TextBounds {
        TextBounds {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// 已选定的字体。
pub enum StampFont {
    /// 从字体文件加载的矢量字体。
    Outline {
        font: FontVec,
        scale: PxScale,
        source: PathBuf,
    },
    /// 内置最小位图字体。
    Builtin,
}

impl std::fmt::Debug for StampFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Outline { source, scale, .. } => f
                .debug_struct("Outline")
                .field("source", source)
                .field("scale", &(scale.x, scale.y))
                .finish(),
            Self::Builtin => f.write_str("Builtin"),
        }
    }
}

impl StampFont {
    /// 按优先级尝试候选字体，全部失败时回退内置字体。
    pub fn load(candidates: &[PathBuf], size: f32) -> Self {
        for path in candidates {
            if !path.exists() {
                log::debug!("🔤 字体不存在，跳过: {}", path.display());
                continue;
            }

            match Self::load_outline(path, size) {
                Ok(font) => {
                    log::info!("🔤 使用字体: {}（字号 {}）", path.display(), size);
                    return font;
                }
                Err(reason) => {
                    log::warn!("⚠️ 字体加载失败，尝试下一个: {} - {}", path.display(), reason);
                }
            }
        }

        log::warn!("⚠️ 没有可用的字体文件，回退内置位图字体");
        Self::Builtin
    }

    fn load_outline(path: &Path, size: f32) -> Result<Self, String> {
        let bytes = std::fs::read(path).map_err(|e| format!("无法读取字体文件：{}", e))?;
        let font = FontVec::try_from_vec_and_index(bytes, 0)
            .map_err(|e| format!("无法解析字体：{}", e))?;
        let scale = Self::em_scale(&font, size);

        Ok(Self::Outline {
            font,
            scale,
            source: path.to_path_buf(),
        })
    }

    /// 把“每 em 像素数”换算为 `ab_glyph` 的行高缩放。
    fn em_scale(font: &FontVec, size: f32) -> PxScale {
        match font.units_per_em() {
            Some(units_per_em) if units_per_em > 0.0 => {
                PxScale::from(size * font.height_unscaled() / units_per_em)
            }
            _ => PxScale::from(size),
        }
    }

    /// 字体来源描述，用于日志。
    pub fn source_label(&self) -> String {
        match self {
            Self::Outline { source, .. } => source.display().to_string(),
            Self::Builtin => "builtin".to_string(),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin)
    }

    /// 测量以 `(0, 0)` 为原点绘制 `text` 时的墨迹包围盒。
    ///
    /// 没有任何墨迹（空串、全空白）时返回全零包围盒。
    pub fn measure(&self, text: &str) -> TextBounds {
        match self {
            Self::Outline { font, scale, .. } => {
                let mut bounds: Option<TextBounds> = None;
                for glyph in layout_glyphs(font, *scale, text, 0.0, 0.0) {
                    let Some(outlined) = font.outline_glyph(glyph) else {
                        continue;
                    };
                    let rect = outlined.px_bounds();
                    let glyph_bounds = TextBounds {
                        left: rect.min.x.floor() as i32,
                        top: rect.min.y.floor() as i32,
                        right: rect.max.x.ceil() as i32,
                        bottom: rect.max.y.ceil() as i32,
                    };
                    bounds = Some(match bounds {
                        Some(current) => current.union(glyph_bounds),
                        None => glyph_bounds,
                    });
                }
                bounds.unwrap_or_default()
            }
            Self::Builtin => builtin_boxes(text, 0, 0)
                .reduce(TextBounds::union)
                .unwrap_or_default(),
        }
    }

    /// 以 `(x, y)` 为原点把 `text` 画到画布上，按覆盖率抗锯齿混色。
    pub fn draw(&self, canvas: &mut RgbaImage, text: &str, x: f32, y: f32, color: Rgba<u8>) {
        match self {
            Self::Outline { font, scale, .. } => {
                for glyph in layout_glyphs(font, *scale, text, x, y) {
                    let Some(outlined) = font.outline_glyph(glyph) else {
                        continue;
                    };
                    let rect = outlined.px_bounds();
                    let (left, top) = (rect.min.x as i32, rect.min.y as i32);
                    outlined.draw(|gx, gy, coverage| {
                        blend_pixel(canvas, left + gx as i32, top + gy as i32, color, coverage);
                    });
                }
            }
            Self::Builtin => {
                let (ox, oy) = (x.round() as i32, y.round() as i32);
                for cell in builtin_boxes(text, ox, oy) {
                    draw_hollow_box(canvas, cell, color);
                }
            }
        }
    }
}

/// 沿一行排布字形：原点在上升线顶部，按步进与字距推进。
fn layout_glyphs(font: &FontVec, scale: PxScale, text: &str, x: f32, y: f32) -> Vec<Glyph> {
    let scaled = font.as_scaled(scale);
    let baseline = y + scaled.ascent();
    let mut caret = x;
    let mut previous: Option<GlyphId> = None;
    let mut glyphs = Vec::with_capacity(text.len());

    for ch in text.chars().filter(|ch| !ch.is_control()) {
        let id = scaled.glyph_id(ch);
        if let Some(previous) = previous {
            caret += scaled.kern(previous, id);
        }
        glyphs.push(id.with_scale_and_position(scale, point(caret, baseline)));
        caret += scaled.h_advance(id);
        previous = Some(id);
    }

    glyphs
}

/// 内置字体中每个可见字符的方框位置。空白字符只占步进。
fn builtin_boxes(text: &str, x: i32, y: i32) -> impl Iterator<Item = TextBounds> + '_ {
    let (left, top, right, bottom) = BUILTIN_BOX;
    text.chars()
        .filter(|ch| !ch.is_control())
        .enumerate()
        .filter(|(_, ch)| !ch.is_whitespace())
        .map(move |(index, _)| {
            let cell_x = x + index as i32 * BUILTIN_ADVANCE;
            TextBounds {
                left: cell_x + left,
                top: y + top,
                right: cell_x + right,
                bottom: y + bottom,
            }
        })
}

fn draw_hollow_box(canvas: &mut RgbaImage, cell: TextBounds, color: Rgba<u8>) {
    for px in cell.left..cell.right {
        blend_pixel(canvas, px, cell.top, color, 1.0);
        blend_pixel(canvas, px, cell.bottom - 1, color, 1.0);
    }
    for py in cell.top..cell.bottom {
        blend_pixel(canvas, cell.left, py, color, 1.0);
        blend_pixel(canvas, cell.right - 1, py, color, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock error")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("seal-stamp-font-test-{nanos}"));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn missing_and_corrupt_candidates_fall_back_to_builtin() {
        let dir = unique_temp_dir();
        let corrupt = dir.join("broken.ttc");
        std::fs::write(&corrupt, b"definitely not a font").expect("write corrupt font");

        let font = StampFont::load(&[dir.join("missing.ttf"), corrupt], 42.0);
        assert!(font.is_builtin());
        assert_eq!(font.source_label(), "builtin");

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn empty_candidate_list_falls_back_to_builtin() {
        assert!(StampFont::load(&[], 42.0).is_builtin());
    }

    #[test]
    fn builtin_measure_spans_every_visible_cell() {
        let font = StampFont::Builtin;

        let two = font.measure("注塑");
        assert_eq!(two, TextBounds { left: 1, top: 2, right: 15, bottom: 12 });
        assert_eq!((two.width(), two.height()), (14, 10));

        let spaced = font.measure("a b");
        assert_eq!(spaced.right, 2 * BUILTIN_ADVANCE + 7);

        assert!(font.measure("").is_empty());
        assert!(font.measure("   ").is_empty());
    }

    #[test]
    fn builtin_draw_paints_box_outline_only() {
        let font = StampFont::Builtin;
        let red = Rgba([200, 0, 0, 255]);
        let mut canvas = RgbaImage::from_pixel(20, 20, Rgba([0, 0, 0, 255]));

        font.draw(&mut canvas, "印", 2.0, 3.0, red);

        // 方框左上角 (2+1, 3+2)，右下角 (2+6, 3+11)
        assert_eq!(*canvas.get_pixel(3, 5), red);
        assert_eq!(*canvas.get_pixel(8, 14), red);
        assert_eq!(*canvas.get_pixel(5, 9), Rgba([0, 0, 0, 255]));
        assert_eq!(*canvas.get_pixel(2, 3), Rgba([0, 0, 0, 255]));
    }

    fn fixture_font_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSansMono.ttf")
    }

    #[test]
    fn fixture_font_loads_as_outline() {
        let font = StampFont::load(&[PathBuf::from("/nonexistent/font.ttc"), fixture_font_path()], 42.0);
        assert!(!font.is_builtin());
        assert!(font.source_label().ends_with("DejaVuSansMono.ttf"));
    }

    #[test]
    fn outline_scale_follows_em_size() {
        let font = StampFont::load(&[fixture_font_path()], 42.0);

        // DejaVu Sans Mono: 大写字母高 1493 / 2048 em，约 30.6 像素
        let cap = font.measure("H");
        assert!((29..=33).contains(&cap.height()), "cap height {}", cap.height());
        // 上升线顶部到大写字母顶部还有一段留空
        assert!(cap.top > 0);

        // 等宽字体：两个字符的墨迹宽度小于两个步进（0.6 em）
        let pair = font.measure("HH");
        assert!(pair.width() > cap.width());
        assert!(pair.width() < (2.0 * 0.6 * 42.0) as i32 + 2);
    }

    #[test]
    fn outline_draw_lands_inside_measured_bounds() {
        let font = StampFont::load(&[fixture_font_path()], 42.0);
        let bounds = font.measure("QC");
        let mut canvas = RgbaImage::from_pixel(120, 80, Rgba([0, 0, 0, 255]));

        font.draw(&mut canvas, "QC", 10.0, 10.0, Rgba([200, 0, 0, 255]));

        let mut partial = 0;
        for (x, y, pixel) in canvas.enumerate_pixels() {
            if pixel.0[0] == 0 {
                continue;
            }
            let (x, y) = (x as i32 - 10, y as i32 - 10);
            assert!(
                x >= bounds.left && x < bounds.right && y >= bounds.top && y < bounds.bottom,
                "ink at ({x},{y}) outside {bounds:?}"
            );
            if pixel.0[0] < 200 {
                partial += 1;
            }
        }
        // 抗锯齿边缘
        assert!(partial > 0);
    }
}
