//! # 排版模块
//!
//! 两行文字作为一个整体在内区里垂直居中，每行各自水平居中。
//! 内区是红框再向内留白后的区域，四边对称，所以它的中心就是画布中心。

use super::TextBounds;

/// 红框与留白以内的文字区域，右 / 下边界为开区间。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InnerRegion {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl InnerRegion {
    pub fn new(width: u32, height: u32, border: u32, inset: u32) -> Self {
        let margin = border + inset;
        Self {
            left: margin.min(width),
            top: margin.min(height),
            right: width.saturating_sub(margin).max(margin.min(width)),
            bottom: height.saturating_sub(margin).max(margin.min(height)),
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    fn center_x(&self) -> f32 {
        (self.left + self.right) as f32 / 2.0
    }
}

/// 两行文字的绘制原点。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoLineLayout {
    pub first: (f32, f32),
    pub second: (f32, f32),
    /// 文字块是否完整落在内区中。
    pub fits: bool,
}

/// 计算两行文字的绘制原点。
///
/// 以内区为参照：
/// `y1 = top + (inner_h - h1 - h2 - gap) / 2 + h1`，`y2 = y1 + gap + h2`，
/// 第 n 行原点为 `(cx - wn / 2, yn - hn)`。
pub fn layout_two_lines(
    region: InnerRegion,
    first: TextBounds,
    second: TextBounds,
    gap: f32,
) -> TwoLineLayout {
    let (w1, h1) = (first.width().max(0) as f32, first.height().max(0) as f32);
    let (w2, h2) = (second.width().max(0) as f32, second.height().max(0) as f32);
    let cx = region.center_x();

    let y1 = region.top as f32 + (region.height() as f32 - h1 - h2 - gap) / 2.0 + h1;
    let y2 = y1 + gap + h2;

    let block_height = h1 + h2 + gap;
    let fits = w1.max(w2) <= region.width() as f32 && block_height <= region.height() as f32;

    TwoLineLayout {
        first: (cx - w1 / 2.0, y1 - h1),
        second: (cx - w2 / 2.0, y2 - h2),
        fits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(width: i32, height: i32) -> TextBounds {
        TextBounds {
            left: 0,
            top: 0,
            right: width,
            bottom: height,
        }
    }

    #[test]
    fn inner_region_is_symmetric_inside_border_and_inset() {
        let region = InnerRegion::new(320, 160, 12, 8);
        assert_eq!(region, InnerRegion { left: 20, top: 20, right: 300, bottom: 140 });
        assert_eq!((region.width(), region.height()), (280, 120));
    }

    #[test]
    fn layout_matches_canvas_centered_formula() {
        let (w, h, gap) = (320.0_f32, 160.0_f32, 16.0_f32);
        let (b1, b2) = (bounds(80, 40), bounds(84, 38));
        let layout = layout_two_lines(InnerRegion::new(320, 160, 12, 8), b1, b2, gap);

        let y1 = (h - 40.0 - 38.0 - gap) / 2.0 + 40.0;
        let y2 = y1 + gap + 38.0;
        assert_eq!(layout.first, (w / 2.0 - 40.0, y1 - 40.0));
        assert_eq!(layout.second, (w / 2.0 - 42.0, y2 - 38.0));
        assert!(layout.fits);
    }

    #[test]
    fn block_is_vertically_centered() {
        let layout = layout_two_lines(InnerRegion::new(320, 160, 12, 8), bounds(60, 30), bounds(60, 30), 16.0);

        let top_gap = layout.first.1;
        let bottom_gap = 160.0 - (layout.second.1 + 30.0);
        assert_eq!(top_gap, bottom_gap);
        assert_eq!(layout.second.1 - (layout.first.1 + 30.0), 16.0);
    }

    #[test]
    fn oversized_block_is_reported() {
        let layout = layout_two_lines(InnerRegion::new(320, 160, 12, 8), bounds(300, 60), bounds(40, 60), 16.0);
        assert!(!layout.fits);
    }
}
