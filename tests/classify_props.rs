// Property tests for the red classification rule
use image::{Rgba, RgbaImage};
use proptest::prelude::*;
use seal_stamp::extractor::classify::{extract_pixel, is_red, TRANSPARENT};
use seal_stamp::extractor::pipeline::extract_red;
use seal_stamp::extractor::ExtractConfig;

fn reference_is_red(r: u8, g: u8, b: u8, a: u8) -> bool {
    let (r, g, b) = (r as i32, g as i32, b as i32);
    a >= 30 && r >= 60 && r > g && r > b && (r - g) + (r - b) >= 40
}

proptest! {
    #[test]
    fn matches_reference_rule(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), a in any::<u8>()) {
        let config = ExtractConfig::default();
        prop_assert_eq!(is_red(Rgba([r, g, b, a]), &config), reference_is_red(r, g, b, a));
    }

    #[test]
    fn output_is_either_transparent_or_boosted(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), a in any::<u8>()) {
        let config = ExtractConfig::default();
        let out = extract_pixel(Rgba([r, g, b, a]), &config);

        if reference_is_red(r, g, b, a) {
            prop_assert_eq!(out, Rgba([r.saturating_add(20), g, b, 220]));
        } else {
            prop_assert_eq!(out, TRANSPARENT);
        }
    }

    #[test]
    fn low_alpha_is_never_red(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), a in 0u8..30) {
        prop_assert_eq!(extract_pixel(Rgba([r, g, b, a]), &ExtractConfig::default()), TRANSPARENT);
    }

    #[test]
    fn extraction_is_deterministic_and_keeps_dimensions(
        width in 1u32..24,
        height in 1u32..24,
        seed in any::<u32>(),
    ) {
        let config = ExtractConfig::default();
        let source = RgbaImage::from_fn(width, height, |x, y| {
            let v = seed.wrapping_mul(2654435761).wrapping_add(x * 31 + y * 17);
            Rgba([(v >> 24) as u8, (v >> 16) as u8, (v >> 8) as u8, v as u8])
        });

        let first = extract_red(&source, &config);
        let second = extract_red(&source, &config);

        prop_assert_eq!(first.dimensions(), (width, height));
        prop_assert_eq!(first, second);
    }
}
