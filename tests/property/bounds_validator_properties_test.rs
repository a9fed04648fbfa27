//! Property-based tests for display bounds validation.

use proptest::prelude::*;
use winstate::services::bounds_validator::ensure_in_bounds;
use winstate::types::geometry::Rect;
use winstate::types::window::WindowConfig;

fn arb_display() -> impl Strategy<Value = Rect> {
    (-4000i32..4000, -4000i32..4000, 640i32..5120, 480i32..2880)
        .prop_map(|(x, y, width, height)| Rect::new(x, y, width, height))
}

proptest! {
    #[test]
    fn prop_anchor_on_display_is_kept(
        display in arb_display(),
        fx in 0.0f64..=1.0,
        fy in 0.0f64..=1.0,
        width in proptest::option::of(100i32..3000),
    ) {
        let x = display.x + (f64::from(display.width) * fx).floor() as i32;
        let y = display.y + (f64::from(display.height) * fy).floor() as i32;
        let mut config = WindowConfig { x: Some(x), y: Some(y), width, ..WindowConfig::default() };

        prop_assert!(!ensure_in_bounds(&mut config, &[display], &display));
        prop_assert_eq!((config.x, config.y), (Some(x), Some(y)));
        prop_assert_eq!(config.width, width);
    }

    #[test]
    fn prop_fallback_is_deterministic_and_size_preserving(
        primary in arb_display(),
        width in 100i32..3000,
        height in 100i32..3000,
    ) {
        // Far beyond any generated display.
        let mut config = WindowConfig {
            x: Some(100_000),
            y: Some(100_000),
            width: Some(width),
            height: Some(height),
            ..WindowConfig::default()
        };
        prop_assert!(ensure_in_bounds(&mut config, &[primary], &primary));
        prop_assert_eq!(config.x, Some((primary.width - width).div_euclid(2)));
        prop_assert_eq!(config.y, Some((primary.height - height).div_euclid(2)));
        prop_assert_eq!((config.width, config.height), (Some(width), Some(height)));
    }
}
