//! Display bounds validation for window placement.
//!
//! A position is viewable when its anchor point (the top-left corner) lies on
//! some display, far edges included. Only the anchor is tested: a window whose
//! anchor is on-screen but whose body hangs off the edge is accepted.
//! Anything else is centred on the primary display.

use crate::types::geometry::Rect;
use crate::types::window::WindowConfig;

/// Returns the display containing `(x, y)`, if any.
pub fn display_containing(displays: &[Rect], x: i32, y: i32) -> Option<&Rect> {
    displays
        .iter()
        .find(|display| display.contains_point_inclusive(x, y))
}

/// Top-left position that centres a `width` x `height` window on `primary`.
///
/// Uses the display's size only, not its origin.
pub fn centered_position(primary: &Rect, width: i32, height: i32) -> (i32, i32) {
    let x = (i64::from(primary.width) - i64::from(width)).div_euclid(2);
    let y = (i64::from(primary.height) - i64::from(height)).div_euclid(2);
    (clamp_i32(x), clamp_i32(y))
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Keeps `config`'s position if its anchor is on a display, otherwise centres
/// it on `primary`. Size is never changed.
///
/// Returns `true` when the position was replaced.
pub fn ensure_in_bounds(config: &mut WindowConfig, displays: &[Rect], primary: &Rect) -> bool {
    if let (Some(x), Some(y)) = (config.x, config.y) {
        if display_containing(displays, x, y).is_some() {
            return false;
        }
    }

    let (x, y) = centered_position(primary, config.effective_width(), config.effective_height());
    config.x = Some(x);
    config.y = Some(y);
    true
}
