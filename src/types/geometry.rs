use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in global desktop coordinates (device pixels).
///
/// Used both for window bounds and for display areas reported by the host.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Point containment with both edges closed: a point exactly on the right
    /// or bottom edge counts as inside.
    pub fn contains_point_inclusive(&self, px: i32, py: i32) -> bool {
        let right = i64::from(self.x) + i64::from(self.width);
        let bottom = i64::from(self.y) + i64::from(self.height);
        px >= self.x && i64::from(px) <= right && py >= self.y && i64::from(py) <= bottom
    }
}
