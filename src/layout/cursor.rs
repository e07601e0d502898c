use serde::{Deserialize, Serialize};

/// Next free drawing position, in points from the top-left page corner.
///
/// The caller owns the cursor and lends it mutably to each layout call.
/// Renderers advance it in place, so siblings drawn in a loop see the
/// updated position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cursor {
    /// Horizontal position
    pub x: f32,
    /// Vertical position, growing downward
    pub y: f32,
}

impl Cursor {
    /// Create a cursor at `(x, y)`.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Copy of this cursor moved by `(dx, dy)`.
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}
