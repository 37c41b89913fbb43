// File: crates/scatter-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and hit-testing.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF32 {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF32 {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Whether `(px, py)` falls inside the circle at `(cx, cy)` with radius `r`.
/// NaN geometry never matches.
#[inline]
pub fn in_circle(px: f64, py: f64, cx: f64, cy: f64, r: f64) -> bool {
    let dx = px - cx;
    let dy = py - cy;
    dx * dx + dy * dy <= r * r
}
