use serde::{Deserialize, Serialize};

/// Axis-aligned box in CSS pixel coordinates, as reported by a DOM
/// bounding-rect query. `x`/`y` locate the top-left corner relative to the
/// viewport origin; negative values mean the box starts above or left of
/// the visible region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Whether the box lies fully inside the viewport: all four edges within
    /// bounds. Partial overlap does not count, and a box larger than the
    /// viewport on either axis can never satisfy this.
    pub fn within(&self, viewport: &Viewport) -> bool {
        self.top() >= 0.0
            && self.left() >= 0.0
            && self.bottom() <= viewport.height
            && self.right() <= viewport.width
    }
}

/// Visible region of the page, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
