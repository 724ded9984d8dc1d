//! Line rasterization onto direction-coded glyphs.
//!
//! Only horizontal, vertical and 45° diagonal segments are representable.
//! Any other slope collapses to a diagonal whose length is the smaller of the
//! two deltas, so a stroke's length is not its Euclidean length.

use std::fmt;

use super::charset::{Glyphs, Orientation};

/// A run of identical glyphs approximating one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub orientation: Orientation,
    pub length: usize,
}

impl Stroke {
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Render the stroke with the given glyph table.
    pub fn glyphs(&self, glyphs: &Glyphs) -> String {
        std::iter::repeat_n(glyphs.stroke(self.orientation), self.length).collect()
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glyphs(&Glyphs::ascii()))
    }
}

/// Rasterize the segment from `(x1, y1)` to `(x2, y2)`.
///
/// Never fails: any integers are accepted, and a degenerate point yields an
/// empty stroke.
pub fn rasterize(x1: i64, y1: i64, x2: i64, y2: i64) -> Stroke {
    let dx = x2 - x1;
    let dy = y2 - y1;

    let (orientation, length) = if dx == 0 {
        (Orientation::Vertical, dy.unsigned_abs())
    } else if dy == 0 {
        (Orientation::Horizontal, dx.unsigned_abs())
    } else {
        let minor = dx.unsigned_abs().min(dy.unsigned_abs());
        // Same-sign deltas rise, mixed signs fall.
        if (dx > 0) == (dy > 0) {
            if dx > 0 {
                (Orientation::UpDiagonal, minor)
            } else {
                (Orientation::DownDiagonal, minor)
            }
        } else if dx > 0 {
            (Orientation::DownDiagonal, minor)
        } else {
            (Orientation::UpDiagonal, minor)
        }
    };

    Stroke {
        orientation,
        length: length as usize,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
