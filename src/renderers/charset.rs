//! Glyph tables for the plotting grid.
//!
//! A grid cell only ever holds one of five glyphs: the background or one of
//! the four stroke orientations.

// ─── CharSet ─────────────────────────────────────────────────────────────────

/// Which glyph table to draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    #[default]
    Ascii,
    Unicode,
}

// ─── Orientation ─────────────────────────────────────────────────────────────

/// Stroke direction encoded by a single glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// `/` — rising to the right.
    UpDiagonal,
    /// `\` — falling to the right.
    DownDiagonal,
    Vertical,
    Horizontal,
}

// ─── Glyphs ──────────────────────────────────────────────────────────────────

/// The five glyphs a grid cell can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub up_diagonal: char,
    pub down_diagonal: char,
    pub vertical: char,
    pub horizontal: char,
    pub background: char,
}

impl Glyphs {
    pub fn ascii() -> Self {
        Self {
            up_diagonal: '/',
            down_diagonal: '\\',
            vertical: '|',
            horizontal: '-',
            background: '.',
        }
    }

    pub fn unicode() -> Self {
        Self {
            up_diagonal: '╱',
            down_diagonal: '╲',
            vertical: '│',
            horizontal: '─',
            background: '·',
        }
    }

    pub fn for_charset(cs: CharSet) -> Self {
        match cs {
            CharSet::Ascii => Self::ascii(),
            CharSet::Unicode => Self::unicode(),
        }
    }

    /// The glyph drawn for a stroke of the given orientation.
    pub fn stroke(&self, orientation: Orientation) -> char {
        match orientation {
            Orientation::UpDiagonal => self.up_diagonal,
            Orientation::DownDiagonal => self.down_diagonal,
            Orientation::Vertical => self.vertical,
            Orientation::Horizontal => self.horizontal,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::ascii()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
