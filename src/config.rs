//! Configuration for a plotting run.

use crate::renderers::charset::{CharSet, Glyphs};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotConfig {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Plain ASCII glyphs (default) or Unicode line-drawing glyphs.
    pub charset: CharSet,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 10,
            charset: CharSet::Ascii,
        }
    }
}

impl PlotConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_charset(mut self, charset: CharSet) -> Self {
        self.charset = charset;
        self
    }

    pub fn glyphs(&self) -> Glyphs {
        Glyphs::for_charset(self.charset)
    }
}
