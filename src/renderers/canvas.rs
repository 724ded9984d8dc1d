//! Grid — fixed-size 2D character buffer the pen draws onto.

use std::fmt;

use super::charset::Glyphs;

// ─── Cell ────────────────────────────────────────────────────────────────────

/// A signed cell coordinate, as computed from script arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub col: i64,
    pub row: i64,
}

impl Cell {
    pub fn new(col: i64, row: i64) -> Self {
        Self { col, row }
    }
}

// ─── Grid ────────────────────────────────────────────────────────────────────

/// A `width` × `height` grid of glyphs, every row exactly `width` long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub glyphs: Glyphs,
    cells: Vec<Vec<char>>,
}

impl Grid {
    /// A grid with every cell set to the background glyph.
    ///
    /// A zero width or height yields an empty grid.
    pub fn new(width: usize, height: usize, glyphs: Glyphs) -> Self {
        Self {
            width,
            height,
            glyphs,
            cells: vec![vec![glyphs.background; width]; height],
        }
    }

    /// Map a signed cell to `(col, row)` indices, or `None` when it falls
    /// outside the grid.
    pub fn index(&self, cell: Cell) -> Option<(usize, usize)> {
        let col = usize::try_from(cell.col).ok()?;
        let row = usize::try_from(cell.row).ok()?;
        (col < self.width && row < self.height).then_some((col, row))
    }

    /// Write `ch` at `cell`. Returns `false` and leaves the grid untouched
    /// when the cell is out of range.
    pub fn put(&mut self, cell: Cell, ch: char) -> bool {
        match self.index(cell) {
            Some((col, row)) => {
                self.cells[row][col] = ch;
                true
            }
            None => false,
        }
    }

    /// Reset every cell to the background glyph.
    pub fn clear(&mut self) -> &mut Self {
        let bg = self.glyphs.background;
        for row in &mut self.cells {
            row.fill(bg);
        }
        self
    }

    pub fn is_blank(&self) -> bool {
        let bg = self.glyphs.background;
        self.cells.iter().flatten().all(|&c| c == bg)
    }

    /// Rows top to bottom, cells concatenated left to right.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.iter().map(|row| row.iter().collect())
    }

    /// Render the grid to text, one newline-terminated line per row.
    pub fn render_to_string(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.rows() {
            out.push_str(&row);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_to_string())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
