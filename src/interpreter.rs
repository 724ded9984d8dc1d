//! Command interpreter — drives pen state over a script and draws onto a grid.

use tracing::{debug, info};

use crate::config::PlotConfig;
use crate::error::{DecodeError, PlotError};
use crate::parsers::{ParsedLine, parse};
use crate::renderers::canvas::{Cell, Grid};
use crate::renderers::charset::Orientation;
use crate::renderers::raster::rasterize;
use crate::syntax::types::{Command, Segment};

// ─── PenState ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PenState {
    pub down: bool,
    pub position: (i32, i32),
}

// ─── Diagnostic ──────────────────────────────────────────────────────────────

/// A script line that was skipped because it failed to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line_no: usize,
    pub error: DecodeError,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error decoding line: {} - {}", self.error.line(), self.error)
    }
}

// ─── RunReport ───────────────────────────────────────────────────────────────

/// Final state of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub grid: Grid,
    pub pen: PenState,
    /// Decode failures, in script order.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of commands executed, inert ones included.
    pub executed: usize,
}

impl RunReport {
    pub fn render(&self) -> String {
        self.grid.render_to_string()
    }
}

// ─── Interpreter ─────────────────────────────────────────────────────────────

pub struct Interpreter {
    grid: Grid,
    pen: PenState,
    diagnostics: Vec<Diagnostic>,
    executed: usize,
}

impl Interpreter {
    pub fn new(config: &PlotConfig) -> Self {
        Self {
            grid: Grid::new(config.width, config.height, config.glyphs()),
            pen: PenState::default(),
            diagnostics: Vec::new(),
            executed: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pen(&self) -> &PenState {
        &self.pen
    }

    /// Run every line of `src` and hand back the final grid.
    ///
    /// Lines that fail to decode are recorded and skipped. A draw that
    /// leaves the grid aborts the run.
    pub fn run(self, src: &str) -> Result<RunReport, PlotError> {
        self.run_with(src, |_| {})
    }

    /// Like [`Interpreter::run`], calling `on_diagnostic` for each
    /// undecodable line as soon as it is reached, so lines seen before a
    /// fatal error are still reported.
    pub fn run_with<F>(mut self, src: &str, mut on_diagnostic: F) -> Result<RunReport, PlotError>
    where
        F: FnMut(&Diagnostic),
    {
        for line in parse(src) {
            self.process_line(line, &mut on_diagnostic)?;
        }

        info!(
            executed = self.executed,
            skipped = self.diagnostics.len(),
            "plot finished"
        );

        Ok(RunReport {
            grid: self.grid,
            pen: self.pen,
            diagnostics: self.diagnostics,
            executed: self.executed,
        })
    }

    fn process_line<F>(&mut self, line: ParsedLine, on_diagnostic: &mut F) -> Result<(), PlotError>
    where
        F: FnMut(&Diagnostic),
    {
        match line.result {
            Ok(cmd) => self.execute(&cmd, line.line_no),
            Err(error) => {
                debug!(line_no = line.line_no, %error, "skipping undecodable line");
                let diagnostic = Diagnostic {
                    line_no: line.line_no,
                    error,
                };
                on_diagnostic(&diagnostic);
                self.diagnostics.push(diagnostic);
                Ok(())
            }
        }
    }

    /// Apply one command to the pen and grid.
    pub fn execute(&mut self, cmd: &Command, line_no: usize) -> Result<(), PlotError> {
        debug!(line_no, command = %cmd, inert = cmd.is_inert(), "execute");
        self.executed += 1;

        match cmd {
            Command::Lift => self.pen.down = false,
            Command::Down => self.pen.down = true,
            Command::Move(seg) => self.pen.position = seg.end(),
            Command::Draw(seg) => {
                if self.pen.down {
                    self.draw(seg, line_no)?;
                }
                self.pen.position = seg.end();
            }
            Command::Turn(_) | Command::Repetition(_) | Command::End => {}
        }
        Ok(())
    }

    fn draw(&mut self, seg: &Segment, line_no: usize) -> Result<(), PlotError> {
        let (x1, y1) = seg.start();
        let (x1, y1) = (i64::from(x1), i64::from(y1));
        let stroke = rasterize(x1, y1, i64::from(seg.x2), i64::from(seg.y2));
        let ch = self.grid.glyphs.stroke(stroke.orientation);

        // Diagonals always step down-right from the start cell, whichever
        // way the segment actually runs.
        let (dc, dr) = match stroke.orientation {
            Orientation::Vertical => (0, 1),
            Orientation::Horizontal => (1, 0),
            Orientation::UpDiagonal | Orientation::DownDiagonal => (1, 1),
        };
        let cell_at = |i: i64| Cell::new(x1 + dc * i, y1 + dr * i);
        let length = stroke.length as i64;

        // A stroke is written only if every one of its cells is in range.
        if let Some(i) = self.first_outside(x1, y1, dc, dr, length) {
            let bad = cell_at(i);
            return Err(PlotError::OutOfBounds {
                line_no,
                col: bad.col,
                row: bad.row,
                width: self.grid.width,
                height: self.grid.height,
            });
        }
        for i in 0..length {
            self.grid.put(cell_at(i), ch);
        }
        Ok(())
    }

    /// Index of the first step of a stroke that falls off the grid.
    ///
    /// Steps only ever grow the column and row, so this is found without
    /// walking the stroke.
    fn first_outside(&self, col: i64, row: i64, dc: i64, dr: i64, length: i64) -> Option<i64> {
        if length == 0 {
            return None;
        }
        if self.grid.index(Cell::new(col, row)).is_none() {
            return Some(0);
        }
        let width = self.grid.width as i64;
        let height = self.grid.height as i64;
        let mut first = length;
        if dc > 0 {
            first = first.min(width - col);
        }
        if dr > 0 {
            first = first.min(height - row);
        }
        (first < length).then_some(first)
    }
}

/// Run `src` on a fresh grid described by `config`.
pub fn run_script(src: &str, config: &PlotConfig) -> Result<RunReport, PlotError> {
    Interpreter::new(config).run(src)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
