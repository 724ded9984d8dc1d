//! pen-plot — pen-plotting command scripts rendered onto an ASCII grid.
//!
//! Public API: `render_script()` for the common case, `Interpreter` for
//! access to pen state and per-line diagnostics.

pub mod config;
pub mod error;
pub mod interpreter;
pub mod parsers;
pub mod renderers;
pub mod syntax;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::PlotConfig;
pub use error::{DecodeError, PlotError};
pub use interpreter::{Diagnostic, Interpreter, PenState, RunReport, run_script};

/// Run a plot script on a `width` × `height` ASCII grid and render it.
///
/// Undecodable lines are skipped; use [`run_script`] to see them.
pub fn render_script(src: &str, width: usize, height: usize) -> Result<String, PlotError> {
    let report = run_script(src, &PlotConfig::new(width, height))?;
    Ok(report.render())
}
