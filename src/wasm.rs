//! WASM bindings for pen-plot.
//!
//! Exposes `render` and `renderWithOptions` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::PlotConfig;
use crate::renderers::charset::CharSet;

/// Run a plot script on an ASCII grid of the given size.
#[wasm_bindgen]
pub fn render(src: &str, width: usize, height: usize) -> Result<String, JsError> {
    crate::render_script(src, width, height).map_err(|e| JsError::new(&e.to_string()))
}

/// Run a plot script with a choice of glyph table.
///
/// - `unicode`: true for Unicode line-drawing glyphs, false for plain ASCII
#[wasm_bindgen(js_name = "renderWithOptions")]
pub fn render_with_options(
    src: &str,
    width: usize,
    height: usize,
    unicode: bool,
) -> Result<String, JsError> {
    let charset = if unicode {
        CharSet::Unicode
    } else {
        CharSet::Ascii
    };
    let config = PlotConfig::new(width, height).with_charset(charset);
    crate::run_script(src, &config)
        .map(|report| report.render())
        .map_err(|e| JsError::new(&e.to_string()))
}
