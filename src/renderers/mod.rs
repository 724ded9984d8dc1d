//! Grid, glyph tables and line rasterization.

pub mod canvas;
pub mod charset;
pub mod raster;

pub use canvas::{Cell, Grid};
pub use charset::{CharSet, Glyphs, Orientation};
pub use raster::{Stroke, rasterize};
