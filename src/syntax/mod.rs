//! Command AST for plot scripts.

pub mod types;

pub use types::{Angle, Command, Segment};
