//! Script parsing — plot scripts to command lists.

pub mod base;
pub mod script;

pub use base::{ParsedLine, Parser, decode_line};
pub use script::ScriptParser;

/// Parse a whole plot script, one [`ParsedLine`] per non-blank line.
pub fn parse(src: &str) -> Vec<ParsedLine> {
    ScriptParser.parse(src)
}
