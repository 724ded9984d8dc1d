//! Line-oriented parser for whole plot scripts.

use tracing::trace;

use super::base::{ParsedLine, Parser, decode_line};

/// Decodes a script one line at a time, skipping blank lines.
pub struct ScriptParser;

impl Parser for ScriptParser {
    fn parse(&self, src: &str) -> Vec<ParsedLine> {
        src.lines()
            .enumerate()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(idx, text)| {
                let result = decode_line(text);
                trace!(line_no = idx + 1, ?result, "decoded line");
                ParsedLine {
                    line_no: idx + 1,
                    result,
                }
            })
            .collect()
    }
}
