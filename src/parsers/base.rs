//! Parser trait and single-line command decoding.
//!
//! The keyword must be the whole first token and argument counts are exact:
//! `lifted`, `drawing 1 2 3 4` and `lift now` are all rejected, where a plain
//! prefix match would have accepted them.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::DecodeError;
use crate::syntax::types::{Angle, Command, Segment};

// ─── Parser trait ────────────────────────────────────────────────────────────

/// Outcome of decoding one non-blank script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// 1-based line number in the source text.
    pub line_no: usize,
    pub result: Result<Command, DecodeError>,
}

/// Trait for script parsers.
pub trait Parser {
    /// Decode every non-blank line of `src`, in order. Failures are kept
    /// per line so a caller can report them and carry on.
    fn parse(&self, src: &str) -> Vec<ParsedLine>;
}

// ─── Tokens ──────────────────────────────────────────────────────────────────

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("integer pattern is valid"));

/// Whitespace-split arguments following the command keyword.
struct Args<'a> {
    line: &'a str,
    command: &'static str,
    tokens: Vec<&'a str>,
}

impl<'a> Args<'a> {
    fn new(line: &'a str, command: &'static str, rest: std::str::SplitWhitespace<'a>) -> Self {
        Self {
            line,
            command,
            tokens: rest.collect(),
        }
    }

    fn expect(&self, expected: usize) -> Result<(), DecodeError> {
        if self.tokens.len() == expected {
            Ok(())
        } else {
            Err(DecodeError::ArgumentCount {
                line: self.line.to_string(),
                command: self.command,
                expected,
                found: self.tokens.len(),
            })
        }
    }

    fn integer<T: std::str::FromStr>(&self, token: &str) -> Result<T, DecodeError> {
        let invalid = || DecodeError::InvalidInteger {
            line: self.line.to_string(),
            token: token.to_string(),
        };
        if !INTEGER.is_match(token) {
            return Err(invalid());
        }
        // Out-of-range values fail here rather than wrapping.
        token.parse::<T>().map_err(|_| invalid())
    }

    fn none(self) -> Result<(), DecodeError> {
        self.expect(0)
    }

    fn segment(self) -> Result<Segment, DecodeError> {
        self.expect(4)?;
        let mut xs = [0i32; 4];
        for (slot, token) in xs.iter_mut().zip(&self.tokens) {
            *slot = self.integer(token)?;
        }
        let [x1, y1, x2, y2] = xs;
        Ok(Segment::new(x1, y1, x2, y2))
    }

    fn count(self) -> Result<i64, DecodeError> {
        self.expect(1)?;
        self.integer(self.tokens[0])
    }

    fn angle(self) -> Result<Angle, DecodeError> {
        self.expect(1)?;
        let token = self.tokens[0];
        Angle::from_token(token).ok_or_else(|| DecodeError::UnknownAngle {
            line: self.line.to_string(),
            token: token.to_string(),
        })
    }
}

// ─── decode_line ─────────────────────────────────────────────────────────────

/// Decode one script line into a [`Command`].
///
/// Surrounding whitespace is stripped and the first whitespace-separated
/// token selects the command.
pub fn decode_line(line: &str) -> Result<Command, DecodeError> {
    let line = line.trim();
    let mut words = line.split_whitespace();
    let keyword = words.next().unwrap_or_default();

    let command = match keyword {
        "lift" => {
            Args::new(line, "lift", words).none()?;
            Command::Lift
        }
        "down" => {
            Args::new(line, "down", words).none()?;
            Command::Down
        }
        "move" => Command::Move(Args::new(line, "move", words).segment()?),
        "draw" => Command::Draw(Args::new(line, "draw", words).segment()?),
        "turn" => Command::Turn(Args::new(line, "turn", words).angle()?),
        "repetition" => Command::Repetition(Args::new(line, "repetition", words).count()?),
        "end" => {
            Args::new(line, "end", words).none()?;
            Command::End
        }
        _ => {
            return Err(DecodeError::UnknownCommand {
                line: line.to_string(),
            });
        }
    };
    Ok(command)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
