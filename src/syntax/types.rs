//! Command data structures for plot scripts.
//!
//! One `Command` is decoded per non-blank script line.

use std::fmt;

// ─── Segment ─────────────────────────────────────────────────────────────────

/// The four coordinates carried by `move` and `draw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Segment {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn start(&self) -> (i32, i32) {
        (self.x1, self.y1)
    }

    pub fn end(&self) -> (i32, i32) {
        (self.x2, self.y2)
    }
}

// ─── Angle ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Angle {
    Left90,
    Right90,
    FrontLeft45,
    FrontRight45,
    BackLeft45,
    BackRight45,
    Half, // 180
}

impl Angle {
    /// Keyword tokens accepted by `turn`.
    pub const TOKENS: &'static [(&'static str, Angle)] = &[
        ("left90", Angle::Left90),
        ("right90", Angle::Right90),
        ("frontleft45", Angle::FrontLeft45),
        ("frontright45", Angle::FrontRight45),
        ("backleft45", Angle::BackLeft45),
        ("backright45", Angle::BackRight45),
        ("180", Angle::Half),
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        Self::TOKENS
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, a)| *a)
    }

    pub fn token(self) -> &'static str {
        Self::TOKENS
            .iter()
            .find(|(_, a)| *a == self)
            .map(|(t, _)| *t)
            .unwrap_or_default()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// ─── Command ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Lift,
    Down,
    /// Only the destination (`x2`, `y2`) affects pen state.
    Move(Segment),
    Draw(Segment),
    // Turn, Repetition and End are recognized but inert.
    Turn(Angle),
    Repetition(i64),
    End,
}

impl Command {
    /// The script keyword that introduces this command.
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Lift => "lift",
            Command::Down => "down",
            Command::Move(_) => "move",
            Command::Draw(_) => "draw",
            Command::Turn(_) => "turn",
            Command::Repetition(_) => "repetition",
            Command::End => "end",
        }
    }

    /// True for commands that parse but have no effect on a run.
    pub fn is_inert(&self) -> bool {
        matches!(
            self,
            Command::Turn(_) | Command::Repetition(_) | Command::End
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Lift | Command::Down | Command::End => f.write_str(self.keyword()),
            Command::Move(s) | Command::Draw(s) => {
                write!(f, "{} {} {} {} {}", self.keyword(), s.x1, s.y1, s.x2, s.y2)
            }
            Command::Turn(a) => write!(f, "turn {a}"),
            Command::Repetition(n) => write!(f, "repetition {n}"),
        }
    }
}
