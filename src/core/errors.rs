use std::fmt;

use crate::core::Coord;

/// Failures surfaced by level loading and grid lookups. `MalformedLevel`
/// is fatal to the load attempt; `OutOfBounds` outside the loader means a
/// caller broke an invariant.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LevelError {
    MalformedLevel(String),
    OutOfBounds(Coord),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::MalformedLevel(reason) => {
                write!(f, "malformed level: {}", reason)
            }
            LevelError::OutOfBounds(coord) => {
                write!(f, "coordinate ({}, {}) is outside the grid", coord.x, coord.y)
            }
        }
    }
}

impl std::error::Error for LevelError {}
