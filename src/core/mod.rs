mod board;
mod errors;
mod grid;
mod level;
mod model_helpers;
mod models;
mod update;

pub use board::BoardState;
pub use errors::LevelError;
pub use grid::Grid;
pub use level::parse_level;
pub use models::{CellKind, Coord, Direction, MoveOutcome};
pub use update::attempt_move;
