use crate::core::MoveOutcome;

/// Everything the console layer needs to draw one frame, beyond the grid
/// and board themselves. Counters live out here, never in the engine.
pub struct GameRenderState {
    pub won: bool,
    pub last_outcome: Option<MoveOutcome>,
    pub move_count: u32,
    pub level_number: usize,
    pub level_count: usize,
}
