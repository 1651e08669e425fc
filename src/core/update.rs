use crate::core::{BoardState, CellKind, Direction, Grid, MoveOutcome};

/// Attempts one player step in `direction`, pushing at most one crate.
///
/// The board is mutated only when the move is legal; a `Blocked` return
/// guarantees nothing changed. A push is accepted or rejected whole: the
/// crate advances and the player steps into its old cell, or neither moves.
pub fn attempt_move(grid: &Grid, board: &mut BoardState, direction: Direction) -> MoveOutcome {
    let target = board.player_position().translated(direction);
    let Ok(target_kind) = grid.kind_at(target) else {
        return MoveOutcome::Blocked;
    };
    if target_kind == CellKind::Wall {
        return MoveOutcome::Blocked;
    }

    if board.is_crate_at(target) {
        let beyond = target.translated(direction);
        let Ok(beyond_kind) = grid.kind_at(beyond) else {
            return MoveOutcome::Blocked;
        };
        // One crate per push: a second crate behind the first blocks it.
        if beyond_kind == CellKind::Wall || board.is_crate_at(beyond) {
            return MoveOutcome::Blocked;
        }

        board.move_crate(target, beyond);
        board.move_player_to(target);
        return MoveOutcome::PlayerMovedAndCratePushed;
    }

    // Floor and target cells are equally walkable.
    board.move_player_to(target);
    MoveOutcome::PlayerMoved
}
