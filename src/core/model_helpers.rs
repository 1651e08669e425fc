use crate::core::{BoardState, CellKind, Grid};

impl BoardState {
    /// True iff every crate stands on a target cell. A level with no crates
    /// is never won; that guards against malformed maps.
    pub fn is_won(&self, grid: &Grid) -> bool {
        if self.crate_count() == 0 {
            return false;
        }
        self.crate_positions().all(|coord| {
            let kind = grid
                .kind_at(coord)
                .expect("crate coordinate lies outside the grid");
            kind == CellKind::Target
        })
    }
}

impl Grid {
    /// How many crates currently sit on targets. Display-only progress
    /// figure; the win check is `BoardState::is_won`.
    pub fn crates_on_targets(&self, board: &BoardState) -> usize {
        board
            .crate_positions()
            .filter(|&coord| self.kind_at(coord) == Ok(CellKind::Target))
            .count()
    }
}
