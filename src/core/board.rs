use std::collections::HashSet;

use crate::core::Coord;

/// Everything that changes during play: the player and the crates. Crates
/// are fungible, identified only by where they stand.
///
/// This is a dumb container: the mutators trust their caller. Legality lives
/// in `attempt_move`, which is the only code that mutates a board.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BoardState {
    player: Coord,
    crates: HashSet<Coord>,
}

impl BoardState {
    pub fn new(player: Coord, crates: HashSet<Coord>) -> BoardState {
        BoardState { player, crates }
    }

    pub fn player_position(&self) -> Coord {
        self.player
    }

    pub fn is_crate_at(&self, coord: Coord) -> bool {
        self.crates.contains(&coord)
    }

    pub fn crate_positions(&self) -> impl Iterator<Item = Coord> + '_ {
        self.crates.iter().copied()
    }

    pub fn crate_count(&self) -> usize {
        self.crates.len()
    }

    pub fn move_player_to(&mut self, coord: Coord) {
        self.player = coord;
    }

    pub fn move_crate(&mut self, from: Coord, to: Coord) {
        let removed = self.crates.remove(&from);
        debug_assert!(removed, "no crate at ({}, {})", from.x, from.y);
        let inserted = self.crates.insert(to);
        debug_assert!(inserted, "crate already at ({}, {})", to.x, to.y);
    }
}
