use std::collections::HashSet;

use crate::core::{BoardState, Coord, Grid, LevelError};

/// Parses one level text into its static and dynamic halves: the terrain
/// grid, and a board seeded from the `@` and `*` glyphs.
pub fn parse_level(text: &str) -> Result<(Grid, BoardState), LevelError> {
    let grid = Grid::load(text)?;

    let mut player: Option<Coord> = None;
    let mut crates: HashSet<Coord> = HashSet::new();

    for (y, line) in text.trim_matches('\n').lines().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            let coord = Coord::new(x as i32, y as i32);
            match ch {
                '@' => {
                    if player.replace(coord).is_some() {
                        return Err(LevelError::MalformedLevel(
                            "more than one player start".to_string(),
                        ));
                    }
                }
                '*' => {
                    crates.insert(coord);
                }
                _ => {}
            }
        }
    }

    let Some(player) = player else {
        return Err(LevelError::MalformedLevel(
            "level has no player start".to_string(),
        ));
    };

    Ok((grid, BoardState::new(player, crates)))
}
