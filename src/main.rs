// Console Sokoban. Push every crate ('*') onto a target ('.') to finish a
// level; the catalog advances on each win.
// Controls: W/A/S/D or arrow keys. Q to quit.
// Tiles: 'X' wall, ' ' floor, '.' target, '@' player, '*' crate.

mod console_interface;
mod core;
mod models;
#[cfg(test)]
mod test;

use crate::console_interface::{
    ConsoleInput, cleanup_terminal, handle_input, render_game, setup_terminal,
};
use crate::core::{MoveOutcome, attempt_move, parse_level};
use crate::models::GameRenderState;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;

const LEVELS: [&str; 3] = [
    r#"
XXXXXXX
X     X
X @*. X
X     X
XXXXXXX
"#,
    r#"
XXXXXXXX
X  .   X
X  *   X
X @* . X
X      X
XXXXXXXX
"#,
    r#"
XXXXXXXX
X      X
X.*    X
X.* @  X
X.*    X
XXXXXXXX
"#,
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = setup_terminal()?;
    let result = run_campaign(&mut terminal);
    cleanup_terminal()?;
    result
}

fn run_campaign(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    for (index, level) in LEVELS.iter().enumerate() {
        let completed = run_level(terminal, level, index + 1, LEVELS.len())?;
        if !completed {
            return Ok(());
        }
    }
    Ok(())
}

/// Plays one level to completion. Returns false if the player quit instead.
fn run_level(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    level: &str,
    level_number: usize,
    level_count: usize,
) -> Result<bool, Box<dyn std::error::Error>> {
    let (grid, mut board) = parse_level(level)?;
    let mut move_count: u32 = 0;
    let mut last_outcome = None;

    let first_render = GameRenderState {
        won: false,
        last_outcome,
        move_count,
        level_number,
        level_count,
    };
    render_game(terminal, &grid, &board, &first_render)?;

    loop {
        match handle_input()? {
            ConsoleInput::Quit => return Ok(false),
            ConsoleInput::Move(direction) => {
                let outcome = attempt_move(&grid, &mut board, direction);
                // The move counter belongs to this boundary, not the engine.
                if outcome != MoveOutcome::Blocked {
                    move_count += 1;
                }
                last_outcome = Some(outcome);

                let won = board.is_won(&grid);
                let to_render = GameRenderState {
                    won,
                    last_outcome,
                    move_count,
                    level_number,
                    level_count,
                };
                render_game(terminal, &grid, &board, &to_render)?;

                if won {
                    // Hold the win screen until the player presses a key.
                    loop {
                        match handle_input()? {
                            ConsoleInput::Timeout => {}
                            ConsoleInput::Quit => return Ok(false),
                            _ => return Ok(true),
                        }
                    }
                }
            }
            ConsoleInput::Timeout | ConsoleInput::Unknown => {}
        }
    }
}
