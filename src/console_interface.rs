use crate::core::{BoardState, CellKind, Coord, Direction, Grid, MoveOutcome};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    grid: &Grid,
    board: &BoardState,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let title = format!(
            "Sokoban - Level {}/{} - Moves: {} - Crates placed: {}/{}",
            state.level_number,
            state.level_count,
            state.move_count,
            grid.crates_on_targets(board),
            board.crate_count(),
        );
        let game_text = render_game_to_string(grid, board);
        let game_paragraph = Paragraph::new(game_text)
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let instructions = if state.won {
            format!(
                "Level complete in {} moves! Press any key to continue.",
                state.move_count
            )
        } else {
            let base = "Controls: WASD or Arrow keys to move, Q to quit";
            match state.last_outcome {
                Some(MoveOutcome::Blocked) => format!("{} | Blocked", base),
                Some(outcome) => format!("{} | Last: {:?}", base, outcome),
                None => base.to_string(),
            }
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

/// Renders the board with the level-file glyphs, plus `C` for a crate
/// seated on a target. That seated state is recomputed from the grid every
/// time; nothing caches it.
pub fn render_game_to_string(grid: &Grid, board: &BoardState) -> String {
    let mut result = String::new();
    for (y, row) in grid.rows().enumerate() {
        for (x, &kind) in row.iter().enumerate() {
            let coord = Coord::new(x as i32, y as i32);
            let has_player = coord == board.player_position();
            let has_crate = board.is_crate_at(coord);
            let ch = match kind {
                CellKind::Wall => 'X',
                CellKind::Floor if has_player => '@',
                CellKind::Floor if has_crate => '*',
                CellKind::Floor => ' ',
                CellKind::Target if has_player => '@',
                CellKind::Target if has_crate => 'C',
                CellKind::Target => '.',
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

pub enum ConsoleInput {
    Move(Direction),
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::Move(Direction::Up)
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::Move(Direction::Down)
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::Move(Direction::Left)
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::Move(Direction::Right)
                }
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
