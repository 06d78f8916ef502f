use crate::core::{Direction, GameError, PuzzleState, StageCatalog, StageId, Tile, UserAction, Vec2};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;

/// How long one input poll waits; timeouts drive the idle blink.
const INPUT_POLL: Duration = Duration::from_millis(50);
/// Poll timeouts per blink phase flip (10 x 50ms, half a second).
pub const BLINK_TICKS: u32 = 10;

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

fn tile_char(tile: Tile) -> char {
    match tile {
        Tile::Road => ' ',
        Tile::Goal => '.',
        Tile::Ball => '$',
        Tile::Full => '*',
        Tile::Wall => '#',
    }
}

/// Plain-text frame: the grid with the player overlaid on its cell. Tests
/// and benches compare against this form.
pub fn render_game_to_string(state: &PuzzleState) -> Result<String, GameError> {
    let mut result = String::new();
    for y in 0..state.height() {
        for x in 0..state.width() {
            let pos = Vec2 { x, y };
            let tile = state.tile_at(&pos)?;
            let ch = if pos == state.player() {
                if tile == Tile::Goal { '+' } else { '@' }
            } else {
                tile_char(tile)
            };
            result.push(ch);
        }
        result.push('\n');
    }
    Ok(result)
}

/// Styled rows for the terminal: same layout as the string form, with the
/// player glyph colored by blink phase.
fn render_game_lines(state: &PuzzleState, blink: bool) -> Result<Vec<Line<'static>>, GameError> {
    let player_style = Style::default().fg(if blink { Color::Cyan } else { Color::Indexed(36) });
    let mut lines = Vec::new();
    for y in 0..state.height() {
        let mut spans = Vec::new();
        let mut run = String::new();
        for x in 0..state.width() {
            let pos = Vec2 { x, y };
            let tile = state.tile_at(&pos)?;
            if pos == state.player() {
                if !run.is_empty() {
                    spans.push(Span::raw(std::mem::take(&mut run)));
                }
                let glyph = if tile == Tile::Goal { "+" } else { "@" };
                spans.push(Span::styled(glyph, player_style));
            } else {
                run.push(tile_char(tile));
            }
        }
        if !run.is_empty() {
            spans.push(Span::raw(run));
        }
        lines.push(Line::from(spans));
    }
    Ok(lines)
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    render: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    let game_lines = render_game_lines(render.state, render.blink)?;
    let title = format!("Push Push - Stage {}", render.state.stage());

    let status = if render.cleared {
        "Stage cleared! Press any key to continue.".to_string()
    } else {
        format!(
            "Balls left: {} | Move: WASD/Arrows | Reset: R | Stage select: Esc | Quit: Q",
            render.state.balls()
        )
    };
    let status = if let Some(change) = &render.last_change {
        format!("{} | Last: {:?}", status, change)
    } else {
        status
    };

    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let game_paragraph = Paragraph::new(game_lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let status_paragraph = Paragraph::new(status)
            .block(Block::default().borders(Borders::ALL).title("Info"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub fn render_stage_select(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    catalog: &StageCatalog,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines: Vec<Line> = vec![Line::from("Select a stage"), Line::from("")];
    for (id, definition) in catalog.entries() {
        lines.push(Line::from(format!(
            "{}: {}x{}, {} balls",
            id,
            definition.width(),
            definition.height(),
            definition.balls()
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Press the stage number, or Q to quit"));

    terminal.draw(|f| {
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Push Push"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, f.area());
    })?;
    Ok(())
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Stage(StageId),
    Reset,
    StageSelect,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(INPUT_POLL)? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') => ConsoleInput::Quit,
                KeyCode::Esc => ConsoleInput::StageSelect,
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Reset,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Up))
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Down))
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Left))
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Right))
                }
                KeyCode::Char(digit @ '1'..='9') => {
                    ConsoleInput::Stage(digit as StageId - '0' as StageId)
                }
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
