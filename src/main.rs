// Console push-block puzzle with ratatui
// Controls: W/A/S/D or arrow keys to move, R to reset the stage, Esc for stage select, Q to quit.
// Tiles: '#' wall, '@' player, '$' ball, '.' goal, '*' ball parked on a goal, '+' player on a goal, ' ' road.

use PushEngine::console_interface::ConsoleInput::*;
use PushEngine::console_interface::{
    BLINK_TICKS, cleanup_terminal, handle_input, render_game, render_stage_select, setup_terminal,
};
use PushEngine::core::{PuzzleState, StageCatalog, StageId, step};
use PushEngine::models::GameRenderState;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;

enum StageExit {
    ToSelect,
    Quit,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = StageCatalog::builtin()?;
    // An optional stage id argument skips the first select screen.
    let first_stage: Option<StageId> = std::env::args().nth(1).and_then(|arg| arg.parse().ok());

    let mut terminal = setup_terminal()?;
    let result = run(&catalog, first_stage, &mut terminal);
    cleanup_terminal()?;
    result
}

fn run(
    catalog: &StageCatalog,
    first_stage: Option<StageId>,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut next_stage = first_stage;
    loop {
        let stage = match next_stage.take() {
            Some(stage) => stage,
            None => match run_stage_select(catalog, terminal)? {
                Some(stage) => stage,
                None => return Ok(()),
            },
        };
        // A bad CLI argument falls through to the select screen.
        if catalog.get(stage).is_err() {
            continue;
        }
        if let StageExit::Quit = run_stage(catalog, stage, terminal)? {
            return Ok(());
        }
    }
}

fn run_stage_select(
    catalog: &StageCatalog,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<Option<StageId>, Box<dyn std::error::Error>> {
    render_stage_select(terminal, catalog)?;
    loop {
        match handle_input()? {
            Quit => return Ok(None),
            Stage(stage) if catalog.stage_ids().any(|id| id == stage) => return Ok(Some(stage)),
            _ => {}
        }
    }
}

fn run_stage(
    catalog: &StageCatalog,
    stage: StageId,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<StageExit, Box<dyn std::error::Error>> {
    let mut state = PuzzleState::load(catalog, stage)?;
    let mut last_change = None;
    let mut blink = false;
    let mut ticks = 0u32;

    render_game(
        terminal,
        &GameRenderState {
            state: &state,
            cleared: false,
            last_change,
            blink,
        },
    )?;

    loop {
        match handle_input()? {
            Quit => return Ok(StageExit::Quit),
            StageSelect => return Ok(StageExit::ToSelect),
            Reset => {
                state = state.reset(catalog)?;
                last_change = None;
                render_game(
                    terminal,
                    &GameRenderState {
                        state: &state,
                        cleared: false,
                        last_change,
                        blink,
                    },
                )?;
            }
            UserAction(action) => {
                let outcome = step(&mut state, action)?;
                last_change = Some(outcome);
                let cleared = state.is_cleared();
                render_game(
                    terminal,
                    &GameRenderState {
                        state: &state,
                        cleared,
                        last_change,
                        blink,
                    },
                )?;
                if cleared {
                    // Hold the banner until the player presses something.
                    loop {
                        match handle_input()? {
                            Timeout => {}
                            Quit => return Ok(StageExit::Quit),
                            _ => return Ok(StageExit::ToSelect),
                        }
                    }
                }
            }
            Timeout => {
                ticks += 1;
                if ticks >= BLINK_TICKS {
                    ticks = 0;
                    blink = !blink;
                    render_game(
                        terminal,
                        &GameRenderState {
                            state: &state,
                            cleared: false,
                            last_change,
                            blink,
                        },
                    )?;
                }
            }
            Stage(_) | Unknown => {}
        }
    }
}
