use crate::core::{MoveOutcome, PuzzleState};

/// What the console layer needs to draw one frame of a stage.
pub struct GameRenderState<'a> {
    pub state: &'a PuzzleState,
    pub cleared: bool,
    pub last_change: Option<MoveOutcome>,
    /// Phase of the idle player blink; flipped by the main loop on poll
    /// timeouts.
    pub blink: bool,
}
