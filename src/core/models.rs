use crate::core::grid::Grid;
use thiserror::Error;

/// One cell of the stage grid. `Full` is a ball parked on a goal; the goal
/// is recovered when the ball is pushed back off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Road,
    Goal,
    Ball,
    Full,
    Wall,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
}

pub type StageId = u32;

/// Run-time state of one stage attempt. `balls` counts un-parked balls and
/// is kept in lockstep with the grid by `step`; the player is never written
/// into the grid, its position lives here.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    pub(crate) stage: StageId,
    pub(crate) grid: Grid,
    pub(crate) player: Vec2,
    pub(crate) balls: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    PlayerMove,
    PlayerAndBallMove,
    /// The move was rejected: wall ahead, an unpushable chain, or the stage
    /// is already cleared. State is unchanged.
    Blocked,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("unknown stage id {0}")]
    UnknownStage(StageId),
    #[error("position {position:?} lies outside the grid extent {extent:?}")]
    OutOfBounds { position: Vec2, extent: Vec2 },
    #[error("stage {stage} is invalid: {reason}")]
    InvalidStage { stage: StageId, reason: String },
}
