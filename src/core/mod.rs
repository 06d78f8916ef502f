mod bounds;
mod grid;
mod model_helpers;
mod models;
mod stages;
mod update;

pub use bounds::GridBounds;
pub use grid::Grid;
pub use models::{
    Direction, GameError, MoveOutcome, PuzzleState, StageId, Tile, UserAction, Vec2,
};
pub use stages::{StageCatalog, StageDefinition, parse_stage};
pub use update::step;
