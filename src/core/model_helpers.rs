use crate::core::models::{Direction, GameError, PuzzleState, StageId, Tile, Vec2};

impl PuzzleState {
    /// The stage is cleared exactly when every ball is parked on a goal.
    /// The counter is the invariant `step` maintains, so no grid scan here.
    pub fn is_cleared(&self) -> bool {
        self.balls == 0
    }

    pub fn tile_at(&self, pos: &Vec2) -> Result<Tile, GameError> {
        self.grid.get(pos)
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn balls(&self) -> u32 {
        self.balls
    }

    pub fn stage(&self) -> StageId {
        self.stage
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// Count of grid cells matching `predicate`.
    pub fn count_tiles(&self, predicate: impl Fn(Tile) -> bool) -> u32 {
        self.grid.count(predicate)
    }
}

impl Direction {
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}
