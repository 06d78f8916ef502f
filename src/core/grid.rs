use crate::core::bounds::GridBounds;
use crate::core::models::{GameError, Tile, Vec2};

/// Bounds-checked tile storage over a flat row-major buffer. Tile-transition
/// rules live in `update`; this layer only guards the extent.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    bounds: GridBounds,
    cells: Vec<Tile>,
}

impl Grid {
    /// Build from rectangular rows. Rows must already be padded to a common
    /// width; the stage parser guarantees this.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Grid {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |row| row.len()) as i32;
        let bounds = GridBounds::new(width, height);
        let cells: Vec<Tile> = rows.into_iter().flatten().collect();
        debug_assert_eq!(cells.len(), bounds.area() as usize);
        Grid { bounds, cells }
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.extent.x
    }

    pub fn height(&self) -> i32 {
        self.bounds.extent.y
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &Vec2) -> Result<Tile, GameError> {
        if !self.bounds.contains(pos) {
            return Err(self.out_of_bounds(pos));
        }
        Ok(self.cells[self.index(pos)])
    }

    pub fn set(&mut self, pos: &Vec2, tile: Tile) -> Result<(), GameError> {
        if !self.bounds.contains(pos) {
            return Err(self.out_of_bounds(pos));
        }
        let index = self.index(pos);
        self.cells[index] = tile;
        Ok(())
    }

    /// Count of cells matching `predicate`. Stage validation and the ball
    /// counter invariant both lean on this.
    pub fn count(&self, predicate: impl Fn(Tile) -> bool) -> u32 {
        self.cells.iter().filter(|&&tile| predicate(tile)).count() as u32
    }

    fn index(&self, pos: &Vec2) -> usize {
        (pos.y * self.bounds.extent.x + pos.x) as usize
    }

    fn out_of_bounds(&self, pos: &Vec2) -> GameError {
        GameError::OutOfBounds {
            position: *pos,
            extent: self.bounds.extent,
        }
    }
}
