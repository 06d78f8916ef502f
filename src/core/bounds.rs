use crate::core::models::Vec2;

/// A bounding box with one corner fixed at (0, 0) and assumed to have
/// positive extent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridBounds {
    pub extent: Vec2,
}

impl GridBounds {
    pub fn new(width: i32, height: i32) -> GridBounds {
        GridBounds {
            extent: Vec2 {
                x: width,
                y: height,
            },
        }
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.x >= 0 && pos.x < self.extent.x && pos.y >= 0 && pos.y < self.extent.y
    }

    pub fn area(&self) -> i32 {
        self.extent.x * self.extent.y
    }
}
