use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;

use crate::consts::TILE_SIZE;

/// Position in world units plus a facing angle in radians.
///
/// The angle is never wrapped, so interpolating between two poses turns the
/// short way the player asked for instead of spinning around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec2,
    pub angle: f32,
}

impl Pose {
    pub fn new(position: Vec2, angle: f32) -> Self {
        Pose { position, angle }
    }

    /// Pose centred on the given tile.
    pub fn at_tile(col: usize, row: usize, angle: f32) -> Self {
        Pose {
            position: Vec2::new(col as f32 + 0.5, row as f32 + 0.5) * TILE_SIZE,
            angle,
        }
    }

    /// Tile containing this pose, as (col, row).
    pub fn tile(&self) -> (i32, i32) {
        let cell = (self.position / TILE_SIZE).floor();
        (cell.x as i32, cell.y as i32)
    }

    /// Moves `t` of the way toward `target`, position and angle alike.
    pub fn lerp(&self, target: &Pose, t: f32) -> Pose {
        Pose {
            position: self.position.lerp(target.position, t),
            angle: lerp(self.angle, target.angle, t),
        }
    }

    pub fn distance(&self, other: &Pose) -> f32 {
        self.position.distance(other.position)
    }
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// One of the four grid directions. The y axis grows downward, so angle
/// pi/2 faces South.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinal {
    East,
    South,
    West,
    North,
}

impl Cardinal {
    const CLOCKWISE: [Cardinal; 4] = [
        Cardinal::East,
        Cardinal::South,
        Cardinal::West,
        Cardinal::North,
    ];

    /// Nearest cardinal to `angle`. Exact 45 degree ties go clockwise.
    pub fn from_angle(angle: f32) -> Self {
        let quarter_turns = (angle.rem_euclid(TAU) / FRAC_PI_2).round() as usize;
        Self::CLOCKWISE[quarter_turns % 4]
    }

    pub fn offset(self) -> (i32, i32) {
        match self {
            Cardinal::East => (1, 0),
            Cardinal::South => (0, 1),
            Cardinal::West => (-1, 0),
            Cardinal::North => (0, -1),
        }
    }

    pub fn opposite(self) -> Self {
        self.rotated(2)
    }

    pub fn left(self) -> Self {
        self.rotated(3)
    }

    pub fn right(self) -> Self {
        self.rotated(1)
    }

    fn rotated(self, quarter_turns: usize) -> Self {
        Self::CLOCKWISE[(self as usize + quarter_turns) % 4]
    }
}
