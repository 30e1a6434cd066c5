pub mod caster;
pub mod clock;
pub mod config;
pub mod consts;
pub mod flags;
pub mod gamestate;
pub mod map;
pub mod maze;
pub mod minimap;
pub mod player;
pub mod pose;
pub mod projector;
pub mod renderer;
pub mod screenshot;
pub mod text;

pub use gamestate::GameState;
pub use map::World;

/// Controls sampled for one frame. Moves are held keys, turns are press edges.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Input {
    pub forth: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

impl Input {
    /// Keeps press edges seen since the last frame so none are dropped
    /// between frame ticks.
    pub fn latch_edges(&mut self, turn_left: bool, turn_right: bool) {
        self.turn_left |= turn_left;
        self.turn_right |= turn_right;
    }
}
