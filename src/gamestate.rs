use crate::Input;
use crate::caster::{RayHit, cast_ray, ray_angles};
use crate::map::World;
use crate::player::Controller;
use crate::pose::Pose;
use crate::projector::Viewport;

/// One ray of the current view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRay {
    pub column: usize,
    pub angle: f32,
    pub hit: Option<RayHit>,
}

pub struct GameState {
    pub world: World,
    pub controller: Controller,
    pub frame: u64,
}

impl GameState {
    /// Spawns facing east on the world's spawn tile.
    pub fn new(world: World) -> Self {
        let (col, row) = world.spawn();
        let controller = Controller::new(Pose::at_tile(col, row, 0.0));
        GameState {
            world,
            controller,
            frame: 0,
        }
    }

    pub fn update(&mut self, input: &Input) {
        self.controller.update(input, &self.world);
        self.frame += 1;
    }

    /// Casts every ray of the view from the display pose.
    pub fn cast_view<'a>(
        &'a self,
        viewport: &Viewport,
    ) -> impl Iterator<Item = ViewRay> + use<'a> {
        let eye = *self.controller.display();
        ray_angles(eye.angle, viewport).map(move |(column, angle)| ViewRay {
            column,
            angle,
            hit: cast_ray(&self.world, eye.position, angle),
        })
    }
}
