use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use crate::Input;
use crate::consts::{ARRIVAL_THRESHOLD, LERP_FACTOR, TILE_SIZE};
use crate::map::World;
use crate::pose::{Cardinal, Pose};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    /// Display pose is within `ARRIVAL_THRESHOLD` of the target.
    Idle,
    Transitioning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCommand {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
}

impl MoveCommand {
    pub fn direction(self, facing: Cardinal) -> Cardinal {
        match self {
            MoveCommand::Forward => facing,
            MoveCommand::Back => facing.opposite(),
            MoveCommand::StrafeLeft => facing.left(),
            MoveCommand::StrafeRight => facing.right(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

impl Turn {
    fn delta(self) -> f32 {
        match self {
            Turn::Left => -FRAC_PI_2,
            Turn::Right => FRAC_PI_2,
        }
    }
}

/// Tile-stepping movement with a smoothed camera.
///
/// `target` only ever holds tile-centred positions and quarter-turn angle
/// changes; `display` chases it by `LERP_FACTOR` every frame and is what gets
/// rendered.
#[derive(Debug, Clone)]
pub struct Controller {
    target: Pose,
    display: Pose,
    state: MotionState,
}

impl Controller {
    pub fn new(spawn: Pose) -> Self {
        Controller {
            target: spawn,
            display: spawn,
            state: MotionState::Idle,
        }
    }

    pub fn target(&self) -> &Pose {
        &self.target
    }

    pub fn display(&self) -> &Pose {
        &self.display
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Direction moves are taken relative to, snapped from the target angle.
    pub fn facing(&self) -> Cardinal {
        Cardinal::from_angle(self.target.angle)
    }

    fn evaluate_state(&mut self) {
        self.state = if self.display.distance(&self.target) < ARRIVAL_THRESHOLD {
            MotionState::Idle
        } else {
            MotionState::Transitioning
        };
    }

    pub fn turn(&mut self, turn: Turn) {
        self.target.angle += turn.delta();
        tracing::debug!(?turn, angle = self.target.angle, "turn");
    }

    /// Steps the target one tile. Only accepted while idle and when the
    /// destination tile is open; returns whether the move was committed.
    pub fn try_move(&mut self, command: MoveCommand, world: &World) -> bool {
        if self.state != MotionState::Idle {
            return false;
        }

        let direction = command.direction(self.facing());
        let (dx, dy) = direction.offset();
        let (col, row) = self.target.tile();
        let destination = (col + dx, row + dy);

        if world.is_wall(destination.0, destination.1) {
            tracing::debug!(?command, ?direction, ?destination, "move blocked");
            return false;
        }

        self.target.position += Vec2::new(dx as f32, dy as f32) * TILE_SIZE;
        self.state = MotionState::Transitioning;
        tracing::debug!(?command, ?direction, ?destination, "move");
        true
    }

    /// Moves the display pose `LERP_FACTOR` of the way to the target.
    pub fn interpolate(&mut self) {
        self.display = self.display.lerp(&self.target, LERP_FACTOR);
    }

    /// One frame: settle the motion state, apply turns and at most one move,
    /// then interpolate.
    ///
    /// Held commands are tried in order forward, back, strafe left, strafe
    /// right; a blocked one falls through to the next. Holding two movement
    /// keys never commits two steps in the same frame, and every collision
    /// check runs against the already updated target tile.
    pub fn update(&mut self, input: &Input, world: &World) {
        self.evaluate_state();

        if input.turn_left {
            self.turn(Turn::Left);
        }
        if input.turn_right {
            self.turn(Turn::Right);
        }

        let held = [
            (input.forth, MoveCommand::Forward),
            (input.back, MoveCommand::Back),
            (input.left, MoveCommand::StrafeLeft),
            (input.right, MoveCommand::StrafeRight),
        ];
        for (_, command) in held.into_iter().filter(|(pressed, _)| *pressed) {
            if self.try_move(command, world) {
                break;
            }
        }

        self.interpolate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn controller_at(col: usize, row: usize, angle: f32) -> Controller {
        Controller::new(Pose::at_tile(col, row, angle))
    }

    #[test]
    fn forward_into_open_tile_moves_one_tile() {
        let world = World::default_map();
        let mut c = controller_at(1, 1, 0.0);
        assert!(c.try_move(MoveCommand::Forward, &world));
        assert_eq!(c.target().tile(), (2, 1));
        assert_eq!(c.target().position, Pose::at_tile(2, 1, 0.0).position);
        assert_eq!(c.state(), MotionState::Transitioning);
    }

    #[test]
    fn forward_into_wall_is_ignored() {
        let world = World::default_map();
        let mut c = controller_at(1, 1, -FRAC_PI_2);
        let before = *c.target();
        assert!(!c.try_move(MoveCommand::Forward, &world));
        assert_eq!(*c.target(), before);
        assert_eq!(c.state(), MotionState::Idle);
    }

    #[test]
    fn strafes_and_back_follow_facing() {
        let world = World::default_map();

        let mut c = controller_at(1, 1, 0.0);
        assert!(!c.try_move(MoveCommand::StrafeLeft, &world));
        assert!(c.try_move(MoveCommand::StrafeRight, &world));
        assert_eq!(c.target().tile(), (1, 2));

        let mut c = controller_at(3, 1, PI);
        assert!(c.try_move(MoveCommand::Back, &world));
        assert_eq!(c.target().tile(), (4, 1));
    }

    #[test]
    fn in_between_facing_snaps_to_nearest_cardinal() {
        let world = World::default_map();
        let mut c = controller_at(1, 1, 0.3);
        assert!(c.try_move(MoveCommand::Forward, &world));
        assert_eq!(c.target().tile(), (2, 1));
        assert_eq!(c.target().angle, 0.3);
    }

    #[test]
    fn second_move_rejected_while_transitioning() {
        let world = World::default_map();
        let mut c = controller_at(1, 1, 0.0);
        assert!(c.try_move(MoveCommand::Forward, &world));
        assert!(!c.try_move(MoveCommand::Forward, &world));
        assert_eq!(c.target().tile(), (2, 1));
    }

    #[test]
    fn turn_changes_angle_only() {
        let mut c = controller_at(1, 1, 0.0);
        c.turn(Turn::Right);
        assert!((c.target().angle - FRAC_PI_2).abs() < 1e-6);
        c.turn(Turn::Left);
        c.turn(Turn::Left);
        assert!((c.target().angle + FRAC_PI_2).abs() < 1e-6);
        assert_eq!(c.target().tile(), (1, 1));
    }

    #[test]
    fn update_commits_one_move_per_frame() {
        let world = World::default_map();
        let mut c = controller_at(1, 1, 0.0);
        let input = Input {
            forth: true,
            right: true,
            ..Input::default()
        };
        c.update(&input, &world);
        assert_eq!(c.target().tile(), (2, 1));
    }

    #[test]
    fn update_falls_through_blocked_command() {
        let world = World::default_map();
        let mut c = controller_at(1, 1, -FRAC_PI_2);
        let input = Input {
            forth: true,
            back: true,
            ..Input::default()
        };
        c.update(&input, &world);
        assert_eq!(c.target().tile(), (1, 2));
    }

    #[test]
    fn turn_applies_while_transitioning() {
        let world = World::default_map();
        let mut c = controller_at(1, 1, 0.0);
        c.update(&Input { forth: true, ..Input::default() }, &world);
        c.update(&Input { turn_right: true, ..Input::default() }, &world);
        assert_eq!(c.state(), MotionState::Transitioning);
        assert!((c.target().angle - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn display_converges_geometrically() {
        let world = World::default_map();
        let mut c = controller_at(1, 1, 0.0);
        c.update(&Input { forth: true, ..Input::default() }, &world);

        let mut previous = c.display().distance(c.target());
        assert!((previous - 18.0).abs() < 1e-3);
        for _ in 0..20 {
            c.update(&Input::default(), &world);
            let now = c.display().distance(c.target());
            assert!((now - previous * 0.9).abs() < 1e-3);
            previous = now;
        }
        assert!(previous < ARRIVAL_THRESHOLD);
        c.update(&Input::default(), &world);
        assert_eq!(c.state(), MotionState::Idle);
    }

    #[test]
    fn held_key_retries_after_arrival() {
        let world = World::default_map();
        let mut c = controller_at(1, 1, 0.0);
        let held = Input { forth: true, ..Input::default() };
        for _ in 0..15 {
            c.update(&held, &world);
        }
        assert_eq!(c.target().tile(), (3, 1));
    }
}
