use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use glam::Vec2;

use gridcaster::caster::{Side, cast_ray, ray_angles};
use gridcaster::consts::{ARRIVAL_THRESHOLD, MAX_RAY_DISTANCE, TILE_SIZE};
use gridcaster::map::{Tile, World};
use gridcaster::player::{Controller, MotionState, MoveCommand, Turn};
use gridcaster::pose::Pose;
use gridcaster::projector::Viewport;
use gridcaster::{GameState, Input};

fn tile_point(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y) * TILE_SIZE
}

#[test]
fn axis_aligned_rays_match_wall_face_distance() {
    let world = World::default_map();
    // (origin, angle, expected distance in tiles)
    let cases = [
        (tile_point(1.5, 2.5), 0.0, 0.5),
        (tile_point(3.5, 2.5), std::f32::consts::PI, 0.5),
        (tile_point(3.5, 1.5), FRAC_PI_2, 4.5),
        (tile_point(4.25, 8.5), -FRAC_PI_2, 3.5),
        (tile_point(1.2, 6.5), 0.0, 1.8),
    ];
    for (origin, angle, expected) in cases {
        let hit = cast_ray(&world, origin, angle).expect("ray should hit");
        assert!(
            (hit.distance - expected).abs() < 1e-3,
            "origin {origin:?} angle {angle}: got {} expected {expected}",
            hit.distance
        );
    }
}

#[test]
fn spawn_facing_east_sees_far_border() {
    let state = GameState::new(World::default_map());
    let eye = *state.controller.display();
    let hit = cast_ray(&state.world, eye.position, eye.angle).unwrap();
    assert_eq!(hit.side, Side::X);
    assert_eq!(hit.tile, (9, 1));
    assert!((hit.distance - 7.5).abs() < 1e-4);
}

#[test]
fn open_map_reports_no_hit_past_cap() {
    let side = 16;
    let rows: Vec<Vec<Tile>> = (0..side)
        .map(|row| {
            (0..side)
                .map(|col| {
                    if row == 0 || col == 0 || row == side - 1 || col == side - 1 {
                        Tile::Wall
                    } else {
                        Tile::Empty
                    }
                })
                .collect()
        })
        .collect();
    let world = World::new(rows).unwrap();
    let origin = tile_point(1.5, 1.5);

    assert_eq!(cast_ray(&world, origin, 0.0), None);
    assert_eq!(cast_ray(&world, origin, FRAC_PI_2), None);
    let near = cast_ray(&world, origin, -FRAC_PI_2).unwrap();
    assert!(near.distance < MAX_RAY_DISTANCE);
}

#[test]
fn ninety_degree_fov_with_120_rays() {
    let viewport = Viewport::default();
    let facing = 1.25;
    let angles: Vec<f32> = ray_angles(facing, &viewport).map(|(_, a)| a).collect();
    let step = FRAC_PI_2 / 120.0;

    assert_eq!(angles.len(), 120);
    assert!((angles[0] - (facing - FRAC_PI_4)).abs() < 1e-6);
    assert!((angles[119] - (facing + FRAC_PI_4 - step)).abs() < 1e-5);
    for pair in angles.windows(2) {
        assert!((pair[1] - pair[0] - step).abs() < 1e-5);
    }
}

#[test]
fn blocked_move_leaves_target_unchanged() {
    let world = World::default_map();
    // Facing north from (1, 1): (1, 0) is border wall.
    let mut controller = Controller::new(Pose::at_tile(1, 1, -FRAC_PI_2));
    let before = *controller.target();
    controller.update(
        &Input {
            forth: true,
            ..Input::default()
        },
        &world,
    );
    assert_eq!(controller.target().position, before.position);
    assert_eq!(controller.state(), MotionState::Idle);
}

#[test]
fn open_move_shifts_exactly_one_tile() {
    let world = World::default_map();
    for (angle, command, expected) in [
        (0.0, MoveCommand::Forward, (2, 1)),
        (FRAC_PI_2, MoveCommand::Forward, (1, 2)),
        (FRAC_PI_2, MoveCommand::StrafeLeft, (2, 1)),
        (0.0, MoveCommand::StrafeRight, (1, 2)),
    ] {
        let mut controller = Controller::new(Pose::at_tile(1, 1, angle));
        let start = controller.target().position;
        assert!(controller.try_move(command, &world));
        assert_eq!(controller.target().tile(), expected);
        assert!((controller.target().position.distance(start) - TILE_SIZE).abs() < 1e-4);
    }
}

#[test]
fn turns_are_quarter_turns_in_place() {
    let mut controller = Controller::new(Pose::at_tile(4, 5, 0.4));
    let position = controller.target().position;
    controller.turn(Turn::Right);
    assert!((controller.target().angle - (0.4 + FRAC_PI_2)).abs() < 1e-6);
    controller.turn(Turn::Left);
    controller.turn(Turn::Left);
    assert!((controller.target().angle - (0.4 - FRAC_PI_2)).abs() < 1e-6);
    assert_eq!(controller.target().position, position);
}

#[test]
fn walking_a_corridor_settles_on_each_tile() {
    let mut state = GameState::new(World::default_map());
    let held = Input {
        forth: true,
        ..Input::default()
    };
    for _ in 0..200 {
        state.update(&held);
    }
    // Row 1 is open up to the east border.
    assert_eq!(state.controller.target().tile(), (8, 1));

    for _ in 0..60 {
        state.update(&Input::default());
    }
    let controller = &state.controller;
    assert!(controller.display().distance(controller.target()) < ARRIVAL_THRESHOLD);
    assert_eq!(controller.state(), MotionState::Idle);
}

#[test]
fn turn_then_walk_uses_new_facing() {
    let mut state = GameState::new(World::default_map());
    state.update(&Input {
        turn_right: true,
        ..Input::default()
    });
    for _ in 0..30 {
        state.update(&Input::default());
    }
    state.update(&Input {
        forth: true,
        ..Input::default()
    });
    assert_eq!(state.controller.target().tile(), (1, 2));
}

#[test]
fn latched_turns_survive_until_the_next_frame() {
    let mut pending = Input::default();
    pending.latch_edges(true, false);
    pending.latch_edges(false, false);
    let frame = std::mem::take(&mut pending);
    assert!(frame.turn_left);
    assert!(!pending.turn_left);
}
