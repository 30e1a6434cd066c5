use std::f32::consts::TAU;

use glam::Vec2;

use crate::consts::{MAX_RAY_DISTANCE, TILE_SIZE};
use crate::map::World;
use crate::projector::Viewport;

/// Grid axis whose line the ray crossed when it entered the wall tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance along the ray in tiles, not yet fisheye corrected.
    pub distance: f32,
    pub side: Side,
    pub tile: (i32, i32),
}

/// Progress of the ray along one grid axis.
struct Axis {
    step: i32,
    next_crossing: f32,
    crossing_length: f32,
}

impl Axis {
    /// `None` when the ray runs parallel to this axis' grid lines.
    fn new(origin: f32, cell: i32, dir: f32) -> Option<Self> {
        if dir == 0.0 {
            return None;
        }
        let crossing_length = (1.0 / dir).abs();
        let (step, edge) = if dir < 0.0 {
            (-1, cell as f32)
        } else {
            (1, cell as f32 + 1.0)
        };
        Some(Axis {
            step,
            next_crossing: (edge - origin).abs() * crossing_length,
            crossing_length,
        })
    }

    fn advance(&mut self) -> f32 {
        let crossed_at = self.next_crossing;
        self.next_crossing += self.crossing_length;
        crossed_at
    }
}

/// Walks the grid from `origin` (world units) along `angle` until it enters a
/// wall tile. Returns `None` when nothing is hit within `MAX_RAY_DISTANCE`.
pub fn cast_ray(world: &World, origin: Vec2, angle: f32) -> Option<RayHit> {
    let angle = angle.rem_euclid(TAU);
    let (dir_y, dir_x) = angle.sin_cos();

    let pos = origin / TILE_SIZE;
    let mut map_x = pos.x.floor() as i32;
    let mut map_y = pos.y.floor() as i32;

    let mut axis_x = Axis::new(pos.x, map_x, dir_x);
    let mut axis_y = Axis::new(pos.y, map_y, dir_y);

    let mut distance = 0.0;
    while distance < MAX_RAY_DISTANCE {
        let side = match (&axis_x, &axis_y) {
            (Some(x), Some(y)) if x.next_crossing < y.next_crossing => Side::X,
            (Some(_), None) => Side::X,
            (_, Some(_)) => Side::Y,
            (None, None) => return None,
        };

        match (side, &mut axis_x, &mut axis_y) {
            (Side::X, Some(axis), _) => {
                distance = axis.advance();
                map_x += axis.step;
            }
            (Side::Y, _, Some(axis)) => {
                distance = axis.advance();
                map_y += axis.step;
            }
            _ => return None,
        }

        if world.is_wall(map_x, map_y) {
            return Some(RayHit {
                distance,
                side,
                tile: (map_x, map_y),
            });
        }
    }

    None
}

/// Evenly spaced ray angles across the field of view, leftmost first.
pub fn ray_angles(facing: f32, viewport: &Viewport) -> impl Iterator<Item = (usize, f32)> + use<> {
    let step = viewport.fov / viewport.ray_count as f32;
    let first = facing - viewport.fov / 2.0;
    (0..viewport.ray_count).map(move |column| (column, first + column as f32 * step))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Tile;
    use std::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4, PI};

    fn at_tile(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y) * TILE_SIZE
    }

    fn corridor(length: usize) -> World {
        let wall = vec![Tile::Wall; length];
        let mut middle = vec![Tile::Empty; length];
        middle[0] = Tile::Wall;
        middle[length - 1] = Tile::Wall;
        World::new(vec![wall.clone(), middle, wall]).unwrap()
    }

    #[test]
    fn east_into_adjacent_wall() {
        let world = World::default_map();
        let hit = cast_ray(&world, at_tile(1.5, 2.5), 0.0).unwrap();
        assert!((hit.distance - 0.5).abs() < 1e-5);
        assert_eq!(hit.side, Side::X);
        assert_eq!(hit.tile, (2, 2));
    }

    #[test]
    fn west_into_border() {
        let world = World::default_map();
        let hit = cast_ray(&world, at_tile(1.5, 2.5), PI).unwrap();
        assert!((hit.distance - 0.5).abs() < 1e-5);
        assert_eq!(hit.tile, (0, 2));
    }

    #[test]
    fn north_crosses_open_tile_first() {
        let world = World::default_map();
        let hit = cast_ray(&world, at_tile(1.5, 2.5), -FRAC_PI_2).unwrap();
        assert!((hit.distance - 1.5).abs() < 1e-4);
        assert_eq!(hit.side, Side::Y);
        assert_eq!(hit.tile, (1, 0));
    }

    #[test]
    fn long_corridor_east() {
        let world = World::default_map();
        let hit = cast_ray(&world, at_tile(1.5, 1.5), 0.0).unwrap();
        assert!((hit.distance - 7.5).abs() < 1e-4);
        assert_eq!(hit.tile, (9, 1));
    }

    #[test]
    fn diagonal_hits_corner_wall() {
        let world = World::default_map();
        let hit = cast_ray(&world, at_tile(1.5, 1.5), FRAC_PI_4).unwrap();
        assert!((hit.distance - FRAC_1_SQRT_2).abs() < 1e-4);
        assert_eq!(hit.tile, (2, 2));
    }

    #[test]
    fn zero_direction_component_is_finite() {
        // sin(0) is exactly zero, so the y axis never crosses.
        let world = World::default_map();
        let hit = cast_ray(&world, at_tile(3.5, 1.5), 0.0).unwrap();
        assert!(hit.distance.is_finite());
        assert!((hit.distance - 5.5).abs() < 1e-4);
    }

    #[test]
    fn angle_is_normalised() {
        let world = World::default_map();
        let base = cast_ray(&world, at_tile(1.5, 2.5), 0.0).unwrap();
        for angle in [3.0 * TAU, -TAU, -5.0 * TAU] {
            let hit = cast_ray(&world, at_tile(1.5, 2.5), angle).unwrap();
            assert_eq!(hit.tile, base.tile);
            assert!((hit.distance - base.distance).abs() < 1e-4);
        }
    }

    #[test]
    fn no_hit_beyond_search_cap() {
        let world = corridor(14);
        assert_eq!(cast_ray(&world, at_tile(1.5, 1.5), 0.0), None);
        assert!(cast_ray(&world, at_tile(1.5, 1.5), PI).is_some());
    }

    #[test]
    fn repeated_casts_agree() {
        let world = World::default_map();
        let origin = at_tile(4.3, 5.7);
        for i in 0..16 {
            let angle = i as f32 * 0.41;
            assert_eq!(cast_ray(&world, origin, angle), cast_ray(&world, origin, angle));
        }
    }

    #[test]
    fn ray_angles_span_field_of_view() {
        let viewport = Viewport::default();
        let facing = 0.7;
        let angles: Vec<_> = ray_angles(facing, &viewport).collect();
        let step = FRAC_PI_2 / 120.0;
        assert_eq!(angles.len(), 120);
        assert_eq!(angles[0].0, 0);
        assert!((angles[0].1 - (facing - FRAC_PI_4)).abs() < 1e-6);
        assert_eq!(angles[119].0, 119);
        assert!((angles[119].1 - (facing + FRAC_PI_4 - step)).abs() < 1e-5);
    }
}
