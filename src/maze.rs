// Random maze source for `--random-map`.

use crate::consts::{
    RANDOM_MAP_HOLE_CHANCE, RANDOM_MAP_MAX_SIDE, RANDOM_MAP_MIN_SIDE,
    RANDOM_MAP_PATH_DEVIATION_CHANCE,
};
use crate::map::{MapError, Tile, World};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

struct Carver {
    side: usize,
    cells: Vec<Tile>,
    rng: StdRng,
}

impl Carver {
    fn tile(&self, col: usize, row: usize) -> Tile {
        self.cells[row * self.side + col]
    }

    /// True when every neighbour of `tile` except `came_from` is still wall.
    fn surrounded_by_walls(
        &self,
        tile: (usize, usize),
        came_from: (usize, usize),
        include_corners: bool,
    ) -> bool {
        for dx in -1i32..=1 {
            for dy in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if !include_corners && dx != 0 && dy != 0 {
                    continue;
                }
                let nx = tile.0 as i32 + dx;
                let ny = tile.1 as i32 + dy;
                if (nx, ny) == (came_from.0 as i32, came_from.1 as i32) {
                    continue;
                }
                if nx < 0 || ny < 0 || nx as usize >= self.side || ny as usize >= self.side {
                    continue;
                }
                if self.tile(nx as usize, ny as usize) == Tile::Empty {
                    return false;
                }
            }
        }
        true
    }

    fn carve(&mut self, tile: (usize, usize), prev_direction: Option<(i32, i32)>) {
        self.cells[tile.1 * self.side + tile.0] = Tile::Empty;

        let mut directions = vec![(0, 1), (0, -1), (1, 0), (-1, 0)];
        directions.shuffle(&mut self.rng);
        // Keep heading the same way most of the time so corridors run straight.
        if let Some(prev) = prev_direction {
            if self.rng.random_range(0..100) >= RANDOM_MAP_PATH_DEVIATION_CHANCE {
                directions.retain(|&d| d != prev);
                directions.insert(0, prev);
            }
        }

        for (dx, dy) in directions {
            let nx = tile.0 as i32 + dx;
            let ny = tile.1 as i32 + dy;
            // Never carve the outer ring.
            if nx < 1 || ny < 1 || nx as usize >= self.side - 1 || ny as usize >= self.side - 1 {
                continue;
            }
            let next = (nx as usize, ny as usize);
            if self.tile(next.0, next.1) == Tile::Empty {
                continue;
            }
            if self.surrounded_by_walls(next, tile, true)
                || self.rng.random_range(0..100) < RANDOM_MAP_HOLE_CHANCE
            {
                self.carve(next, Some((dx, dy)));
            }
        }
    }
}

/// Carves a square maze of `side` tiles starting from tile (1, 1).
/// `side` must lie in `RANDOM_MAP_MIN_SIDE..=RANDOM_MAP_MAX_SIDE`, which also
/// bounds the carving recursion depth.
pub fn generate(side: usize, seed: u64) -> Result<World, MapError> {
    if !(RANDOM_MAP_MIN_SIDE..=RANDOM_MAP_MAX_SIDE).contains(&side) {
        return Err(MapError::SideOutOfRange {
            side,
            min: RANDOM_MAP_MIN_SIDE,
            max: RANDOM_MAP_MAX_SIDE,
        });
    }

    let mut carver = Carver {
        side,
        cells: vec![Tile::Wall; side * side],
        rng: StdRng::seed_from_u64(seed),
    };
    carver.carve((1, 1), None);

    let rows = carver.cells.chunks(side).map(<[Tile]>::to_vec).collect();
    World::new(rows)
}
