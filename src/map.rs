use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Wall,
}

impl Tile {
    fn from_cell(cell: u8) -> Self {
        if cell > 0 { Tile::Wall } else { Tile::Empty }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error reading map {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse TOML map {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("map must be at least 3x3, got {width}x{height}")]
    TooSmall { width: usize, height: usize },
    #[error("random map side must be between {min} and {max}, got {side}")]
    SideOutOfRange { side: usize, min: usize, max: usize },
    #[error("map row {row} has {len} cells, expected {expected}")]
    Ragged { row: usize, len: usize, expected: usize },
    #[error("border tile ({col}, {row}) must be a wall")]
    OpenBorder { col: usize, row: usize },
    #[error("spawn tile ({col}, {row}) is not an open tile")]
    BadSpawn { col: usize, row: usize },
}

/// On-disk map layout: rows of 0 (open) / non-zero (wall) cells.
#[derive(Deserialize, Debug, Clone)]
struct MapFile {
    map: Vec<Vec<u8>>,
    spawn: Option<[usize; 2]>,
}

/// Immutable occupancy grid. The outer ring is always wall.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    spawn: (usize, usize),
}

const DEFAULT_MAP: [[u8; 10]; 10] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 0, 0, 0, 1, 0, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 0, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 1, 0, 1, 0, 0, 0, 1],
    [1, 0, 0, 1, 0, 1, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

impl World {
    /// Builds a world from rows of tiles, spawning at tile (1, 1).
    pub fn new(rows: Vec<Vec<Tile>>) -> Result<Self, MapError> {
        Self::with_spawn(rows, (1, 1))
    }

    pub fn with_spawn(rows: Vec<Vec<Tile>>, spawn: (usize, usize)) -> Result<Self, MapError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width < 3 || height < 3 {
            return Err(MapError::TooSmall { width, height });
        }

        let mut tiles = Vec::with_capacity(width * height);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(MapError::Ragged {
                    row,
                    len: cells.len(),
                    expected: width,
                });
            }
            tiles.extend(cells);
        }

        let world = World {
            width,
            height,
            tiles,
            spawn,
        };

        for row in 0..height {
            for col in 0..width {
                let on_border = row == 0 || col == 0 || row == height - 1 || col == width - 1;
                if on_border && world.tiles[row * width + col] != Tile::Wall {
                    return Err(MapError::OpenBorder { col, row });
                }
            }
        }

        let (col, row) = spawn;
        if col >= width || row >= height || world.tiles[row * width + col] != Tile::Empty {
            return Err(MapError::BadSpawn { col, row });
        }

        Ok(world)
    }

    /// The built-in 10x10 map.
    pub fn default_map() -> Self {
        let rows = DEFAULT_MAP
            .iter()
            .map(|row| row.iter().map(|&cell| Tile::from_cell(cell)).collect())
            .collect();
        // The constant satisfies every invariant checked in `with_spawn`.
        match Self::new(rows) {
            Ok(world) => world,
            Err(e) => unreachable!("built-in map is invalid: {e}"),
        }
    }

    pub fn parse_from_file(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|source| MapError::Io {
            path: display.clone(),
            source,
        })?;
        Self::parse_from_str(&contents).map_err(|e| match e {
            MapError::Parse { source, .. } => MapError::Parse {
                path: display,
                source,
            },
            other => other,
        })
    }

    pub fn parse_from_str(contents: &str) -> Result<Self, MapError> {
        let file: MapFile = toml::from_str(contents).map_err(|source| MapError::Parse {
            path: "<inline>".to_string(),
            source,
        })?;
        let rows = file
            .map
            .iter()
            .map(|row| row.iter().map(|&cell| Tile::from_cell(cell)).collect())
            .collect();
        let spawn = file.spawn.map_or((1, 1), |[col, row]| (col, row));
        Self::with_spawn(rows, spawn)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile the player starts on, as (col, row).
    pub fn spawn(&self) -> (usize, usize) {
        self.spawn
    }

    pub fn tile(&self, col: i32, row: i32) -> Option<Tile> {
        if col < 0 || row < 0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.tiles[row * self.width + col])
    }

    /// Anything outside the grid counts as wall.
    pub fn is_wall(&self, col: i32, row: i32) -> bool {
        self.tile(col, row).is_none_or(|tile| tile == Tile::Wall)
    }
}
