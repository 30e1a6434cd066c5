use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::consts::{
    DEFAULT_CONFIG_PATH, DEFAULT_RANDOM_MAP_SIDE, RANDOM_MAP_MAX_SIDE, RANDOM_MAP_MIN_SIDE,
};
use crate::map::{MapError, World};
use crate::maze;

#[derive(Debug, Clone, PartialEq)]
pub enum MapSource {
    Builtin,
    File(PathBuf),
    Random { side: usize, seed: u64 },
}

impl MapSource {
    pub fn load(&self) -> Result<World, MapError> {
        match self {
            MapSource::Builtin => Ok(World::default_map()),
            MapSource::File(path) => World::parse_from_file(path),
            MapSource::Random { side, seed } => maze::generate(*side, *seed),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gridcaster", about = "Grid raycaster with tile-stepping movement")]
pub struct Cli {
    /// Config file (TOML)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Load the map from a TOML file
    #[arg(short, long, conflicts_with = "random_map")]
    pub map: Option<PathBuf>,

    /// Generate a random maze, optionally with the given side length
    #[arg(
        long = "random-map",
        value_name = "SIDE",
        num_args = 0..=1,
        default_missing_value = DEFAULT_RANDOM_MAP_SIDE,
        value_parser = parse_side
    )]
    pub random_map: Option<usize>,

    /// Seed for --random-map (defaults to the current time)
    #[arg(long, requires = "random_map")]
    pub seed: Option<u64>,

    /// Show the minimap overlay at startup
    #[arg(long)]
    pub minimap: bool,

    /// Shade walls hit on their x side
    #[arg(long)]
    pub shade_sides: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_side(value: &str) -> Result<usize, String> {
    let side: usize = value
        .parse()
        .map_err(|_| format!("random map side must be a number, got {value:?}"))?;
    if !(RANDOM_MAP_MIN_SIDE..=RANDOM_MAP_MAX_SIDE).contains(&side) {
        return Err(format!(
            "random map side must be between {RANDOM_MAP_MIN_SIDE} and {RANDOM_MAP_MAX_SIDE} (got {side})"
        ));
    }
    Ok(side)
}

impl Cli {
    /// Applies command line overrides on top of the file config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(map) = &self.map {
            config.map = Some(map.clone());
        }
        config.show_minimap |= self.minimap;
        config.shade_sides |= self.shade_sides;
    }

    /// `fallback_seed` is used when `--random-map` is given without `--seed`.
    pub fn map_source(&self, config: &Config, fallback_seed: u64) -> MapSource {
        if let Some(side) = self.random_map {
            return MapSource::Random {
                side,
                seed: self.seed.unwrap_or(fallback_seed),
            };
        }
        match &config.map {
            Some(path) => MapSource::File(path.clone()),
            None => MapSource::Builtin,
        }
    }
}
