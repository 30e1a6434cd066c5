use std::f32::consts::FRAC_PI_2;

pub const SCREEN_WIDTH: usize = 1280;
pub const SCREEN_HEIGHT: usize = 720;
pub const WINDOW_TITLE: &str = "Raycaster with DDA";
pub const TARGET_FPS: u32 = 60;

// World units per map tile. Poses are stored in world units, ray hits in tiles.
pub const TILE_SIZE: f32 = 20.0;

pub const FOV: f32 = FRAC_PI_2;
pub const RAY_COUNT: usize = 120;
pub const TEXTURE_HEIGHT: usize = 32;
pub const MAX_RAY_DISTANCE: f32 = 10.0;
pub const MIN_PROJECTION_DISTANCE: f32 = 1e-4;

pub const ARRIVAL_THRESHOLD: f32 = 5.0;
pub const LERP_FACTOR: f32 = 0.1;

pub const RANDOM_MAP_MIN_SIDE: usize = 5;
pub const RANDOM_MAP_MAX_SIDE: usize = 35;
pub const DEFAULT_RANDOM_MAP_SIDE: &str = "15";
pub const RANDOM_MAP_PATH_DEVIATION_CHANCE: u32 = 20;
pub const RANDOM_MAP_HOLE_CHANCE: u32 = 5;

pub const DEFAULT_CONFIG_PATH: &str = "gridcaster.toml";
pub const DEFAULT_SCREENSHOT_DIR: &str = "screenshots";

pub const BACKGROUND_COLOR: u32 = 0x0000_0000;
pub const FLOOR_COLOR: u32 = 0x0082_8282;
pub const STRIPE_DARK: u32 = 0x0000_0000;
pub const STRIPE_LIGHT: u32 = 0x00FF_FFFF;
pub const STRIPE_LIGHT_SHADED: u32 = 0x00C8_C8C8;

pub const MINIMAP_TILE_PIXELS: usize = 12;
pub const MINIMAP_MARGIN: usize = 10;
pub const MINIMAP_BACKGROUND_COLOR: u32 = 0x0011_1111;
pub const MINIMAP_WALL_COLOR: u32 = 0x0044_4444;
pub const MINIMAP_OPEN_SPACE_COLOR: u32 = 0x00AA_AAAA;
pub const MINIMAP_GRID_COLOR: u32 = 0x0022_2222;
pub const MINIMAP_TARGET_COLOR: u32 = 0x0000_FF00;
pub const MINIMAP_PLAYER_COLOR: u32 = 0x00FF_0000;
pub const MINIMAP_BORDER_COLOR: u32 = 0x00FF_FFFF;
pub const MINIMAP_PLAYER_DOT_RADIUS: usize = 3;

pub const HUD_FONT_SIZE: f32 = 24.0;
pub const HUD_MARGIN: usize = 10;
pub const HUD_COLOR: [u8; 4] = [255, 255, 0, 255];
