use std::path::Path;

use rusttype::{Font, Scale, point};

use crate::consts::{HUD_COLOR, HUD_FONT_SIZE, HUD_MARGIN};
use crate::gamestate::GameState;
use crate::player::MotionState;

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("IO error reading font {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{0} is not a usable TrueType font")]
    Invalid(String),
}

/// Status overlay drawn in the top-left corner.
pub struct Hud {
    font: Font<'static>,
}

impl Hud {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FontError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let font = Font::try_from_vec(bytes)
            .ok_or_else(|| FontError::Invalid(path.display().to_string()))?;
        Ok(Hud { font })
    }

    pub fn status_line(game_state: &GameState, fps: u32) -> String {
        let controller = &game_state.controller;
        let (col, row) = controller.target().tile();
        let state = match controller.state() {
            MotionState::Idle => "idle",
            MotionState::Transitioning => "moving",
        };
        format!(
            "{fps} FPS  tile {col},{row}  facing {:?}  {state}",
            controller.facing()
        )
    }

    pub fn draw(&self, buffer: &mut [u32], width: usize, game_state: &GameState, fps: u32) {
        let line = Self::status_line(game_state, fps);
        draw_text(buffer, width, &self.font, &line, HUD_MARGIN, HUD_MARGIN, HUD_COLOR);
    }
}

/// Alpha-blends `text` into a `0x00RRGGBB` buffer.
pub fn draw_text(
    buffer: &mut [u32],
    width: usize,
    font: &Font,
    text: &str,
    x: usize,
    y: usize,
    color: [u8; 4],
) {
    let height = buffer.len() / width.max(1);
    let scale = Scale::uniform(HUD_FONT_SIZE);
    let v_metrics = font.v_metrics(scale);
    let layout = font.layout(text, scale, point(x as f32, y as f32 + v_metrics.ascent));

    for glyph in layout {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = gx as i32 + bb.min.x;
            let py = gy as i32 + bb.min.y;
            if px < 0 || py < 0 || px as usize >= width || py as usize >= height {
                return;
            }
            let idx = py as usize * width + px as usize;
            let alpha = (coverage * color[3] as f32 / 255.0).clamp(0.0, 1.0);
            buffer[idx] = blend(buffer[idx], color, alpha);
        });
    }
}

fn blend(background: u32, color: [u8; 4], alpha: f32) -> u32 {
    let channel = |shift: u32, fg: u8| {
        let bg = ((background >> shift) & 0xFF) as f32;
        let mixed = fg as f32 * alpha + bg * (1.0 - alpha);
        (mixed.round() as u32) << shift
    };
    channel(16, color[0]) | channel(8, color[1]) | channel(0, color[2])
}
