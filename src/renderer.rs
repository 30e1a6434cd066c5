use crate::consts::{BACKGROUND_COLOR, FLOOR_COLOR};
use crate::gamestate::GameState;
use crate::projector::{Canvas, Viewport, project_and_draw};
use crate::text::Hud;

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub shade_sides: bool,
    pub show_minimap: bool,
    pub show_hud: bool,
}

/// Software framebuffer of `0x00RRGGBB` pixels.
pub struct Renderer {
    pub buffer: Vec<u32>,
    pub viewport: Viewport,
    pub options: RenderOptions,
    hud: Option<Hud>,
}

impl Renderer {
    pub fn new(viewport: Viewport, options: RenderOptions, hud: Option<Hud>) -> Self {
        Renderer {
            buffer: vec![BACKGROUND_COLOR; viewport.width * viewport.height],
            viewport,
            options,
            hud,
        }
    }

    pub fn width(&self) -> usize {
        self.viewport.width
    }

    pub fn height(&self) -> usize {
        self.viewport.height
    }

    pub fn has_hud(&self) -> bool {
        self.hud.is_some()
    }

    pub fn render(&mut self, game_state: &GameState, fps: u32) {
        let (width, height) = (self.width() as i32, self.height() as i32);
        self.buffer.fill(BACKGROUND_COLOR);
        self.fill_rect(0, height / 2, width, height / 2, FLOOR_COLOR);

        let viewport = self.viewport;
        let shade_sides = self.options.shade_sides;
        let view_angle = game_state.controller.display().angle;
        for ray in game_state.cast_view(&viewport) {
            project_and_draw(
                self,
                ray.hit.as_ref(),
                view_angle,
                ray.angle,
                ray.column,
                &viewport,
                shade_sides,
            );
        }

        if self.options.show_minimap {
            self.render_minimap(game_state);
        }

        if self.options.show_hud {
            if let Some(hud) = self.hud.take() {
                hud.draw(&mut self.buffer, self.viewport.width, game_state, fps);
                self.hud = Some(hud);
            }
        }
    }

    /// Copies the framebuffer into an RGBA8 frame such as `Pixels::frame_mut`.
    pub fn draw_to_buffer(&self, frame: &mut [u8]) {
        for (pixel, &color) in frame.chunks_exact_mut(4).zip(&self.buffer) {
            let rgba = [(color >> 16) as u8, (color >> 8) as u8, color as u8, 0xFF];
            pixel.copy_from_slice(&rgba);
        }
    }
}

impl Canvas for Renderer {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        let screen_w = self.width() as i32;
        let screen_h = self.height() as i32;
        let x0 = x.clamp(0, screen_w);
        let x1 = x.saturating_add(width).clamp(0, screen_w);
        let y0 = y.clamp(0, screen_h);
        let y1 = y.saturating_add(height).clamp(0, screen_h);
        if x1 <= x0 {
            return;
        }

        for py in y0..y1 {
            let row = py as usize * self.viewport.width;
            self.buffer[row + x0 as usize..row + x1 as usize].fill(color);
        }
    }
}
