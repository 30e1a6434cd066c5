use crate::consts::{
    MINIMAP_BACKGROUND_COLOR, MINIMAP_BORDER_COLOR, MINIMAP_GRID_COLOR, MINIMAP_MARGIN,
    MINIMAP_OPEN_SPACE_COLOR, MINIMAP_PLAYER_COLOR, MINIMAP_PLAYER_DOT_RADIUS,
    MINIMAP_TARGET_COLOR, MINIMAP_TILE_PIXELS, MINIMAP_WALL_COLOR, TILE_SIZE,
};
use crate::gamestate::GameState;
use crate::projector::Canvas;
use crate::renderer::Renderer;

impl Renderer {
    /// Draw a filled circle
    fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, color: u32) {
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    self.fill_rect(cx + dx, cy + dy, 1, 1, color);
                }
            }
        }
    }

    /// Bresenham line, clipped per pixel.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x1 > x0 { 1 } else { -1 };
        let sy = if y1 > y0 { 1 } else { -1 };
        let mut err = dx - dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.fill_rect(x, y, 1, 1, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = err * 2;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn draw_outline(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32) {
        self.draw_line(x, y, x + w, y, color);
        self.draw_line(x + w, y, x + w, y + h, color);
        self.draw_line(x + w, y + h, x, y + h, color);
        self.draw_line(x, y + h, x, y, color);
    }

    /// Pixels per map tile, shrunk so the minimap never takes more than a
    /// third of the screen width.
    fn minimap_tile_pixels(&self, game_state: &GameState) -> i32 {
        let widest = game_state.world.width().max(game_state.world.height()).max(1);
        let budget = self.width() / 3;
        MINIMAP_TILE_PIXELS.min(budget / widest).max(1) as i32
    }

    /// Render the minimap in the top-right corner
    pub fn render_minimap(&mut self, game_state: &GameState) {
        let world = &game_state.world;
        let tile_px = self.minimap_tile_pixels(game_state);
        let map_w = world.width() as i32 * tile_px;
        let map_h = world.height() as i32 * tile_px;
        let start_x = self.width() as i32 - map_w - MINIMAP_MARGIN as i32;
        let start_y = MINIMAP_MARGIN as i32;

        self.fill_rect(start_x, start_y, map_w, map_h, MINIMAP_BACKGROUND_COLOR);

        for row in 0..world.height() as i32 {
            for col in 0..world.width() as i32 {
                let px = start_x + col * tile_px;
                let py = start_y + row * tile_px;
                let color = if world.is_wall(col, row) {
                    MINIMAP_WALL_COLOR
                } else {
                    MINIMAP_OPEN_SPACE_COLOR
                };
                self.fill_rect(px, py, tile_px, tile_px, color);
                self.draw_line(px, py, px + tile_px, py, MINIMAP_GRID_COLOR);
                self.draw_line(px, py, px, py + tile_px, MINIMAP_GRID_COLOR);
            }
        }

        let controller = &game_state.controller;
        let (target_col, target_row) = controller.target().tile();
        self.draw_outline(
            start_x + target_col * tile_px,
            start_y + target_row * tile_px,
            tile_px,
            tile_px,
            MINIMAP_TARGET_COLOR,
        );

        let scale = tile_px as f32 / TILE_SIZE;
        let eye = *controller.display();
        let cx = start_x + (eye.position.x * scale).round() as i32;
        let cy = start_y + (eye.position.y * scale).round() as i32;
        let (sin, cos) = eye.angle.sin_cos();
        let reach = tile_px as f32;
        self.draw_line(
            cx,
            cy,
            cx + (cos * reach).round() as i32,
            cy + (sin * reach).round() as i32,
            MINIMAP_PLAYER_COLOR,
        );
        self.draw_circle(cx, cy, MINIMAP_PLAYER_DOT_RADIUS as i32, MINIMAP_PLAYER_COLOR);

        self.draw_outline(start_x, start_y, map_w, map_h, MINIMAP_BORDER_COLOR);
    }
}
