use crate::caster::{RayHit, Side};
use crate::consts::{
    FOV, MIN_PROJECTION_DISTANCE, RAY_COUNT, SCREEN_HEIGHT, SCREEN_WIDTH, STRIPE_DARK,
    STRIPE_LIGHT, STRIPE_LIGHT_SHADED, TEXTURE_HEIGHT,
};

/// Anything that can fill an axis-aligned rectangle. Implementations clip.
pub trait Canvas {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
    pub ray_count: usize,
    pub fov: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            ray_count: RAY_COUNT,
            fov: FOV,
        }
    }
}

impl Viewport {
    /// Screen pixels covered by one ray.
    pub fn column_width(&self) -> f32 {
        self.width as f32 / self.ray_count as f32
    }
}

/// Vertical slice of wall for one ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub column: usize,
    pub x: i32,
    pub width: i32,
    pub top: f32,
    pub bottom: f32,
    /// Half of the band's pixel height.
    pub wall_height: f32,
    /// Logical texels per screen pixel.
    pub texel_step: f32,
    pub side: Side,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stripe {
    pub y: i32,
    pub height: i32,
    pub color: u32,
}

pub fn project(
    hit: &RayHit,
    view_angle: f32,
    ray_angle: f32,
    column: usize,
    viewport: &Viewport,
) -> Band {
    let corrected = (hit.distance * (view_angle - ray_angle).cos()).max(MIN_PROJECTION_DISTANCE);
    let wall_height = viewport.height as f32 / (corrected * 2.0 * (viewport.fov / 2.0).tan());
    let horizon = (viewport.height / 2) as f32;
    let thickness = viewport.column_width();

    Band {
        column,
        // One extra pixel so neighbouring columns never leave a seam.
        x: (column as f32 * thickness) as i32,
        width: thickness as i32 + 1,
        top: horizon - wall_height,
        bottom: horizon + wall_height,
        wall_height,
        texel_step: TEXTURE_HEIGHT as f32 / (2.0 * wall_height),
        side: hit.side,
    }
}

impl Band {
    /// Alternating dark/light stripes, `TEXTURE_HEIGHT` of them over the full
    /// band, clipped to `[0, screen_height)`.
    pub fn stripes(&self, screen_height: usize, shade_sides: bool) -> impl Iterator<Item = Stripe> {
        let stripe_pixels = 1.0 / self.texel_step;
        let top = self.top;
        let screen = screen_height as f32;
        let light = if shade_sides && self.side == Side::X {
            STRIPE_LIGHT_SHADED
        } else {
            STRIPE_LIGHT
        };

        (0..TEXTURE_HEIGHT).filter_map(move |index| {
            let start = (top + index as f32 * stripe_pixels).max(0.0).round();
            let end = (top + (index + 1) as f32 * stripe_pixels).min(screen).round();
            (end > start).then(|| Stripe {
                y: start as i32,
                height: (end - start) as i32,
                color: if index % 2 == 0 { STRIPE_DARK } else { light },
            })
        })
    }
}

pub fn draw_band(canvas: &mut impl Canvas, band: &Band, viewport: &Viewport, shade_sides: bool) {
    for stripe in band.stripes(viewport.height, shade_sides) {
        canvas.fill_rect(band.x, stripe.y, band.width, stripe.height, stripe.color);
    }
}

/// Projects and draws one ray. A miss draws nothing and returns `None`.
pub fn project_and_draw(
    canvas: &mut impl Canvas,
    hit: Option<&RayHit>,
    view_angle: f32,
    ray_angle: f32,
    column: usize,
    viewport: &Viewport,
    shade_sides: bool,
) -> Option<Band> {
    let band = project(hit?, view_angle, ray_angle, column, viewport);
    draw_band(canvas, &band, viewport, shade_sides);
    Some(band)
}
