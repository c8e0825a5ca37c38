use crate::{
    assets::decode::Bitmap,
    compose::pixel::{PremulRgba8, mask, over},
    compose::sample::{Sampling, sample},
    compose::surface::CompositeSurface,
    foundation::core::{Affine, Canvas, Point, Rect, Rgba8Premul},
    foundation::math::finite_clamp,
    mapping::mapper::RenderParameters,
};

/// Draws the door sprite over a masked, zoomed background frame.
///
/// Every call fully overwrites the surface and keeps no state between calls,
/// so identical inputs always give identical pixels.
#[derive(Clone, Copy, Debug)]
pub struct Compositor {
    fill: PremulRgba8,
    sampling: Sampling,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(Rgba8Premul::BLACK, Sampling::default())
    }
}

impl Compositor {
    /// Build a compositor with the given fallback fill and filtering.
    pub fn new(fill: Rgba8Premul, sampling: Sampling) -> Self {
        Self {
            fill: fill.to_array(),
            sampling,
        }
    }

    /// Fallback color shown where neither door nor video is drawn.
    pub fn fill(&self) -> Rgba8Premul {
        Rgba8Premul::from(self.fill)
    }

    /// Texture filtering mode.
    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    /// Composite one frame into `surface`.
    ///
    /// Per pixel, in order: fill, background zoomed about the center, a hole
    /// weighted by the sprite's alpha (fill outside the sprite rectangle), then
    /// the sprite source-over at `door_opacity`.
    pub fn render(
        &self,
        frame: &Bitmap,
        params: &RenderParameters,
        background: &Bitmap,
        surface: &mut CompositeSurface,
    ) {
        let canvas = surface.canvas();
        let door_scale = finite_clamp(params.door_scale, 1.0, f64::MAX, 1.0);
        let opacity = finite_clamp(params.door_opacity, 0.0, 1.0, 1.0);
        let door = door_rect(canvas, frame, door_scale);
        let bg = BackgroundMap::new(canvas, background, params.background_scale);

        for (y, row) in surface.rows_mut().enumerate() {
            let cy = y as f64 + 0.5;
            for (x, d) in row.chunks_exact_mut(4).enumerate() {
                let cx = x as f64 + 0.5;
                let px = if door.x0 <= cx && cx < door.x1 && door.y0 <= cy && cy < door.y1 {
                    let bg_px = bg.sample(background, cx, cy, self.sampling);
                    let sprite = sample(
                        frame,
                        (cx - door.x0) / door_scale,
                        (cy - door.y0) / door_scale,
                        self.sampling,
                    );
                    let under = over(self.fill, bg_px, 1.0);
                    let holed = mask(under, self.fill, sprite[3]);
                    over(holed, sprite, opacity)
                } else {
                    self.fill
                };
                d.copy_from_slice(&px);
            }
        }
    }

    /// Fill, then draw `background` stretched to the surface and zoomed by
    /// `scale` about its center.
    ///
    /// This is also how the fullscreen video is presented.
    pub fn draw_background(&self, background: &Bitmap, scale: f64, surface: &mut CompositeSurface) {
        let canvas = surface.canvas();
        let bg = BackgroundMap::new(canvas, background, scale);
        for (y, row) in surface.rows_mut().enumerate() {
            let cy = y as f64 + 0.5;
            for (x, d) in row.chunks_exact_mut(4).enumerate() {
                let cx = x as f64 + 0.5;
                let px = over(self.fill, bg.sample(background, cx, cy, self.sampling), 1.0);
                d.copy_from_slice(&px);
            }
        }
    }
}

/// Destination of the door sprite: native size times `scale`, centered.
pub fn door_rect(canvas: Canvas, frame: &Bitmap, scale: f64) -> Rect {
    let w = f64::from(frame.width()) * scale;
    let h = f64::from(frame.height()) * scale;
    let c = canvas.center();
    Rect::new(c.x - w / 2.0, c.y - h / 2.0, c.x + w / 2.0, c.y + h / 2.0)
}

/// Surface-to-texel mapping for the zoomed background.
struct BackgroundMap {
    inv: Affine,
    sx: f64,
    sy: f64,
}

impl BackgroundMap {
    fn new(canvas: Canvas, background: &Bitmap, scale: f64) -> Self {
        let scale = finite_clamp(scale, 1.0, f64::MAX, 1.0);
        let c = canvas.center().to_vec2();
        let zoom = Affine::translate(c) * Affine::scale(scale) * Affine::translate(-c);
        Self {
            inv: zoom.inverse(),
            sx: f64::from(background.width()) / f64::from(canvas.width),
            sy: f64::from(background.height()) / f64::from(canvas.height),
        }
    }

    #[inline]
    fn sample(&self, background: &Bitmap, cx: f64, cy: f64, mode: Sampling) -> PremulRgba8 {
        let p = self.inv * Point::new(cx, cy);
        sample(background, p.x * self.sx, p.y * self.sy, mode)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
