use crate::{
    compose::pixel::PremulRgba8,
    foundation::core::Canvas,
    foundation::error::{DoorError, DoorResult},
};

/// Output pixel buffer in premultiplied RGBA8, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositeSurface {
    canvas: Canvas,
    data: Vec<u8>,
}

impl CompositeSurface {
    /// Allocate a transparent surface.
    pub fn new(canvas: Canvas) -> DoorResult<Self> {
        canvas.validate()?;
        let len = canvas.rgba8_len()?;
        Ok(Self {
            canvas,
            data: vec![0u8; len],
        })
    }

    /// Surface dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    /// Raw premultiplied bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<PremulRgba8> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        let i = ((y as usize) * (self.canvas.width as usize) + (x as usize)) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Overwrite every pixel with `px`.
    pub fn fill(&mut self, px: PremulRgba8) {
        for d in self.data.chunks_exact_mut(4) {
            d.copy_from_slice(&px);
        }
    }

    /// Mutable rows of `width * 4` bytes.
    pub(crate) fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        let stride = (self.canvas.width as usize) * 4;
        self.data.chunks_exact_mut(stride)
    }

    /// Copy of the pixels with alpha un-premultiplied, for encoders.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u32::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    /// Encode the surface as a PNG file.
    pub fn save_png(&self, path: &std::path::Path) -> DoorResult<()> {
        image::save_buffer_with_format(
            path,
            &self.to_straight_rgba8(),
            self.canvas.width,
            self.canvas.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| DoorError::render(format!("write png '{}': {e}", path.display())))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/surface.rs"]
mod tests;
