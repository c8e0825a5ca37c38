use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::{
    foundation::core::Rgba8Premul,
    foundation::error::{DoorError, DoorResult},
};

/// Immutable premultiplied RGBA8 bitmap, row-major and tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    rgba8_premul: Arc<Vec<u8>>,
}

impl Bitmap {
    /// Wrap already premultiplied pixels, checking the buffer length.
    pub fn from_premul_rgba8(width: u32, height: u32, data: Vec<u8>) -> DoorResult<Self> {
        if width == 0 || height == 0 {
            return Err(DoorError::validation("bitmap width/height must be > 0"));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| DoorError::validation("bitmap size overflow"))?;
        if data.len() != expected {
            return Err(DoorError::validation(format!(
                "bitmap buffer has {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(data),
        })
    }

    /// Premultiply straight-alpha pixels and wrap them.
    pub fn from_straight_rgba8(width: u32, height: u32, mut data: Vec<u8>) -> DoorResult<Self> {
        premultiply_rgba8_in_place(&mut data);
        Self::from_premul_rgba8(width, height, data)
    }

    /// Bitmap filled with a single color.
    pub fn solid(width: u32, height: u32, color: Rgba8Premul) -> DoorResult<Self> {
        let px = color.to_array();
        let n = (width as usize).saturating_mul(height as usize);
        Self::from_premul_rgba8(width, height, px.repeat(n))
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel bytes in row-major premultiplied RGBA8.
    pub fn data(&self) -> &[u8] {
        self.rgba8_premul.as_slice()
    }

    /// Pixel at `(x, y)`; callers guarantee the coordinates are in range.
    #[inline]
    pub(crate) fn px(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let d = &self.rgba8_premul;
        [d[i], d[i + 1], d[i + 2], d[i + 3]]
    }
}

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> DoorResult<Bitmap> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Bitmap::from_straight_rgba8(width, height, rgba.into_raw())
}

/// Read and decode an image file.
pub fn load_image(path: &Path) -> DoorResult<Bitmap> {
    let bytes = std::fs::read(path)
        .map_err(|e| DoorError::asset(format!("read image '{}': {e}", path.display())))?;
    decode_image(&bytes)
        .map_err(|e| DoorError::asset(format!("decode image '{}': {e}", path.display())))
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
