use crate::{assets::decode::Bitmap, compose::pixel::PremulRgba8};

/// Texture filtering used when a bitmap is drawn at a non-native size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sampling {
    /// Pick the texel containing the sample point.
    Nearest,
    /// Blend the four texels around the sample point.
    #[default]
    Bilinear,
}

/// Sample `bmp` at continuous texel coordinates `(u, v)`.
///
/// Texel `i` covers `[i, i + 1)`, so `(x + 0.5, y + 0.5)` lands exactly on a
/// texel center and returns it unchanged under both modes. Coordinates past
/// the edges clamp to the border texels.
pub fn sample(bmp: &Bitmap, u: f64, v: f64, mode: Sampling) -> PremulRgba8 {
    let max_x = bmp.width() - 1;
    let max_y = bmp.height() - 1;
    match mode {
        Sampling::Nearest => {
            let x = clamp_texel(u.floor(), max_x);
            let y = clamp_texel(v.floor(), max_y);
            bmp.px(x, y)
        }
        Sampling::Bilinear => {
            let fx = u - 0.5;
            let fy = v - 0.5;
            let bx = fx.floor();
            let by = fy.floor();
            let tx = (fx - bx) as f32;
            let ty = (fy - by) as f32;

            let x0 = clamp_texel(bx, max_x);
            let x1 = clamp_texel(bx + 1.0, max_x);
            let y0 = clamp_texel(by, max_y);
            let y1 = clamp_texel(by + 1.0, max_y);

            let p00 = bmp.px(x0, y0);
            let p10 = bmp.px(x1, y0);
            let p01 = bmp.px(x0, y1);
            let p11 = bmp.px(x1, y1);

            let w00 = (1.0 - tx) * (1.0 - ty);
            let w10 = tx * (1.0 - ty);
            let w01 = (1.0 - tx) * ty;
            let w11 = tx * ty;

            let mut out = [0u8; 4];
            for i in 0..4 {
                let c = f32::from(p00[i]) * w00
                    + f32::from(p10[i]) * w10
                    + f32::from(p01[i]) * w01
                    + f32::from(p11[i]) * w11;
                out[i] = c.round().clamp(0.0, 255.0) as u8;
            }
            // Premultiplied invariant: color never exceeds alpha.
            for i in 0..3 {
                out[i] = out[i].min(out[3]);
            }
            out
        }
    }
}

fn clamp_texel(v: f64, max: u32) -> u32 {
    if v.is_nan() || v <= 0.0 {
        0
    } else {
        (v as u64).min(u64::from(max)) as u32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/sample.rs"]
mod tests;
