use crate::foundation::math::{mul_div255_u8, unit_to_u8};

/// One premultiplied RGBA8 pixel in buffer order.
pub type PremulRgba8 = [u8; 4];

/// Source-over with a global `opacity` multiplier on `src`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f64) -> PremulRgba8 {
    if opacity.is_nan() || opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = unit_to_u8(opacity);
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Cover `dst` with `color` weighted by `coverage`.
///
/// With an opaque `color` this is `dst * (1 - a) + color * a`, the "hole"
/// that hides the background wherever the door sprite is opaque.
pub fn mask(dst: PremulRgba8, color: PremulRgba8, coverage: u8) -> PremulRgba8 {
    if coverage == 0 {
        return dst;
    }
    let cov = u16::from(coverage);
    let src = [
        mul_div255_u8(u16::from(color[0]), cov),
        mul_div255_u8(u16::from(color[1]), cov),
        mul_div255_u8(u16::from(color[2]), cov),
        mul_div255_u8(u16::from(color[3]), cov),
    ];
    over(dst, src, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/pixel.rs"]
mod tests;
