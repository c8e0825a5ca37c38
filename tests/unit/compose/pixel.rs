use super::*;

const BLACK: PremulRgba8 = [0, 0, 0, 255];

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0.0), dst);
    assert_eq!(over(dst, src, f64::NAN), dst);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src, 1.0), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn over_half_opacity_blends_toward_src() {
    let dst = [0, 0, 0, 255];
    let src = [255, 255, 255, 255];
    let out = over(dst, src, 0.5);
    assert_eq!(out, [128, 128, 128, 255]);
}

#[test]
fn mask_zero_coverage_keeps_background() {
    let bg = [10, 200, 30, 255];
    assert_eq!(mask(bg, BLACK, 0), bg);
}

#[test]
fn mask_full_coverage_is_black() {
    let bg = [10, 200, 30, 255];
    assert_eq!(mask(bg, BLACK, 255), BLACK);
}

#[test]
fn mask_partial_coverage_is_linear_blend() {
    let bg = [200, 100, 50, 255];
    let out = mask(bg, BLACK, 64);
    let expect = |c: u16| ((c * (255 - 64) + 127) / 255) as u8;
    assert_eq!(out, [expect(200), expect(100), expect(50), 255]);
}
