use super::*;

fn ramp() -> Bitmap {
    // 2x1: opaque black, opaque white.
    Bitmap::from_premul_rgba8(2, 1, vec![0, 0, 0, 255, 255, 255, 255, 255]).unwrap()
}

#[test]
fn texel_centers_are_exact_in_both_modes() {
    let b = ramp();
    for mode in [Sampling::Nearest, Sampling::Bilinear] {
        assert_eq!(sample(&b, 0.5, 0.5, mode), [0, 0, 0, 255]);
        assert_eq!(sample(&b, 1.5, 0.5, mode), [255, 255, 255, 255]);
    }
}

#[test]
fn bilinear_midpoint_averages_neighbors() {
    let b = ramp();
    assert_eq!(sample(&b, 1.0, 0.5, Sampling::Bilinear), [128, 128, 128, 255]);
}

#[test]
fn nearest_picks_containing_texel() {
    let b = ramp();
    assert_eq!(sample(&b, 0.99, 0.5, Sampling::Nearest), [0, 0, 0, 255]);
    assert_eq!(sample(&b, 1.01, 0.5, Sampling::Nearest), [255, 255, 255, 255]);
}

#[test]
fn out_of_bounds_clamps_to_border() {
    let b = ramp();
    for mode in [Sampling::Nearest, Sampling::Bilinear] {
        assert_eq!(sample(&b, -4.0, -4.0, mode), [0, 0, 0, 255]);
        assert_eq!(sample(&b, 9.0, 9.0, mode), [255, 255, 255, 255]);
    }
}

#[test]
fn sampling_deserializes_from_snake_case() {
    let s: Sampling = serde_json::from_str("\"nearest\"").unwrap();
    assert_eq!(s, Sampling::Nearest);
    assert_eq!(Sampling::default(), Sampling::Bilinear);
}
