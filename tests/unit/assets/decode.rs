use std::io::Cursor;

use super::*;

#[test]
fn decode_image_png_dimensions_and_premul() {
    let src_rgba = vec![100u8, 50u8, 200u8, 128u8];
    let img = image::RgbaImage::from_raw(1, 1, src_rgba).unwrap();

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let bmp = decode_image(&buf).unwrap();
    assert_eq!(bmp.width(), 1);
    assert_eq!(bmp.height(), 1);
    assert_eq!(
        bmp.data(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_garbage_is_an_error() {
    assert!(decode_image(b"not an image").is_err());
}

#[test]
fn load_missing_file_is_asset_error() {
    let err = load_image(Path::new("/definitely/not/here.png")).unwrap_err();
    assert!(matches!(err, DoorError::Asset(_)));
}

#[test]
fn from_premul_checks_buffer_length() {
    assert!(Bitmap::from_premul_rgba8(2, 2, vec![0; 15]).is_err());
    assert!(Bitmap::from_premul_rgba8(0, 2, vec![]).is_err());
    let b = Bitmap::from_premul_rgba8(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    assert_eq!(b.px(1, 0), [5, 6, 7, 8]);
}

#[test]
fn transparent_straight_pixels_zero_their_color() {
    let b = Bitmap::from_straight_rgba8(1, 1, vec![200, 100, 50, 0]).unwrap();
    assert_eq!(b.data(), &[0, 0, 0, 0]);
}

#[test]
fn solid_fills_every_pixel() {
    let b = Bitmap::solid(3, 2, Rgba8Premul::BLACK).unwrap();
    assert!(b.data().chunks_exact(4).all(|p| p == [0, 0, 0, 255]));
}
