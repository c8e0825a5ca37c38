use crate::{
    assets::decode::Bitmap,
    assets::frames::FrameSet,
    assets::video::LoopingVideo,
    foundation::core::{Canvas, Rgba8Premul},
    mapping::config::MappingConfig,
};

use super::*;

fn player(frames: usize) -> ScrollPlayer {
    let mapper = ProgressMapper::new(frames, MappingConfig::default()).unwrap();
    ScrollPlayer::new(
        mapper,
        Compositor::default(),
        FullscreenZoomConfig::default(),
    )
}

fn frame_set(n: usize) -> FrameSet {
    let slots = (0..n)
        .map(|i| Some(Bitmap::solid(4, 4, Rgba8Premul::from([i as u8, 0, 0, 255])).unwrap()))
        .collect();
    FrameSet::from_bitmaps(slots).unwrap()
}

fn video() -> LoopingVideo {
    let frames = vec![Bitmap::solid(4, 4, Rgba8Premul::from([0, 0, 200, 255])).unwrap()];
    LoopingVideo::new(frames, 30.0).unwrap()
}

fn surface() -> CompositeSurface {
    CompositeSurface::new(Canvas {
        width: 4,
        height: 4,
    })
    .unwrap()
}

#[test]
fn starts_windowed_at_first_frame() {
    let p = player(5);
    assert_eq!(p.mode(), DisplayMode::Windowed);
    assert_eq!(p.params().frame_index, 0);
    assert_eq!(p.progress(), 0.0);
}

#[test]
fn tick_draws_selected_frame() {
    let mut p = player(5);
    let frames = frame_set(5);
    let v = video();
    let mut s = surface();

    p.handle(ScrollEvent::Update(0.5));
    assert_eq!(p.render_tick(1.0 / 60.0, &frames, &v, &mut s), TickOutcome::Drawn);
    // Opaque sprite of frame 2 covers the surface.
    assert_eq!(s.pixel(0, 0), Some([2, 0, 0, 255]));
}

#[test]
fn ticks_reuse_last_parameters() {
    let mut p = player(5);
    let frames = frame_set(5);
    let v = video();
    let mut a = surface();
    let mut b = surface();

    p.set_progress(0.25);
    p.render_tick(0.016, &frames, &v, &mut a);
    p.render_tick(0.016, &frames, &v, &mut b);
    assert_eq!(a, b);
}

#[test]
fn missing_frame_is_a_silent_no_op() {
    let mut p = player(3);
    let b = Bitmap::solid(4, 4, Rgba8Premul::BLACK).unwrap();
    let frames = FrameSet::from_bitmaps(vec![Some(b.clone()), None, Some(b)]).unwrap();
    let v = video();
    let mut s = surface();
    s.fill([7, 7, 7, 7]);

    p.set_progress(0.5);
    assert_eq!(p.render_tick(0.016, &frames, &v, &mut s), TickOutcome::NotReady);
    assert!(s.data().iter().all(|b| *b == 7));

    p.set_progress(0.0);
    assert_eq!(p.render_tick(0.016, &frames, &v, &mut s), TickOutcome::Drawn);
}

#[test]
fn unready_store_and_empty_video_are_no_ops() {
    let mut p = player(2);
    let mut s = surface();

    let empty = FrameSet::from_bitmaps(vec![None, None]).unwrap();
    assert_eq!(p.render_tick(0.016, &empty, &video(), &mut s), TickOutcome::NotReady);

    let no_video = LoopingVideo::new(Vec::new(), 30.0).unwrap();
    assert_eq!(
        p.render_tick(0.016, &frame_set(2), &no_video, &mut s),
        TickOutcome::NotReady
    );
}

#[test]
fn fullscreen_threshold_skips_compositing() {
    let mut p = player(5);
    let frames = frame_set(5);
    let v = video();
    let mut s = surface();
    s.fill([7, 7, 7, 7]);

    p.handle(ScrollEvent::Update(0.98));
    assert_eq!(p.mode(), DisplayMode::Fullscreen);
    assert_eq!(
        p.render_tick(0.016, &frames, &v, &mut s),
        TickOutcome::SkippedFullscreen
    );
    assert!(s.data().iter().all(|b| *b == 7));

    p.handle(ScrollEvent::Update(0.979));
    assert_eq!(p.mode(), DisplayMode::Windowed);
    assert_eq!(p.render_tick(0.016, &frames, &v, &mut s), TickOutcome::Drawn);
}

#[test]
fn leave_and_enter_back_override_threshold() {
    let mut p = player(5);
    p.handle(ScrollEvent::Update(0.5));
    p.handle(ScrollEvent::Leave);
    assert_eq!(p.mode(), DisplayMode::Fullscreen);

    p.handle(ScrollEvent::Update(1.0));
    p.handle(ScrollEvent::EnterBack);
    assert_eq!(p.mode(), DisplayMode::Windowed);

    // Still at the boundary value: the override holds.
    p.handle(ScrollEvent::Update(1.0));
    assert_eq!(p.mode(), DisplayMode::Windowed);
}

#[test]
fn backward_scroll_matches_forward_mode_at_same_progress() {
    let mut p = player(5);
    p.handle(ScrollEvent::Update(0.99));
    let forward = p.mode();

    p.handle(ScrollEvent::Leave);
    p.handle(ScrollEvent::Update(1.0));
    p.handle(ScrollEvent::EnterBack);
    p.handle(ScrollEvent::Update(0.99));

    assert!(p.params().fullscreen);
    assert_eq!(p.mode(), forward);
    assert_eq!(p.mode(), DisplayMode::Fullscreen);
}

#[test]
fn re_entering_windowed_composites_current_progress() {
    let mut p = player(5);
    let frames = frame_set(5);
    let v = video();
    let mut s = surface();

    p.handle(ScrollEvent::Update(1.0));
    p.render_tick(0.016, &frames, &v, &mut s);
    p.handle(ScrollEvent::Update(0.25));
    assert_eq!(p.render_tick(0.016, &frames, &v, &mut s), TickOutcome::Drawn);
    assert_eq!(p.params().frame_index, 1);
    assert_eq!(s.pixel(0, 0), Some([1, 0, 0, 255]));
}

#[test]
fn fullscreen_presentation_uses_zoom() {
    let mut p = player(5);
    let v = video();
    let mut s = surface();

    p.handle(ScrollEvent::Update(1.0));
    assert!(p.zoom_scale() >= 1.0);
    p.render_tick(2.0, &frame_set(5), &v, &mut s);
    assert!((p.zoom_scale() - 1.05).abs() < 1e-12);

    assert!(p.present_fullscreen(&v, &mut s));
    assert_eq!(s.pixel(1, 1), Some([0, 0, 200, 255]));

    let none = LoopingVideo::new(Vec::new(), 30.0).unwrap();
    assert!(!p.present_fullscreen(&none, &mut s));
}

#[test]
fn non_finite_progress_maps_like_zero() {
    let mut p = player(5);
    p.set_progress(0.7);
    p.handle(ScrollEvent::Update(f64::NAN));
    assert_eq!(p.progress(), 0.0);
    assert_eq!(p.params(), &p.mapper().map(0.0));
}
