use super::*;

fn linear() -> FullscreenZoomConfig {
    FullscreenZoomConfig {
        trigger_progress: 0.95,
        scale: 1.1,
        duration_secs: 1.0,
        ease: Ease::LINEAR,
    }
}

#[test]
fn rests_at_one_before_trigger() {
    let mut z = FullscreenZoom::new(linear());
    z.observe(0.5);
    z.tick(1.0);
    assert_eq!(z.scale(), 1.0);
    assert!(!z.is_engaged());
}

#[test]
fn zooms_in_after_trigger_and_back_out() {
    let mut z = FullscreenZoom::new(linear());
    z.observe(0.95);
    assert!(z.is_engaged());
    z.tick(0.5);
    assert!((z.scale() - 1.05).abs() < 1e-12);
    z.tick(0.5);
    assert!((z.scale() - 1.1).abs() < 1e-12);

    z.observe(0.9);
    z.tick(1.0);
    assert_eq!(z.scale(), 1.0);
}

#[test]
fn repeated_progress_does_not_restart_tween() {
    let mut z = FullscreenZoom::new(linear());
    z.observe(0.96);
    z.tick(0.5);
    z.observe(0.97);
    z.tick(0.5);
    assert!((z.scale() - 1.1).abs() < 1e-12);
}

#[test]
fn config_validation() {
    assert!(FullscreenZoomConfig::default().validate().is_ok());
    assert!(
        FullscreenZoomConfig {
            scale: 0.5,
            ..FullscreenZoomConfig::default()
        }
        .validate()
        .is_err()
    );
    assert!(
        FullscreenZoomConfig {
            trigger_progress: 1.5,
            ..FullscreenZoomConfig::default()
        }
        .validate()
        .is_err()
    );
}
