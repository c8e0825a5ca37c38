use std::{cell::RefCell, rc::Rc};

use super::*;

fn recording(tl: &mut ScrollTimeline) -> (Subscription, Rc<RefCell<Vec<ScrollEvent>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let sub = tl.subscribe(Box::new(move |ev| sink.borrow_mut().push(ev)));
    (sub, log)
}

fn direct(start: f64, end: f64) -> ScrollTimeline {
    ScrollTimeline::new(ScrollConfig {
        start,
        end,
        scrub_secs: 0.0,
    })
    .unwrap()
}

#[test]
fn config_validation() {
    assert!(
        ScrollConfig {
            start: 10.0,
            end: 10.0,
            scrub_secs: 0.0
        }
        .validate()
        .is_err()
    );
    assert!(
        ScrollConfig {
            scrub_secs: -1.0,
            ..ScrollConfig::default()
        }
        .validate()
        .is_err()
    );
    assert!(ScrollConfig::default().validate().is_ok());
}

#[test]
fn direct_tracking_emits_updates() {
    let mut tl = direct(100.0, 300.0);
    let (_, log) = recording(&mut tl);

    tl.set_scroll(200.0);
    tl.set_scroll(200.0);
    tl.set_scroll(300.0);

    assert_eq!(
        *log.borrow(),
        vec![ScrollEvent::Update(0.5), ScrollEvent::Update(1.0)]
    );
    assert_eq!(tl.progress(), 1.0);
}

#[test]
fn crossing_the_end_fires_leave_then_enter_back() {
    let mut tl = direct(0.0, 100.0);
    let (_, log) = recording(&mut tl);

    tl.set_scroll(100.0);
    tl.set_scroll(150.0);
    tl.set_scroll(90.0);

    assert_eq!(
        *log.borrow(),
        vec![
            ScrollEvent::Update(1.0),
            ScrollEvent::Leave,
            ScrollEvent::EnterBack,
            ScrollEvent::Update(0.9),
        ]
    );
}

#[test]
fn crossing_the_start_fires_leave_back_then_enter() {
    let mut tl = direct(50.0, 100.0);
    let (_, log) = recording(&mut tl);

    tl.set_scroll(10.0);
    tl.set_scroll(60.0);

    assert_eq!(
        *log.borrow(),
        vec![
            ScrollEvent::LeaveBack,
            ScrollEvent::Enter,
            ScrollEvent::Update(0.2),
        ]
    );
}

#[test]
fn jumping_over_the_region_fires_both_boundaries() {
    let mut tl = direct(50.0, 100.0);
    let (_, log) = recording(&mut tl);

    tl.set_scroll(0.0);
    log.borrow_mut().clear();
    tl.set_scroll(500.0);
    assert_eq!(
        *log.borrow(),
        vec![
            ScrollEvent::Enter,
            ScrollEvent::Leave,
            ScrollEvent::Update(1.0)
        ]
    );
}

#[test]
fn scrub_lags_then_settles() {
    let mut tl = ScrollTimeline::new(ScrollConfig {
        start: 0.0,
        end: 1.0,
        scrub_secs: 1.0,
    })
    .unwrap();
    let (_, log) = recording(&mut tl);

    tl.set_scroll(1.0);
    assert!(log.borrow().is_empty());
    assert!(!tl.is_settled());

    tl.tick(0.5);
    let mid = tl.progress();
    assert!(mid > 0.0 && mid < 1.0);

    tl.tick(0.5);
    assert!(tl.is_settled());
    assert_eq!(tl.progress(), 1.0);
    assert_eq!(log.borrow().last(), Some(&ScrollEvent::Update(1.0)));

    let updates = log.borrow().len();
    tl.tick(0.5);
    assert_eq!(log.borrow().len(), updates);
}

#[test]
fn unsubscribe_stops_delivery() {
    let mut tl = direct(0.0, 1.0);
    let (sub, log) = recording(&mut tl);
    assert!(tl.unsubscribe(sub));
    assert!(!tl.unsubscribe(sub));
    tl.set_scroll(0.5);
    assert!(log.borrow().is_empty());
}

#[test]
fn non_finite_offsets_are_ignored() {
    let mut tl = direct(0.0, 1.0);
    tl.set_scroll(0.25);
    tl.set_scroll(f64::NAN);
    assert_eq!(tl.scroll(), 0.25);
    assert_eq!(tl.raw_progress(), 0.25);
}
