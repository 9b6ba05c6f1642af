// Tests for the latest-wins detection mailbox and the hand tracker.

use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use std::thread;
use tree_core::*;

fn open_hand() -> LandmarkSet {
    synthetic_hand([true; 5], Vec2::new(0.3, 0.7))
}

#[test]
fn mailbox_keeps_only_the_newest_detection() {
    let mailbox = DetectionMailbox::new();
    assert!(mailbox.is_empty());
    for i in 0..5 {
        mailbox.post(Detection {
            timestamp: i as f64,
            hand: None,
        });
    }
    let got = mailbox.take().expect("something posted");
    assert_eq!(got.timestamp, 4.0);
    assert!(mailbox.take().is_none());
}

#[test]
fn mailbox_is_shared_across_threads() {
    let mailbox = DetectionMailbox::new();
    let writer = mailbox.clone();
    thread::spawn(move || {
        writer.post(Detection {
            timestamp: 1.5,
            hand: Some(open_hand()),
        });
    })
    .join()
    .unwrap();
    let got = mailbox.take().unwrap();
    assert_eq!(got.timestamp, 1.5);
    assert!(got.hand.is_some());
}

#[test]
fn frame_gate_drops_repeated_timestamps() {
    let mut gate = FrameGate::default();
    assert!(gate.accept(0.0));
    assert!(!gate.accept(0.0));
    assert!(gate.accept(0.033));
    assert!(!gate.accept(0.033));
    assert!(gate.accept(0.0));
}

#[test]
fn tracker_notifies_observer_once_per_new_frame() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let mut tracker = HandTracker::new(move |r| sink.borrow_mut().push(r));

    let hand = open_hand();
    let r = tracker.process(0.1, Some(&hand)).unwrap();
    assert_eq!(r.gesture, Gesture::OpenHand);
    assert!((r.reference - Vec2::new(0.3, 0.7)).length() < 1e-6);
    assert!(tracker.process(0.1, Some(&hand)).is_none());
    let r = tracker.process(0.2, None).unwrap();
    assert_eq!(r, GestureReading::default());

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].gesture, Gesture::OpenHand);
    assert_eq!(seen[1].gesture, Gesture::None);
}

#[test]
fn tracker_polls_mailbox() {
    let mailbox = DetectionMailbox::new();
    let mut tracker = HandTracker::new(|_| {});
    assert!(tracker.poll(&mailbox).is_none());
    mailbox.post(Detection {
        timestamp: 0.5,
        hand: Some(synthetic_hand([false, true, false, false, false], Vec2::splat(0.5))),
    });
    assert_eq!(tracker.poll(&mailbox).unwrap().gesture, Gesture::Pointing);
    assert!(tracker.poll(&mailbox).is_none());
}
