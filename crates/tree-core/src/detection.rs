//! Plumbing between an asynchronous landmark detector and the frame loop.
//!
//! The detector runs at its own cadence and posts into a single-slot mailbox;
//! the frame loop takes whatever is newest. Older detections are overwritten,
//! never queued.

use crate::gesture::{classify, Gesture, GestureReading};
use crate::landmarks::LandmarkSet;
use std::sync::{Arc, Mutex, MutexGuard};

/// One completed detection for a video frame.
#[derive(Clone, Debug)]
pub struct Detection {
    /// Video frame timestamp in seconds.
    pub timestamp: f64,
    pub hand: Option<LandmarkSet>,
}

#[derive(Clone, Default)]
pub struct DetectionMailbox {
    slot: Arc<Mutex<Option<Detection>>>,
}

impl DetectionMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Detection>> {
        // A panicking writer cannot leave the slot half-written; keep going.
        match self.slot.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Replace whatever is waiting with `detection`.
    pub fn post(&self, detection: Detection) {
        *self.lock() = Some(detection);
    }

    pub fn take(&self) -> Option<Detection> {
        self.lock().take()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_none()
    }
}

/// Drops repeated video frames by timestamp.
#[derive(Clone, Debug, Default)]
pub struct FrameGate {
    last_timestamp: Option<f64>,
}

impl FrameGate {
    pub fn accept(&mut self, timestamp: f64) -> bool {
        if self.last_timestamp == Some(timestamp) {
            return false;
        }
        self.last_timestamp = Some(timestamp);
        true
    }
}

/// Classifies each new frame and reports the reading to an observer.
pub struct HandTracker {
    gate: FrameGate,
    observer: Box<dyn FnMut(GestureReading)>,
    last_gesture: Gesture,
}

impl HandTracker {
    pub fn new(observer: impl FnMut(GestureReading) + 'static) -> Self {
        Self {
            gate: FrameGate::default(),
            observer: Box::new(observer),
            last_gesture: Gesture::None,
        }
    }

    /// Returns `None` when `timestamp` repeats the previous frame.
    pub fn process(
        &mut self,
        timestamp: f64,
        hand: Option<&LandmarkSet>,
    ) -> Option<GestureReading> {
        if !self.gate.accept(timestamp) {
            return None;
        }
        let reading = classify(hand);
        log::trace!(
            "[tracker] t={:.3} gesture={} ref=({:.3},{:.3})",
            timestamp,
            reading.gesture.label(),
            reading.reference.x,
            reading.reference.y
        );
        if reading.gesture != self.last_gesture {
            log::debug!(
                "[tracker] gesture {} -> {}",
                self.last_gesture.label(),
                reading.gesture.label()
            );
            self.last_gesture = reading.gesture;
        }
        (self.observer)(reading);
        Some(reading)
    }

    /// Drain the mailbox (if anything is waiting) through `process`.
    pub fn poll(&mut self, mailbox: &DetectionMailbox) -> Option<GestureReading> {
        let detection = mailbox.take()?;
        self.process(detection.timestamp, detection.hand.as_ref())
    }
}
