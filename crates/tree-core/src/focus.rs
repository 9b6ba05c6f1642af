use crate::gesture::Gesture;
use rand::prelude::*;

/// Latches one photo while the hand keeps pointing.
pub struct FocusController {
    focused: Option<usize>,
    rng: StdRng,
}

impl FocusController {
    pub fn new(seed: u64) -> Self {
        Self {
            focused: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Called every frame. Pointing latches a random photo if none is held;
    /// any other gesture releases it.
    pub fn update(&mut self, gesture: Gesture, photo_count: usize) -> Option<usize> {
        if gesture != Gesture::Pointing {
            if let Some(idx) = self.focused.take() {
                log::debug!("[focus] released photo {idx}");
            }
            return None;
        }
        // The list is append-only, but never hand out a stale slot.
        if matches!(self.focused, Some(idx) if idx >= photo_count) {
            self.focused = None;
        }
        if self.focused.is_none() && photo_count > 0 {
            let idx = self.rng.gen_range(0..photo_count);
            log::debug!("[focus] latched photo {idx} of {photo_count}");
            self.focused = Some(idx);
        }
        self.focused
    }
}
