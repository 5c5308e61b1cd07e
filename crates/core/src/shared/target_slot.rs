use std::sync::Mutex;

use crate::shared::bounding_box::BoundingBox;

/// The "current best box" shared between the perception and dispatch
/// activities.
///
/// Perception overwrites the slot once per frame (with `None` when no
/// detection qualified, so stale boxes die with their frame); the
/// dispatcher takes an atomic snapshot on its own cadence. The lock is
/// internal; callers only see the get/set pair.
#[derive(Debug, Default)]
pub struct TargetSlot {
    current: Mutex<Option<BoundingBox>>,
}

impl TargetSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the slot contents, `Some` or `None`, unconditionally.
    pub fn publish(&self, target: Option<BoundingBox>) {
        *self.current.lock().expect("target slot lock poisoned") = target;
    }

    /// Returns the most recently published target, if any.
    pub fn snapshot(&self) -> Option<BoundingBox> {
        *self.current.lock().expect("target slot lock poisoned")
    }
}
