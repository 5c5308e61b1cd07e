use std::cmp::Ordering;
use std::sync::Arc;

use crate::perception::domain::detection::Detection;
use crate::shared::geometry::FrameGeometry;
use crate::shared::target_slot::TargetSlot;

/// Per-frame detection selector.
///
/// Reduces a frame's detections to the single most confident qualifying
/// box, repairs its geometry, and publishes it to the shared slot. The
/// slot is overwritten on every frame, including with `None`, so the
/// dispatcher can never act on a box from an earlier frame.
pub struct Selector {
    geometry: FrameGeometry,
    target: Arc<TargetSlot>,
}

impl Selector {
    pub fn new(geometry: FrameGeometry, target: Arc<TargetSlot>) -> Self {
        Self { geometry, target }
    }

    /// Ingests one frame's detections.
    pub fn observe_frame(&self, detections: &[Detection]) {
        let best = best_qualifying(detections)
            .map(|d| d.bounding_box.clamped(&self.geometry));
        if best.is_none() && !detections.is_empty() {
            log::debug!("no detection cleared the confidence floor this frame");
        }
        self.target.publish(best);
    }
}

/// The most confident detection at or above the confidence floor, if any.
pub fn best_qualifying(detections: &[Detection]) -> Option<&Detection> {
    detections
        .iter()
        .filter(|d| d.qualifies())
        .max_by(|a, b| {
            a.confidence
                .partial_cmp(&b.confidence)
                .unwrap_or(Ordering::Equal)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::bounding_box::BoundingBox;
    use approx::assert_relative_eq;

    fn detection(x1: f64, y1: f64, x2: f64, y2: f64, confidence: f64) -> Detection {
        Detection::new(BoundingBox::new(x1, y1, x2, y2), confidence)
    }

    fn selector() -> (Selector, Arc<TargetSlot>) {
        let slot = Arc::new(TargetSlot::new());
        (
            Selector::new(FrameGeometry::new(800, 600), slot.clone()),
            slot,
        )
    }

    // ── Pure selection ───────────────────────────────────────────────

    #[test]
    fn test_best_qualifying_empty_list() {
        assert_eq!(best_qualifying(&[]), None);
    }

    #[test]
    fn test_best_qualifying_filters_below_floor() {
        let detections = vec![detection(0.0, 0.0, 10.0, 10.0, 0.4)];
        assert_eq!(best_qualifying(&detections), None);
    }

    #[test]
    fn test_best_qualifying_picks_highest_confidence() {
        let detections = vec![
            detection(0.0, 0.0, 10.0, 10.0, 0.6),
            detection(20.0, 20.0, 30.0, 30.0, 0.9),
            detection(40.0, 40.0, 50.0, 50.0, 0.7),
        ];
        let best = best_qualifying(&detections).unwrap();
        assert_relative_eq!(best.confidence, 0.9);
    }

    #[test]
    fn test_best_qualifying_ignores_nan_confidence() {
        let detections = vec![
            detection(0.0, 0.0, 10.0, 10.0, f64::NAN),
            detection(20.0, 20.0, 30.0, 30.0, 0.6),
        ];
        let best = best_qualifying(&detections).unwrap();
        assert_relative_eq!(best.confidence, 0.6);
    }

    // ── Frame observation and publication ────────────────────────────

    #[test]
    fn test_observe_publishes_winning_box() {
        let (selector, slot) = selector();
        selector.observe_frame(&[detection(100.0, 100.0, 300.0, 300.0, 0.9)]);
        let target = slot.snapshot().unwrap();
        assert_relative_eq!(target.min_x(), 100.0);
        assert_relative_eq!(target.max_x(), 300.0);
    }

    #[test]
    fn test_observe_empty_frame_clears_stale_box() {
        let (selector, slot) = selector();
        selector.observe_frame(&[detection(100.0, 100.0, 300.0, 300.0, 0.9)]);
        selector.observe_frame(&[]);
        assert_eq!(slot.snapshot(), None);
    }

    #[test]
    fn test_observe_all_below_floor_clears_stale_box() {
        let (selector, slot) = selector();
        selector.observe_frame(&[detection(100.0, 100.0, 300.0, 300.0, 0.9)]);
        selector.observe_frame(&[detection(100.0, 100.0, 300.0, 300.0, 0.3)]);
        assert_eq!(slot.snapshot(), None);
    }

    #[test]
    fn test_observe_clamps_out_of_frame_box() {
        let (selector, slot) = selector();
        selector.observe_frame(&[detection(-50.0, 100.0, 900.0, 300.0, 0.8)]);
        let target = slot.snapshot().unwrap();
        assert_relative_eq!(target.min_x(), 0.0);
        assert_relative_eq!(target.max_x(), 799.0);
    }

    #[test]
    fn test_observe_repairs_inverted_box() {
        let (selector, slot) = selector();
        selector.observe_frame(&[detection(300.0, 300.0, 100.0, 100.0, 0.8)]);
        let target = slot.snapshot().unwrap();
        assert!(target.min_x() <= target.max_x());
        assert!(target.min_y() <= target.max_y());
        assert_relative_eq!(target.min_x(), 100.0);
    }

    #[test]
    fn test_observe_overwrites_with_new_winner() {
        let (selector, slot) = selector();
        selector.observe_frame(&[detection(100.0, 100.0, 300.0, 300.0, 0.9)]);
        selector.observe_frame(&[detection(400.0, 400.0, 500.0, 500.0, 0.7)]);
        let target = slot.snapshot().unwrap();
        assert_relative_eq!(target.min_x(), 400.0);
    }
}
