use crate::shared::bounding_box::BoundingBox;
use crate::shared::constants::CONFIDENCE_FLOOR;

/// One detector output for one frame: a face box and its confidence score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Detection {
    pub bounding_box: BoundingBox,
    pub confidence: f64,
}

impl Detection {
    pub fn new(bounding_box: BoundingBox, confidence: f64) -> Self {
        Self {
            bounding_box,
            confidence,
        }
    }

    /// Whether this detection clears the confidence floor.
    ///
    /// NaN confidence fails the comparison and never qualifies.
    pub fn qualifies(&self) -> bool {
        self.confidence >= CONFIDENCE_FLOOR
    }
}
