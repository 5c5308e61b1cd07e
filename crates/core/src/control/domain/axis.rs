//! Per-axis decision functions.
//!
//! Each axis is a pure function of the selected box and immutable
//! parameters; none of them touch shared state. The boundary convention
//! is half-open everywhere: a box edge exactly on a center line counts as
//! centered, and a diagonal exactly on a tolerance edge counts as in
//! band, so boundary values never produce motion.

use crate::shared::bounding_box::BoundingBox;
use crate::shared::constants::{DEPTH_SPEED, VERTICAL_SPEED, YAW_SPEED};
use crate::shared::geometry::FrameGeometry;

/// Yaw decision. Negative is counter-clockwise.
///
/// The dead zone is exactly "box straddles the vertical center line":
/// any box touching both halves is treated as centered, however far its
/// edges reach.
pub fn yaw_command(target: &BoundingBox, geometry: &FrameGeometry) -> i32 {
    let cx = geometry.center_x();
    if target.max_x() < cx {
        -YAW_SPEED
    } else if target.min_x() > cx {
        YAW_SPEED
    } else {
        0
    }
}

/// Vertical decision. Positive is up.
///
/// Pixel y grows downward, so a box entirely above the horizontal center
/// line has `max_y < cy` and the vehicle must rise toward it.
pub fn vertical_command(target: &BoundingBox, geometry: &FrameGeometry) -> i32 {
    let cy = geometry.center_y();
    if target.max_y() < cy {
        VERTICAL_SPEED
    } else if target.min_y() > cy {
        -VERTICAL_SPEED
    } else {
        0
    }
}

/// Depth decision. Positive is forward.
///
/// Inactive until a reference diagonal has been captured. A shrinking box
/// means the face receded, so close in; a growing box means it
/// approached, so back off. The tolerance band absorbs detector box-size
/// jitter.
pub fn depth_command(target: &BoundingBox, reference: Option<f64>, tolerance: f64) -> i32 {
    let Some(reference) = reference else {
        return 0;
    };
    let d = target.diagonal();
    if d < reference - tolerance {
        DEPTH_SPEED
    } else if d > reference + tolerance {
        -DEPTH_SPEED
    } else {
        0
    }
}
