/// Detections below this confidence never qualify for selection.
pub const CONFIDENCE_FLOOR: f64 = 0.5;

/// Fixed rotation magnitude for the yaw axis.
pub const YAW_SPEED: i32 = 50;

/// Fixed climb/descend magnitude for the vertical axis.
pub const VERTICAL_SPEED: i32 = 25;

/// Fixed forward/backward magnitude for the depth axis.
pub const DEPTH_SPEED: i32 = 20;

/// Depth dead band as a fraction of the frame diagonal.
pub const DISTANCE_TOLERANCE_RATIO: f64 = 0.05;

/// Per-axis command magnitudes are clamped to ±this bound.
pub const COMMAND_BOUND: i32 = 100;

/// Dispatch cadence; the vehicle cannot absorb commands faster than this.
pub const DEFAULT_DISPATCH_INTERVAL_MS: u64 = 200;
