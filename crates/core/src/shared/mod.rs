pub mod bounding_box;
pub mod constants;
pub mod geometry;
pub mod target_slot;
