pub mod domain;
pub mod follower;
pub mod infrastructure;
