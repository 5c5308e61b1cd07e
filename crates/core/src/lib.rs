pub mod control;
pub mod perception;
pub mod shared;
