pub mod classifier;
pub mod daily;
pub mod error;
pub mod generation;
pub mod planner;
pub mod resolution;
pub mod source;
pub mod window;
