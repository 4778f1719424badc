pub mod config;
pub mod consts;
pub mod error;
pub mod math;
pub mod orbit;
pub mod render;
pub mod samples;
pub mod video;

pub use math::anomaly::{eccentric_from_mean, mean_from_true, true_from_eccentric};
