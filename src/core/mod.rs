//! Core types for the gati transform library.
//!
//! - [`math`]: angle normalization and 2D rotation
//! - [`Transform2D`]: planar rigid transform (position + heading)

pub mod math;
mod transform;

pub use math::{normalize_theta, rotate};
pub use transform::Transform2D;
