//! # Gati: Planar Rigid-Transform Algebra
//!
//! SE(2) poses for motion planning: compose, invert, and re-express
//! positions and headings in different reference frames.
//!
//! ## Quick Start
//!
//! ```rust
//! use gati::{Transform2D, ToleranceConfig};
//! use gati::core::math::deg_to_rad;
//!
//! let robot = Transform2D::new(2.0, 2.0, deg_to_rad(45.0));
//! let goal = Transform2D::new(5.0, 5.0, 0.0);
//!
//! // Goal in the robot's frame: straight ahead, 3√2 away, 45° to the right.
//! let local = robot.inverse().compose(&goal);
//! let expected = Transform2D::new(3.0 * 2f64.sqrt(), 0.0, deg_to_rad(-45.0));
//! assert!(local.approx_eq(&expected, &ToleranceConfig::default()));
//! println!("Goal in robot frame: {}", local);
//! ```
//!
//! ## Coordinate Frame
//!
//! - **X-forward**, **Y-left**
//! - **Rotation**: counter-clockwise positive, radians
//! - **Canonical heading range**: [-π, π)
//!
//! ## Heading Normalization
//!
//! | Operation | Heading result |
//! |-----------|----------------|
//! | `Transform2D::new` | stored as given |
//! | `compose` / `compose_in_place` | normalized to [-π, π) |
//! | `inverse` | negated, not normalized |
//! | `inverse_normalized` | negated, normalized |
//!
//! ## Architecture
//!
//! - [`core`]: angle normalizer, rotation primitive, [`Transform2D`]
//! - [`config`]: comparison tolerances loaded from TOML
//! - [`error`]: error type

pub mod config;
pub mod core;
pub mod error;

pub use config::ToleranceConfig;
pub use core::Transform2D;
pub use core::math::{normalize_theta, rotate};
pub use error::{Error, Result};
