//! Geometry module - pure angle computations
//!
//! No graph or fact logic here, just measuring and categorizing angles.

pub mod angle;

pub use angle::*;
