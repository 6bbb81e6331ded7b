//! Intermediate representation for roof diagrams
//!
//! This module provides the data structures shared by the rest of the crate:
//! - **coords**: grid points, point colors and undirected edges
//! - **symbols**: numeric point ids and the point/id bijection
//! - **facts**: relational facts and the three-part fact base
//!
//! # Example
//!
//! ```rust
//! use roofworld_core::ir::*;
//!
//! let ids = IdTable::build([Point::new(0, 0), Point::new(25, 0)], 0).unwrap();
//! let a = ids.id_of(&Point::new(0, 0)).unwrap();
//! let b = ids.id_of(&Point::new(25, 0)).unwrap();
//!
//! let fact = Fact::Connected(a, b);
//! assert_eq!(fact.to_string(), "connected(v0,v1).");
//! ```

mod coords;
mod facts;
mod symbols;

pub use coords::{ops, Color, Edge, Point};
pub use facts::{AngleCategory, Fact, FactBase, FactType};
pub use symbols::{IdTable, PointId};
