//! Scene-graph host seam
//!
//! This module encapsulates everything that touches a scene graph and
//! presents a clean interface to the rest of the application: the capability
//! traits, layer resolution, geometry application and the in-memory host
//! used by the demo binary and the tests.

pub mod geometry;
pub mod memory;
pub mod resolver;
pub mod scene;
