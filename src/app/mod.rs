//! Application coordination layer
//!
//! Owns the dispatcher that turns trigger edges into scene mutations.

pub mod dispatcher;

pub use dispatcher::{ActionResult, Switcher};
