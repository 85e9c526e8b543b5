//! Trigger input
//!
//! Everything between the operator and the dispatcher: the trigger registry
//! with its edge events, the persistent binding store, and the terminal key
//! host that drives the demo.

pub mod bindings;
pub mod keys;
pub mod triggers;

pub use bindings::{BindingsError, TriggerBindings};
pub use triggers::{TRIGGERS, TriggerError, TriggerEvent, TriggerManager, TriggerSpec};
