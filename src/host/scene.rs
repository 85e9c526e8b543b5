//! Scene-graph capability traits
//!
//! Two narrow traits isolate the switcher from whatever compositor actually
//! hosts the layers. The domain core never names a concrete host type; the
//! in-memory host in this crate implements both traits, and an adapter over
//! a real scene graph would do the same.
//!
//! Handles are transient: callers re-resolve on every action, and a handle
//! may outlive the item it pointed at. Every call must be safe on a stale
//! handle, reading as absent and mutating as a no-op.

use crate::domain::core::{Alignment, BoundsFit, Vec2};

/// Read-only lookup over the current scene
pub trait SceneLookup {
    /// Opaque reference to a located scene item
    type Handle;

    /// Exact display-name match among the scene's top-level items
    fn find_top_level(&self, name: &str) -> Option<Self::Handle>;

    /// The scene's top-level items in enumeration order
    fn top_level(&self) -> Vec<Self::Handle>;

    /// Whether the item is a container group
    fn is_group(&self, item: &Self::Handle) -> bool;

    /// Exact display-name match among a group's direct children
    ///
    /// Returns `None` when `group` is not a group or holds no match.
    fn find_child(&self, group: &Self::Handle, name: &str) -> Option<Self::Handle>;
}

/// Mutation capability for resolved items
pub trait SceneMutate: SceneLookup {
    /// Current visibility; false for a stale handle
    fn is_visible(&self, item: &Self::Handle) -> bool;

    /// Unconditionally sets visibility
    fn set_visible(&mut self, item: &Self::Handle, visible: bool);

    /// Moves the item's top-left corner to a canvas position
    fn set_position(&mut self, item: &Self::Handle, position: Vec2);

    /// Sets bounds together with the fit policy and alignment
    fn set_bounds(&mut self, item: &Self::Handle, size: Vec2, fit: BoundsFit, alignment: Alignment);
}
