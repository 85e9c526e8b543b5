//! Layer resolution
//!
//! Maps a configured display name to a scene-item handle. The search checks
//! the scene's top level first and then exactly one level inside container
//! groups. Deeper nesting is out of reach on purpose: an item two group
//! levels down stays unresolved rather than the search becoming unbounded.

use tracing::trace;

use crate::host::scene::SceneLookup;

/// Resolves `name` at the top level or one group level down
///
/// The first hit wins, with groups scanned in enumeration order. Returns
/// `None` instead of erroring when the name is absent; callers treat that as
/// a per-layer skip, not a failure of the whole action.
pub fn resolve_layer<S: SceneLookup>(scene: &S, name: &str) -> Option<S::Handle> {
    if let Some(item) = scene.find_top_level(name) {
        return Some(item);
    }

    for candidate in scene.top_level() {
        if !scene.is_group(&candidate) {
            continue;
        }
        if let Some(item) = scene.find_child(&candidate, name) {
            trace!(name, "resolved inside a group");
            return Some(item);
        }
    }

    None
}
