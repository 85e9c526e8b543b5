//! Visibility and transform application
//!
//! Thin free functions over the mutation capability. Every function accepts
//! an unresolved (`None`) handle and returns without effect, so an action
//! can run its full hide/show/place sequence even when some layers are
//! missing from the scene.

use tracing::debug;

use crate::domain::core::{Alignment, BoundsFit, Placement};
use crate::host::scene::SceneMutate;

/// Current visibility of a resolved item; false when unresolved
pub fn is_visible<S: SceneMutate>(scene: &S, item: Option<&S::Handle>) -> bool {
    match item {
        Some(item) => scene.is_visible(item),
        None => false,
    }
}

/// Sets visibility; idempotent, no-op when unresolved
pub fn set_visible<S: SceneMutate>(scene: &mut S, item: Option<&S::Handle>, visible: bool) {
    if let Some(item) = item {
        scene.set_visible(item, visible);
    }
}

/// Applies one placement: optional position, then bounds
///
/// Bounds, scale-inner fit and top-left alignment are always set; the
/// position only when the placement carries one, so a position-less
/// placement leaves the item wherever it sits.
pub fn apply_placement<S: SceneMutate>(scene: &mut S, item: Option<&S::Handle>, placement: &Placement) {
    let Some(item) = item else { return };

    if let Some(position) = placement.position {
        scene.set_position(item, position);
    }
    scene.set_bounds(
        item,
        placement.size,
        BoundsFit::ScaleInner,
        Alignment::TopLeft,
    );
    debug!(
        w = placement.size.x,
        h = placement.size.y,
        positioned = placement.position.is_some(),
        "placement applied"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::core::Vec2;
    use crate::host::memory::MemoryScene;

    #[test]
    fn unresolved_items_are_ignored() {
        let mut scene = MemoryScene::new();
        scene.add_item("Camera");

        assert!(!is_visible(&scene, None));
        set_visible(&mut scene, None, true);
        apply_placement(&mut scene, None, &Placement::fullscreen());

        assert!(!scene.is_visible_by_name("Camera"));
        assert_eq!(scene.bounds_of("Camera"), None);
    }

    #[test]
    fn set_visible_is_idempotent() {
        let mut scene = MemoryScene::new();
        let camera = scene.add_item("Camera");

        set_visible(&mut scene, Some(&camera), true);
        set_visible(&mut scene, Some(&camera), true);
        assert!(is_visible(&scene, Some(&camera)));

        set_visible(&mut scene, Some(&camera), false);
        assert!(!is_visible(&scene, Some(&camera)));
    }

    #[test]
    fn placement_sets_position_bounds_fit_and_alignment() {
        let mut scene = MemoryScene::new();
        let camera = scene.add_item("Camera");

        apply_placement(&mut scene, Some(&camera), &Placement::at(320.0, 240.0, 1600.0, 840.0));

        assert_eq!(scene.position_of("Camera"), Some(Vec2::new(1600.0, 840.0)));
        assert_eq!(scene.bounds_of("Camera"), Some(Vec2::new(320.0, 240.0)));
        assert_eq!(
            scene.fit_of("Camera"),
            Some((BoundsFit::ScaleInner, Alignment::TopLeft))
        );
    }

    #[test]
    fn position_less_placement_keeps_the_current_position() {
        let mut scene = MemoryScene::new();
        let camera = scene.add_item("Camera");
        apply_placement(&mut scene, Some(&camera), &Placement::at(320.0, 240.0, 1600.0, 840.0));

        apply_placement(&mut scene, Some(&camera), &Placement::sized(640.0, 480.0));

        assert_eq!(scene.position_of("Camera"), Some(Vec2::new(1600.0, 840.0)));
        assert_eq!(scene.bounds_of("Camera"), Some(Vec2::new(640.0, 480.0)));
    }
}
