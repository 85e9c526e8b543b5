//! Action dispatch
//!
//! The switcher owns the scene handle, the mode selector and the status
//! surface, and coordinates input, domain and host layers: it filters
//! trigger edges, asks the layout engine for a plan and applies the plan to
//! the scene. Callbacks from a trigger host may arrive on a host-owned
//! thread, so callers share the switcher behind an `Arc<Mutex<…>>` and one
//! action always runs lock-to-completion — nothing here suspends.

use tracing::{info, warn};

use crate::config::settings::Settings;
use crate::domain::core::Placement;
use crate::domain::layer::LogicalLayer;
use crate::domain::layout::{self, Action, Plan, Preset};
use crate::domain::mode::{Mode, ModeState};
use crate::host::geometry;
use crate::host::resolver::resolve_layer;
use crate::host::scene::SceneMutate;
use crate::input::triggers::TriggerEvent;

/// Outcome of the most recent action, kept for status display only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    pub description: String,
    pub mode: Mode,
}

/// Edge-filtered action dispatcher over one scene graph
pub struct Switcher<S: SceneMutate> {
    scene: S,
    settings: Settings,
    mode: ModeState,
    last_action: Option<ActionResult>,
}

impl<S: SceneMutate> Switcher<S> {
    pub fn new(scene: S, settings: Settings) -> Self {
        Self {
            scene,
            settings,
            mode: ModeState::new(),
            last_action: None,
        }
    }

    /// Handles one trigger edge for `action`
    ///
    /// The deactivated edge is a strict no-op: no mode write, no scene
    /// mutation, no status update.
    pub fn handle(&mut self, action: Action, event: TriggerEvent) {
        match event {
            TriggerEvent::Activated => self.run(action),
            TriggerEvent::Deactivated => {}
        }
    }

    fn run(&mut self, action: Action) {
        if let Some(mode) = action.mode_effect() {
            self.mode.set(mode);
        }

        let params = self.settings.layout_params();
        match layout::plan(action, self.mode.get(), &params) {
            Plan::Preset(preset) => self.apply_preset(&preset),
            Plan::Toggle { layer, placement } => self.toggle_layer(layer, &placement),
        }

        let result = ActionResult {
            description: action.describe().to_string(),
            mode: self.mode.get(),
        };
        info!(action = %result.description, mode = %result.mode, "action applied");
        self.last_action = Some(result);
    }

    /// Full-state application: visibility for all seven layers first, then
    /// the placements in plan order
    ///
    /// Forcing every layer's visibility — not just the shown ones — makes
    /// the looks idempotent and recovers from whatever state the scene was
    /// left in. Layers are re-resolved per step; an unresolvable layer is
    /// skipped and the rest of the action still runs.
    fn apply_preset(&mut self, preset: &Preset) {
        for layer in LogicalLayer::ALL {
            let item = self.resolve(layer);
            geometry::set_visible(&mut self.scene, item.as_ref(), preset.visible.contains(&layer));
        }

        for (layer, placement) in &preset.placements {
            let item = self.resolve(*layer);
            geometry::apply_placement(&mut self.scene, item.as_ref(), placement);
        }
    }

    /// Delta-only flip of one layer, every other layer left untouched
    ///
    /// The placement is restored only on the way on; toggling off changes
    /// nothing but the visibility.
    fn toggle_layer(&mut self, layer: LogicalLayer, placement: &Placement) {
        let item = self.resolve(layer);
        let currently_visible = geometry::is_visible(&self.scene, item.as_ref());

        geometry::set_visible(&mut self.scene, item.as_ref(), !currently_visible);
        if !currently_visible {
            geometry::apply_placement(&mut self.scene, item.as_ref(), placement);
        }
    }

    fn resolve(&self, layer: LogicalLayer) -> Option<S::Handle> {
        let name = self.settings.display_name(layer);
        let item = resolve_layer(&self.scene, name);
        if item.is_none() {
            warn!(?layer, name, "layer not found in scene");
        }
        item
    }

    /// Status line for the external surface; "Ready" until the first action
    pub fn status_line(&self) -> String {
        match &self.last_action {
            Some(result) => format!("{} [mode: {}]", result.description, result.mode),
            None => "Ready".to_string(),
        }
    }

    pub fn last_action(&self) -> Option<&ActionResult> {
        self.last_action.as_ref()
    }

    pub fn mode(&self) -> Mode {
        self.mode.get()
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }
}
