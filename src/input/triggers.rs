//! Trigger registration and edge dispatch
//!
//! The switcher consumes a trigger host: something able to register eight
//! named triggers and deliver edge events to their callbacks.
//! [`TriggerManager`] is the callback registry any host feeds — the terminal
//! key host in this crate does, and a real hotkey host would the same way.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{trace, warn};

use crate::domain::layout::Action;

/// Edge of a trigger
///
/// Only the activated edge runs an action; the deactivated edge must stay a
/// strict no-op all the way down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    Activated,
    Deactivated,
}

/// Static identity of one of the eight triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerSpec {
    /// Stable id, also the key into the bindings file
    pub id: &'static str,
    /// What the trigger does, shown to the operator at registration time
    pub description: &'static str,
    /// Action dispatched on the activated edge
    pub action: Action,
}

/// The eight triggers in registration order
pub const TRIGGERS: [TriggerSpec; 8] = [
    TriggerSpec {
        id: "stage_main",
        description: "Camera inset + event board + 3D main",
        action: Action::StageMain,
    },
    TriggerSpec {
        id: "stage_sub",
        description: "Camera inset + event board + 3D sub",
        action: Action::StageSub,
    },
    TriggerSpec {
        id: "flat_main",
        description: "2D board main",
        action: Action::FlatMain,
    },
    TriggerSpec {
        id: "flat_sub",
        description: "2D board sub",
        action: Action::FlatSub,
    },
    TriggerSpec {
        id: "camera_full",
        description: "Camera fullscreen",
        action: Action::CameraFull,
    },
    TriggerSpec {
        id: "gameplay",
        description: "Gameplay feed",
        action: Action::Gameplay,
    },
    TriggerSpec {
        id: "toggle_event",
        description: "Toggle event board",
        action: Action::ToggleEvent,
    },
    TriggerSpec {
        id: "grid",
        description: "Quad grid (4 views)",
        action: Action::Grid,
    },
];

/// Callback bound to one trigger
pub type TriggerCallback = Box<dyn FnMut(TriggerEvent) + Send>;

/// Trigger registration errors
#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("Trigger `{0}` is already registered")]
    AlreadyRegistered(String),
}

/// Callback registry keyed by trigger id
#[derive(Default)]
pub struct TriggerManager {
    callbacks: HashMap<&'static str, TriggerCallback>,
}

impl TriggerManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a callback to a trigger
    pub fn register(
        &mut self,
        spec: TriggerSpec,
        callback: TriggerCallback,
    ) -> Result<(), TriggerError> {
        if self.callbacks.contains_key(spec.id) {
            return Err(TriggerError::AlreadyRegistered(spec.id.to_string()));
        }

        trace!(id = spec.id, description = spec.description, "trigger registered");
        self.callbacks.insert(spec.id, callback);
        Ok(())
    }

    /// Delivers one edge to the trigger's callback
    ///
    /// Unknown ids are dropped with a warning; a host may keep delivering a
    /// stale id after its binding entry was edited away.
    pub fn dispatch(&mut self, id: &str, event: TriggerEvent) {
        match self.callbacks.get_mut(id) {
            Some(callback) => callback(event),
            None => warn!(id, "edge for unregistered trigger dropped"),
        }
    }

    pub fn registered_count(&self) -> usize {
        self.callbacks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn eight_triggers_with_unique_ids() {
        assert_eq!(TRIGGERS.len(), 8);
        for (i, a) in TRIGGERS.iter().enumerate() {
            for b in &TRIGGERS[i + 1..] {
                assert_ne!(a.id, b.id);
                assert_ne!(a.action, b.action);
            }
        }
    }

    #[test]
    fn dispatch_routes_the_edge_to_the_bound_callback() {
        let mut manager = TriggerManager::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        manager
            .register(
                TRIGGERS[0],
                Box::new(move |event| sink.lock().unwrap().push(event)),
            )
            .expect("registration");

        manager.dispatch("stage_main", TriggerEvent::Activated);
        manager.dispatch("stage_main", TriggerEvent::Deactivated);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![TriggerEvent::Activated, TriggerEvent::Deactivated]
        );
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut manager = TriggerManager::new();
        manager
            .register(TRIGGERS[0], Box::new(|_| {}))
            .expect("first registration");

        let result = manager.register(TRIGGERS[0], Box::new(|_| {}));
        assert!(matches!(result, Err(TriggerError::AlreadyRegistered(_))));
        assert_eq!(manager.registered_count(), 1);
    }

    #[test]
    fn unknown_trigger_edges_are_dropped_silently() {
        let mut manager = TriggerManager::new();
        manager.dispatch("no_such_trigger", TriggerEvent::Activated);
    }
}
