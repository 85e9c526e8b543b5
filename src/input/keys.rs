//! Terminal key host
//!
//! Drives the trigger manager from raw terminal key events. A key press is
//! the activated edge, a key release the deactivated one; terminals that
//! support the keyboard-enhancement protocol report releases, everywhere
//! else only presses arrive — which the downstream edge filter already
//! tolerates.

use std::collections::HashMap;
use std::io;

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};
use tracing::debug;

use crate::input::triggers::{TriggerEvent, TriggerManager};

/// Runs the key loop until Esc, `q` or Ctrl-C
///
/// Bound keys are dispatched as trigger edges; `on_action` runs after every
/// activated edge so the caller can refresh its status display. Raw mode is
/// always restored on the way out.
pub fn run<F>(
    key_map: &HashMap<char, &'static str>,
    manager: &mut TriggerManager,
    mut on_action: F,
) -> io::Result<()>
where
    F: FnMut(),
{
    terminal::enable_raw_mode()?;
    let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            io::stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }

    let result = event_loop(key_map, manager, &mut on_action);

    if enhanced {
        let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
    }
    terminal::disable_raw_mode()?;
    result
}

fn event_loop<F>(
    key_map: &HashMap<char, &'static str>,
    manager: &mut TriggerManager,
    on_action: &mut F,
) -> io::Result<()>
where
    F: FnMut(),
{
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };

        let quit = key.code == KeyCode::Esc
            || key.code == KeyCode::Char('q')
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
        if quit && key.kind == KeyEventKind::Press {
            return Ok(());
        }

        let KeyCode::Char(c) = key.code else {
            continue;
        };
        let Some(&id) = key_map.get(&c) else {
            continue;
        };

        let edge = match key.kind {
            KeyEventKind::Press => TriggerEvent::Activated,
            KeyEventKind::Release => TriggerEvent::Deactivated,
            // Held-key repeats are neither edge
            KeyEventKind::Repeat => continue,
        };

        debug!(id, ?edge, "trigger edge from terminal");
        manager.dispatch(id, edge);
        if edge == TriggerEvent::Activated {
            on_action();
        }
    }
}
