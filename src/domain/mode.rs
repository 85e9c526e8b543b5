//! Main/Sub mode selector
//!
//! A single persistent selector decides which variant of the 3D/2D assets
//! the mode-dependent looks pick up. It is an explicit state object owned by
//! the dispatcher, not an ambient global, and nothing about it survives a
//! process restart.

use std::fmt;

use tracing::debug;

/// Which asset variant mode-dependent looks select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Main,
    Sub,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Main => write!(f, "Main"),
            Mode::Sub => write!(f, "Sub"),
        }
    }
}

/// Holder for the current mode
///
/// Written only by the two stage looks, read by the grid look. Lives for the
/// process lifetime.
#[derive(Debug, Default)]
pub struct ModeState {
    current: Mode,
}

impl ModeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Mode {
        self.current
    }

    pub fn set(&mut self, mode: Mode) {
        if self.current != mode {
            debug!(from = %self.current, to = %mode, "mode changed");
        }
        self.current = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_main() {
        let state = ModeState::new();
        assert_eq!(state.get(), Mode::Main);
    }

    #[test]
    fn set_overwrites_and_get_reads_back() {
        let mut state = ModeState::new();
        state.set(Mode::Sub);
        assert_eq!(state.get(), Mode::Sub);
        state.set(Mode::Main);
        assert_eq!(state.get(), Mode::Main);
    }
}
