//! Logical layer roles
//!
//! The switcher manages a fixed vocabulary of seven layers. A logical layer
//! is a role; the display name the host scene graph knows it by comes from
//! configuration, so the rest of the code never deals in raw strings.

/// One of the seven managed layer roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalLayer {
    /// Operator camera feed
    Camera,
    /// Event information board
    Event,
    /// Primary 3D stage asset
    Asset3dMain,
    /// Secondary 3D stage asset
    Asset3dSub,
    /// Primary 2D board asset
    Asset2dMain,
    /// Secondary 2D board asset
    Asset2dSub,
    /// Gameplay capture feed
    Gameplay,
}

impl LogicalLayer {
    /// Every managed layer, in a stable order
    ///
    /// Full-state looks iterate this to force the visibility of all seven
    /// layers, not just the ones they show.
    pub const ALL: [LogicalLayer; 7] = [
        LogicalLayer::Camera,
        LogicalLayer::Event,
        LogicalLayer::Asset3dMain,
        LogicalLayer::Asset3dSub,
        LogicalLayer::Asset2dMain,
        LogicalLayer::Asset2dSub,
        LogicalLayer::Gameplay,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_each_role_once() {
        assert_eq!(LogicalLayer::ALL.len(), 7);
        for (i, a) in LogicalLayer::ALL.iter().enumerate() {
            for b in &LogicalLayer::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
