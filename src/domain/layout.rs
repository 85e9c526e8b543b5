//! Look computation
//!
//! Maps each operator action (plus the current mode, for the looks that care)
//! to a target visibility set and ordered per-layer placements. This is a
//! pure function of its inputs; applying the result to a scene is the
//! dispatcher's job.

use crate::domain::core::{CANVAS, Placement, Vec2};
use crate::domain::layer::LogicalLayer;
use crate::domain::mode::Mode;

/// Grid cell size: one quadrant of the canvas
pub const QUADRANT: Vec2 = Vec2::new(CANVAS.x / 2.0, CANVAS.y / 2.0);

/// The eight operator actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Camera inset over the event board and the main 3D stage; selects Main mode
    StageMain,
    /// Camera inset over the event board and the sub 3D stage; selects Sub mode
    StageSub,
    /// Fullscreen main 2D board
    FlatMain,
    /// Fullscreen sub 2D board
    FlatSub,
    /// Fullscreen camera
    CameraFull,
    /// Fullscreen gameplay feed
    Gameplay,
    /// Flip the event board on or off, leaving every other layer alone
    ToggleEvent,
    /// Four-way grid of the mode-selected assets
    Grid,
}

impl Action {
    /// Mode written as a side effect of this action, if any
    ///
    /// Only the stage looks carry one; the grid look reads the mode but
    /// never writes it.
    pub fn mode_effect(self) -> Option<Mode> {
        match self {
            Action::StageMain => Some(Mode::Main),
            Action::StageSub => Some(Mode::Sub),
            _ => None,
        }
    }

    /// Short description used for the status surface
    pub fn describe(self) -> &'static str {
        match self {
            Action::StageMain => "Stage look (3D main)",
            Action::StageSub => "Stage look (3D sub)",
            Action::FlatMain => "2D board main",
            Action::FlatSub => "2D board sub",
            Action::CameraFull => "Camera fullscreen",
            Action::Gameplay => "Gameplay feed",
            Action::ToggleEvent => "Toggle event board",
            Action::Grid => "Quad grid",
        }
    }
}

/// Configured constants the layout engine needs beyond the fixed canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Top-left corner of the camera inset in the stage looks
    pub camera_inset_position: Vec2,
    /// Bounds of the camera inset in the stage looks
    pub camera_inset_size: Vec2,
}

/// Full-state target for one look
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    /// Exactly these layers end up visible; the rest of the seven are hidden
    pub visible: Vec<LogicalLayer>,
    /// Placements applied in order once visibility is settled
    pub placements: Vec<(LogicalLayer, Placement)>,
}

/// What the dispatcher must do for one activated action
#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
    /// Hide-all-except semantics plus the listed placements
    Preset(Preset),
    /// Flip one layer's visibility; the placement applies only when the
    /// flip turns the layer on
    Toggle {
        layer: LogicalLayer,
        placement: Placement,
    },
}

/// Computes the plan for one action
///
/// `mode` matters only for the grid look; the stage looks pick their 3D
/// asset by identity and carry the matching mode effect separately.
pub fn plan(action: Action, mode: Mode, params: &LayoutParams) -> Plan {
    match action {
        Action::StageMain => stage_preset(LogicalLayer::Asset3dMain, params),
        Action::StageSub => stage_preset(LogicalLayer::Asset3dSub, params),
        Action::FlatMain => solo_fullscreen(LogicalLayer::Asset2dMain),
        Action::FlatSub => solo_fullscreen(LogicalLayer::Asset2dSub),
        Action::CameraFull => solo_fullscreen(LogicalLayer::Camera),
        Action::Gameplay => solo_fullscreen(LogicalLayer::Gameplay),
        Action::ToggleEvent => Plan::Toggle {
            layer: LogicalLayer::Event,
            placement: Placement::fullscreen(),
        },
        Action::Grid => grid_preset(mode),
    }
}

/// Stage look: event board and a 3D asset fullscreen, camera inset on top
fn stage_preset(asset3d: LogicalLayer, params: &LayoutParams) -> Plan {
    Plan::Preset(Preset {
        visible: vec![LogicalLayer::Camera, LogicalLayer::Event, asset3d],
        placements: vec![
            (LogicalLayer::Event, Placement::fullscreen()),
            (asset3d, Placement::fullscreen()),
            (
                LogicalLayer::Camera,
                Placement {
                    size: params.camera_inset_size,
                    position: Some(params.camera_inset_position),
                },
            ),
        ],
    })
}

/// Single layer fullscreen, everything else hidden
fn solo_fullscreen(layer: LogicalLayer) -> Plan {
    Plan::Preset(Preset {
        visible: vec![layer],
        placements: vec![(layer, Placement::fullscreen())],
    })
}

/// Quadrant layout: event board and the mode-selected 3D asset overlaid
/// top-left, camera top-right, the mode-selected 2D asset bottom-left,
/// gameplay bottom-right
fn grid_preset(mode: Mode) -> Plan {
    let asset3d = match mode {
        Mode::Main => LogicalLayer::Asset3dMain,
        Mode::Sub => LogicalLayer::Asset3dSub,
    };
    let asset2d = match mode {
        Mode::Main => LogicalLayer::Asset2dMain,
        Mode::Sub => LogicalLayer::Asset2dSub,
    };

    let cell = |x: f32, y: f32| Placement::at(QUADRANT.x, QUADRANT.y, x, y);
    Plan::Preset(Preset {
        visible: vec![
            LogicalLayer::Event,
            asset3d,
            LogicalLayer::Camera,
            asset2d,
            LogicalLayer::Gameplay,
        ],
        placements: vec![
            (LogicalLayer::Event, cell(0.0, 0.0)),
            (asset3d, cell(0.0, 0.0)),
            (LogicalLayer::Camera, cell(QUADRANT.x, 0.0)),
            (asset2d, cell(0.0, QUADRANT.y)),
            (LogicalLayer::Gameplay, cell(QUADRANT.x, QUADRANT.y)),
        ],
    })
}
