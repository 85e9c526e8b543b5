//! Core geometry types
//!
//! Pure canvas-space value types shared by the layout engine and the
//! scene-graph seam. All coordinates are floating-point canvas pixels; the
//! canvas itself is fixed at 1920x1080.

/// 2D vector in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Creates a new vector
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Canvas dimensions every look is computed against
pub const CANVAS: Vec2 = Vec2::new(1920.0, 1080.0);

/// Bounds-fit policy applied when an item is sized
///
/// Only scale-inner is used by this tool: content scales to fit entirely
/// inside the bounds while preserving its aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsFit {
    ScaleInner,
}

/// Alignment of content inside its bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    TopLeft,
}

/// Target geometry for one layer within a look
///
/// The position is optional: a placement without one resizes the item but
/// leaves it wherever it currently sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Bounds the item is fitted into
    pub size: Vec2,
    /// Canvas position of the top-left corner, if the look pins one
    pub position: Option<Vec2>,
}

impl Placement {
    /// Placement with both size and position
    pub const fn at(width: f32, height: f32, x: f32, y: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            position: Some(Vec2::new(x, y)),
        }
    }

    /// Size-only placement, current position preserved
    pub const fn sized(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            position: None,
        }
    }

    /// Fullscreen placement anchored at the canvas origin
    pub const fn fullscreen() -> Self {
        Self::at(CANVAS.x, CANVAS.y, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fullscreen_covers_the_canvas() {
        let placement = Placement::fullscreen();
        assert_eq!(placement.size, CANVAS);
        assert_eq!(placement.position, Some(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn sized_placement_has_no_position() {
        let placement = Placement::sized(320.0, 240.0);
        assert_eq!(placement.size, Vec2::new(320.0, 240.0));
        assert!(placement.position.is_none());
    }

    #[test]
    fn at_pins_both_size_and_position() {
        let placement = Placement::at(960.0, 540.0, 960.0, 0.0);
        assert_eq!(placement.size, Vec2::new(960.0, 540.0));
        assert_eq!(placement.position, Some(Vec2::new(960.0, 0.0)));
    }
}
