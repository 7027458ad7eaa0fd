//! Viewport-space geometry used by input events and the drag controller.
//!
//! All coordinates are CSS pixels with the origin at the viewport's
//! top-left corner.

/// A point in viewport coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of the widget's bounding box
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Current viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Where the widget sits on the page when the driver takes over
#[derive(Debug, Clone, Copy)]
pub struct WidgetLayout {
    /// Top-left corner of the widget
    pub position: Position,
    /// Widget bounding box
    pub size: Size,
    /// Viewport at construction time
    pub viewport: Viewport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_default_is_origin() {
        assert_eq!(Position::default(), Position::new(0.0, 0.0));
    }
}
