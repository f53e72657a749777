//! Pan/zoom transform between screen (pointer) space and logic space.

use crate::core::config::EditorConfig;
use crate::core::types::Point;

/// Screen-space bounds of the canvas element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
}

/// Map a pointer position to logic space
///
/// Inverse of the render transform: subtract the container origin, subtract
/// the pan offset, divide by the scale.
pub fn to_logic_space(pointer: Point, container: &ContainerRect, pan: Point, scale: f64) -> Point {
    Point::new(
        (pointer.x - container.left - pan.x) / scale,
        (pointer.y - container.top - pan.y) / scale,
    )
}

/// Map a logic-space point to the screen, inverse of [`to_logic_space`]
pub fn to_screen_space(logic: Point, container: &ContainerRect, pan: Point, scale: f64) -> Point {
    Point::new(
        logic.x * scale + pan.x + container.left,
        logic.y * scale + pan.y + container.top,
    )
}

/// Current pan offset and zoom scale of the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Translation applied after scaling, in screen pixels
    pub pan: Point,
    /// Zoom factor (1.0 = one logic unit per pixel)
    pub scale: f64,
    zoom_min: f64,
    zoom_max: f64,
}

impl Viewport {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            pan: Point::ORIGIN,
            scale: 1.0,
            zoom_min: config.zoom_min,
            zoom_max: config.zoom_max,
        }
    }

    /// Shift the canvas by a screen-space delta
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan = self.pan.offset(dx, dy);
    }

    /// Scale around a screen point so the logic point under it stays put
    pub fn zoom_at(&mut self, anchor: Point, container: &ContainerRect, factor: f64) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }
        let logic = self.to_logic(anchor, container);
        self.scale = (self.scale * factor).clamp(self.zoom_min, self.zoom_max);
        self.pan = Point::new(
            anchor.x - container.left - logic.x * self.scale,
            anchor.y - container.top - logic.y * self.scale,
        );
    }

    /// Back to no pan and unit scale
    pub fn reset(&mut self) {
        self.pan = Point::ORIGIN;
        self.scale = 1.0;
    }

    pub fn to_logic(&self, pointer: Point, container: &ContainerRect) -> Point {
        to_logic_space(pointer, container, self.pan, self.scale)
    }

    pub fn to_screen(&self, logic: Point, container: &ContainerRect) -> Point {
        to_screen_space(logic, container, self.pan, self.scale)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}
