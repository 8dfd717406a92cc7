//! Wheel canvas dimensions.
//!
//! The core math works in logical pixels. The layout resolves the wheel's
//! center and radius in that space and converts to and from the device
//! pixel buffer that the renderer draws into.

use crate::constants::{DEFAULT_WHEEL_MARGIN, DEFAULT_WHEEL_SIZE};
use crate::wheel_math::Point;

/// Size and placement of the wheel on its canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    /// Canvas edge length in logical pixels (the canvas is square)
    pub size: f64,
    /// Gap between the rim and the canvas edge in logical pixels
    pub margin: f64,
    /// Device pixels per logical pixel
    pub dpr: f64,
}

impl WheelLayout {
    /// Create a layout for a square canvas.
    pub fn new(size: f64, margin: f64, dpr: f64) -> Self {
        Self { size, margin, dpr }
    }

    /// Wheel center in logical pixels.
    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }

    /// Wheel radius in logical pixels.
    pub fn radius(&self) -> f64 {
        (self.size / 2.0 - self.margin).max(0.0)
    }

    /// Edge length of the pixel buffer.
    pub fn buffer_size(&self) -> u32 {
        (self.size * self.dpr).round().max(0.0) as u32
    }

    /// Convert a logical point to buffer coordinates.
    pub fn scale_to_buffer(&self, point: Point) -> Point {
        Point::new(point.x * self.dpr, point.y * self.dpr)
    }

    /// Convert a buffer coordinate back to logical space.
    pub fn scale_from_buffer(&self, point: Point) -> Point {
        if self.dpr <= 0.0 {
            return point;
        }
        Point::new(point.x / self.dpr, point.y / self.dpr)
    }
}

impl Default for WheelLayout {
    fn default() -> Self {
        Self::new(DEFAULT_WHEEL_SIZE, DEFAULT_WHEEL_MARGIN, 1.0)
    }
}
