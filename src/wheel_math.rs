//! Color wheel geometry.
//!
//! This module maps points on the wheel disc to colors and back. All
//! coordinates are logical canvas pixels with the y axis pointing down;
//! device pixel ratio scaling happens at the rendering boundary.
//!
//! The wheel encodes hue as the polar angle and blends from white at the
//! center to the fully saturated hue at the rim. Blending white with
//! `hsl(θ, 100%, 50%)` at weight `t` is exactly `hsl(θ, 100%, 100 - 50t)`,
//! so the analytic mapping here agrees with a rasterized gradient.

use std::f64::consts::TAU;

use crate::color_utils::{Hsl, hex_to_hsl, hsl_to_hex};
use crate::error::ColorError;

/// A point in logical canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Polar reading of a point relative to the wheel center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    /// Angle in radians, `[0, 2π)`, measured from the positive x axis
    pub angle: f64,
    /// Distance from the center
    pub distance: f64,
}

impl Polar {
    /// Angle in degrees, `[0, 360)`.
    pub fn degrees(&self) -> f64 {
        let degrees = self.angle.to_degrees();
        if degrees >= 360.0 { 0.0 } else { degrees }
    }
}

/// Pull a point back onto the disc if it lies outside it.
///
/// Points within `radius` of `center` are returned unchanged; others are
/// moved to the rim along the same angle.
pub fn clamp_to_disc(point: Point, center: Point, radius: f64) -> Point {
    let distance = point.distance_to(center);
    if distance <= radius {
        return point;
    }

    let scale = radius / distance;
    Point {
        x: center.x + (point.x - center.x) * scale,
        y: center.y + (point.y - center.y) * scale,
    }
}

/// Polar reading of `point` around `center`.
///
/// The center itself reads as angle 0.
pub fn point_to_polar(point: Point, center: Point) -> Polar {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    let distance = dx.hypot(dy);
    if distance == 0.0 {
        return Polar {
            angle: 0.0,
            distance,
        };
    }

    let angle = dy.atan2(dx).rem_euclid(TAU);
    Polar {
        angle: if angle >= TAU { 0.0 } else { angle },
        distance,
    }
}

/// Point at `distance` from `center` along `angle_degrees`.
pub fn polar_to_point(angle_degrees: f64, distance: f64, center: Point) -> Point {
    let theta = angle_degrees.to_radians();
    Point {
        x: center.x + distance * theta.cos(),
        y: center.y + distance * theta.sin(),
    }
}

/// HSL color shown at `point` on a wheel of the given center and radius.
///
/// The point is clamped to the disc first, so positions outside the wheel
/// read as the nearest rim color.
pub fn point_to_hsl(point: Point, center: Point, radius: f64) -> Hsl {
    if radius <= 0.0 {
        return Hsl::new(0.0, 100.0, 100.0);
    }

    let polar = point_to_polar(clamp_to_disc(point, center, radius), center);
    let t = (polar.distance / radius).clamp(0.0, 1.0);
    Hsl::new(polar.degrees(), 100.0, 100.0 - 50.0 * t)
}

/// Hex color shown at `point` on a wheel of the given center and radius.
///
/// The center is white (`#ffffff`); the rim at angle θ is the pure hue θ.
pub fn point_to_color(point: Point, center: Point, radius: f64) -> String {
    let hsl = point_to_hsl(point, center, radius);
    hsl_to_hex(hsl.h, hsl.s, hsl.l)
}

/// Where a color sits on the wheel, for placing markers.
///
/// Hue gives the angle and lightness the radial position (100% at the
/// center, 50% or darker at the rim). Colors darker than the rim have no
/// exact position and land on the rim at their hue.
pub fn color_to_point(hex: &str, center: Point, radius: f64) -> Result<Point, ColorError> {
    let hsl = hex_to_hsl(hex)?;
    let t = ((100.0 - hsl.l) / 50.0).clamp(0.0, 1.0);
    Ok(polar_to_point(hsl.h, t * radius, center))
}
