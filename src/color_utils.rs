//! Color conversion utilities.
//!
//! This module converts between the three color representations used by
//! the wheel: `#rrggbb` hex strings, 8-bit RGB triples and HSL triples.
//! Hex strings are the source of truth; the other forms are derived.
//!
//! Canonical hex output is lowercase. Uppercasing for presentation is left
//! to the display layer.

use std::fmt;

use crate::error::ColorError;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from channels that may lie outside 0-255.
    ///
    /// Each channel is clamped into range.
    pub fn from_unclamped(r: i64, g: i64, b: i64) -> Self {
        let clamp = |c: i64| c.clamp(0, 255) as u8;
        Self {
            r: clamp(r),
            g: clamp(g),
            b: clamp(b),
        }
    }

    /// The RGB inversion of this color (255 minus each channel).
    #[must_use]
    pub fn inverted(self) -> Self {
        Self {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
        }
    }

    /// Channels as an array, in the form used by pixel buffers.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A color in HSL form.
///
/// Hue is in degrees `[0, 360)`; saturation and lightness are percentages
/// in `[0, 100]`. Values are not necessarily integral.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create an HSL color, wrapping the hue and clamping saturation and lightness.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Rotate the hue by `degrees`, keeping saturation and lightness.
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }
}

/// Wrap a hue in degrees into `[0, 360)`.
pub fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Parse a hex color string into RGB.
///
/// Accepts an optional leading `#` followed by exactly 6 hex digits, in
/// either case. The 3-digit shorthand is rejected.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::invalid_format(hex));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColorError::invalid_format(hex))
    };

    Ok(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Format an RGB color as a lowercase `#rrggbb` string.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Parse and re-serialize a hex color in canonical lowercase form.
pub fn normalize_hex(hex: &str) -> Result<String, ColorError> {
    hex_to_rgb(hex).map(rgb_to_hex)
}

/// Convert RGB to HSL using the min/max channel algorithm.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic: hue is undefined, report 0
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sextant = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(sextant / 6.0 * 360.0, s * 100.0, l * 100.0)
}

/// Convert HSL to RGB, rounding each channel to the nearest integer.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = wrap_hue(hsl.h);
    let s = hsl.s.clamp(0.0, 100.0) / 100.0;
    let l = hsl.l.clamp(0.0, 100.0) / 100.0;

    let a = s * l.min(1.0 - l);
    let channel = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        let value = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (value * 255.0).round().clamp(0.0, 255.0) as u8
    };

    Rgb {
        r: channel(0.0),
        g: channel(8.0),
        b: channel(4.0),
    }
}

/// Parse a hex color and convert it to HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    let hsl = rgb_to_hsl(hex_to_rgb(hex)?);
    log::trace!("{} -> hsl({:.2}, {:.2}%, {:.2}%)", hex, hsl.h, hsl.s, hsl.l);
    Ok(hsl)
}

/// Convert HSL components to a lowercase hex color.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    rgb_to_hex(hsl_to_rgb(Hsl { h, s, l }))
}
