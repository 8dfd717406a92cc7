//! Harmony Wheel - interactive color harmony picker
//!
//! Maps points on a hue/lightness wheel to colors, converts between hex,
//! RGB and HSL, and expands a base color into complementary, analogous,
//! monochromatic, triadic or tetradic palettes.

pub mod color_utils;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod harmony;
pub mod interaction;
pub mod render;
pub mod wheel_layout;
pub mod wheel_math;

pub use color_utils::{
    Hsl, Rgb, hex_to_hsl, hex_to_rgb, hsl_to_hex, normalize_hex, rgb_to_hex,
};
pub use error::ColorError;
pub use harmony::{HarmonyPalette, HarmonyType, compute_harmony};
pub use interaction::InteractionState;
pub use wheel_layout::WheelLayout;
pub use wheel_math::{
    Point, Polar, clamp_to_disc, color_to_point, point_to_color, point_to_polar, polar_to_point,
};
