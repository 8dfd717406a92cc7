//! Interaction state for the wheel.
//!
//! Every pointer event or color entry produces a fresh [`InteractionState`]:
//! the clamped selection point, the base color, its harmony palette and the
//! marker positions for the derived colors. Values are never mutated; the
//! renderer receives the latest one explicitly.

use crate::color_utils::normalize_hex;
use crate::error::ColorError;
use crate::harmony::{HarmonyPalette, HarmonyType, compute_harmony};
use crate::wheel_layout::WheelLayout;
use crate::wheel_math::{Point, clamp_to_disc, color_to_point, point_to_color};

/// A complete, immutable snapshot of the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    selected: Point,
    palette: HarmonyPalette,
    markers: Vec<Point>,
}

impl InteractionState {
    /// Build the state for a pointer position in logical canvas space.
    ///
    /// Positions outside the wheel are clamped to its rim before the color
    /// is read.
    pub fn from_pointer(
        point: Point,
        layout: &WheelLayout,
        harmony: HarmonyType,
    ) -> Result<Self, ColorError> {
        let center = layout.center();
        let radius = layout.radius();
        let selected = clamp_to_disc(point, center, radius);
        let color = point_to_color(selected, center, radius);

        log::debug!(
            "Pointer ({:.1}, {:.1}) -> {} at ({:.1}, {:.1})",
            point.x,
            point.y,
            color,
            selected.x,
            selected.y
        );

        Self::build(selected, &color, layout, harmony)
    }

    /// Build the state for an entered hex color.
    ///
    /// The selection marker is placed where the color sits on the wheel.
    pub fn from_color(
        hex: &str,
        layout: &WheelLayout,
        harmony: HarmonyType,
    ) -> Result<Self, ColorError> {
        let color = normalize_hex(hex)?;
        let selected = color_to_point(&color, layout.center(), layout.radius())?;
        log::debug!("Color {} placed at ({:.1}, {:.1})", color, selected.x, selected.y);

        Self::build(selected, &color, layout, harmony)
    }

    /// Recompute this selection under a different harmony rule.
    pub fn with_harmony(
        &self,
        layout: &WheelLayout,
        harmony: HarmonyType,
    ) -> Result<Self, ColorError> {
        Self::build(self.selected, self.palette.base(), layout, harmony)
    }

    fn build(
        selected: Point,
        color: &str,
        layout: &WheelLayout,
        harmony: HarmonyType,
    ) -> Result<Self, ColorError> {
        let palette = compute_harmony(color, harmony)?;
        let markers = palette
            .related()
            .iter()
            .map(|hex| color_to_point(hex, layout.center(), layout.radius()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            selected,
            palette,
            markers,
        })
    }

    /// The selected point, always on or inside the wheel.
    pub fn selected(&self) -> Point {
        self.selected
    }

    /// The selected base color as lowercase hex.
    pub fn base_color(&self) -> &str {
        self.palette.base()
    }

    pub fn harmony(&self) -> HarmonyType {
        self.palette.harmony()
    }

    pub fn palette(&self) -> &HarmonyPalette {
        &self.palette
    }

    /// Marker positions for the derived palette colors, in palette order.
    pub fn markers(&self) -> &[Point] {
        &self.markers
    }
}
