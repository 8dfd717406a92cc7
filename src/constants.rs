//! Global constants for the harmony wheel

/// Default wheel canvas edge length in logical pixels
pub const DEFAULT_WHEEL_SIZE: f64 = 300.0;

/// Default gap between the wheel rim and the canvas edge
pub const DEFAULT_WHEEL_MARGIN: f64 = 20.0;

/// Color shown before the user picks anything
pub const DEFAULT_COLOR: &str = "#ffffff";

/// Marker styling, in logical pixels before device pixel scaling.
pub mod marker {
    /// Radius of the selected-color marker
    pub const SELECTED_RADIUS: f64 = 8.0;
    /// Stroke width of the selected-color marker
    pub const SELECTED_STROKE: f64 = 2.0;
    /// Fill of the selected-color marker (white, 0.8 alpha)
    pub const SELECTED_FILL: [u8; 4] = [255, 255, 255, 204];
    /// Outline of the selected-color marker (black, 0.5 alpha)
    pub const SELECTED_OUTLINE: [u8; 4] = [0, 0, 0, 128];

    /// Radius of each harmony marker
    pub const HARMONY_RADIUS: f64 = 6.0;
    /// Stroke width of each harmony marker
    pub const HARMONY_STROKE: f64 = 1.5;
    /// Fill of each harmony marker (white, 0.6 alpha)
    pub const HARMONY_FILL: [u8; 4] = [255, 255, 255, 153];
    /// Outline of each harmony marker (black, 0.3 alpha)
    pub const HARMONY_OUTLINE: [u8; 4] = [0, 0, 0, 77];
}

/// Wheel outline (black, 0.1 alpha)
pub const WHEEL_OUTLINE: [u8; 4] = [0, 0, 0, 26];

/// Wheel outline width in logical pixels
pub const WHEEL_OUTLINE_WIDTH: f64 = 1.0;
