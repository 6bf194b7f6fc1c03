//! Sizing and styling constants for the converter.

/// Color swatch height
pub const SWATCH_HEIGHT: f32 = 100.0;

/// Border radius for the color swatch
pub const SWATCH_RADIUS: f32 = 10.0;

/// Gap between converter rows
pub const GAP: f32 = 8.0;

/// Padding around the whole converter
pub const PADDING: f32 = 8.0;

/// Channel input field width
pub const INPUT_WIDTH: f32 = 28.0;

/// Hex input field width
pub const HEX_INPUT_WIDTH: f32 = 64.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;
