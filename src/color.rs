//! ColorModel — the public color representation for floem-convert.
//!
//! Stores RGB as f64 values in the 0.0–1.0 range and derives the three
//! display forms (RGB integers, hex string, HSB) from that canonical state.

use crate::math;

/// A single color held as canonical RGB components in the 0.0–1.0 range.
///
/// All setters are total: invalid input never panics or errors. The RGB path
/// clamps out-of-range values while the hex and HSB paths drop the whole
/// update, leaving the model at its last valid state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorModel {
    r: f64,
    g: f64,
    b: f64,
}

impl Default for ColorModel {
    /// Pure red, the utility's startup color.
    fn default() -> Self {
        Self {
            r: 1.0,
            g: 0.0,
            b: 0.0,
        }
    }
}

impl ColorModel {
    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Set from 0–255 channel values.
    ///
    /// Non-finite input is ignored; out-of-range values are clamped to the
    /// nearest bound rather than rejected.
    pub fn set_from_rgb(&mut self, r: f64, g: f64, b: f64) {
        if !r.is_finite() || !g.is_finite() || !b.is_finite() {
            return;
        }
        self.r = r.clamp(0.0, 255.0) / 255.0;
        self.g = g.clamp(0.0, 255.0) / 255.0;
        self.b = b.clamp(0.0, 255.0) / 255.0;
    }

    /// Set from a hex string, with or without a leading `#`.
    ///
    /// Surrounding whitespace is stripped. Anything other than exactly six
    /// hex digits leaves the model unchanged.
    pub fn set_from_hex(&mut self, hex: &str) {
        let stripped = hex.trim().trim_start_matches('#');
        if stripped.len() != 6 || !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return;
        }
        let Ok(rgb) = u32::from_str_radix(stripped, 16) else {
            return;
        };
        self.r = ((rgb >> 16) & 0xFF) as f64 / 255.0;
        self.g = ((rgb >> 8) & 0xFF) as f64 / 255.0;
        self.b = (rgb & 0xFF) as f64 / 255.0;
    }

    /// Set from hue (0–360 degrees), saturation, and brightness (0–100 percent).
    ///
    /// Unlike the RGB path, out-of-range or non-finite input rejects the
    /// whole update with no clamping.
    pub fn set_from_hsb(&mut self, h: f64, s: f64, b: f64) {
        if !h.is_finite() || !s.is_finite() || !b.is_finite() {
            return;
        }
        if !(0.0..=360.0).contains(&h) || !(0.0..=100.0).contains(&s) || !(0.0..=100.0).contains(&b)
        {
            return;
        }
        let (r, g, bl) = math::hsb_to_rgb(h, s / 100.0, b / 100.0);
        self.r = r;
        self.g = g;
        self.b = bl;
    }

    /// Convert to 0–255 RGB tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }

    /// Format as `#` + six uppercase hex digits, zero-padded per byte.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Convert to HSB. Returns (hue 0–360 degrees, saturation and brightness 0–100 percent).
    pub fn to_hsb(&self) -> (f64, f64, f64) {
        let (h, s, b) = math::rgb_to_hsb(self.r, self.g, self.b);
        (h, s * 100.0, b * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_is_red() {
        let m = ColorModel::default();
        assert_eq!(m.to_rgb(), (255, 0, 0));
        assert_eq!(m.to_hex(), "#FF0000");
        let (h, s, b) = m.to_hsb();
        assert_abs_diff_eq!(h, 0.0);
        assert_abs_diff_eq!(s, 100.0);
        assert_abs_diff_eq!(b, 100.0);
    }

    #[test]
    fn hex_formatting() {
        let mut m = ColorModel::default();
        m.set_from_rgb(0.0, 0.0, 0.0);
        assert_eq!(m.to_hex(), "#000000");
        m.set_from_rgb(0.0, 0.0, 5.0);
        assert_eq!(m.to_hex(), "#000005");
        m.set_from_rgb(255.0, 0.0, 0.0);
        assert_eq!(m.to_hex(), "#FF0000");
    }

    #[test]
    fn rgb_clamps_out_of_range() {
        let mut m = ColorModel::default();
        m.set_from_rgb(300.0, -10.0, 128.0);
        assert_eq!(m.to_rgb(), (255, 0, 128));
    }

    #[test]
    fn rgb_ignores_non_finite() {
        let mut m = ColorModel::default();
        m.set_from_rgb(f64::NAN, 0.0, 0.0);
        assert_eq!(m, ColorModel::default());
        m.set_from_rgb(0.0, f64::INFINITY, 0.0);
        assert_eq!(m, ColorModel::default());
    }

    #[test]
    fn hex_parses_with_prefix_and_whitespace() {
        let mut m = ColorModel::default();
        m.set_from_hex(" #00ff00 ");
        assert_eq!(m.to_rgb(), (0, 255, 0));
        m.set_from_hex("0000FF");
        assert_eq!(m.to_rgb(), (0, 0, 255));
    }

    #[test]
    fn hex_rejects_bad_input() {
        let mut m = ColorModel::default();
        m.set_from_hex("12345");
        assert_eq!(m, ColorModel::default());
        m.set_from_hex("GGGGGG");
        assert_eq!(m, ColorModel::default());
        m.set_from_hex("#1234567");
        assert_eq!(m, ColorModel::default());
        m.set_from_hex("");
        assert_eq!(m, ColorModel::default());
    }

    #[test]
    fn hsb_rejects_where_rgb_clamps() {
        // Hue past 360 drops the whole update; the RGB setter would clamp.
        let mut m = ColorModel::default();
        m.set_from_hsb(400.0, 50.0, 50.0);
        assert_eq!(m, ColorModel::default());
        m.set_from_hsb(-1.0, 50.0, 50.0);
        assert_eq!(m, ColorModel::default());
        m.set_from_hsb(120.0, 101.0, 50.0);
        assert_eq!(m, ColorModel::default());
        m.set_from_hsb(f64::NAN, 50.0, 50.0);
        assert_eq!(m, ColorModel::default());
    }

    #[test]
    fn hsb_sets_in_range() {
        let mut m = ColorModel::default();
        m.set_from_hsb(120.0, 100.0, 100.0);
        assert_eq!(m.to_rgb(), (0, 255, 0));
        m.set_from_hsb(240.0, 100.0, 100.0);
        assert_eq!(m.to_rgb(), (0, 0, 255));
    }

    #[test]
    fn hex_to_hsb_end_to_end() {
        let mut m = ColorModel::default();
        m.set_from_hex("00FF00");
        assert_eq!(m.to_rgb(), (0, 255, 0));
        assert_eq!(m.to_hex(), "#00FF00");
        let (h, s, b) = m.to_hsb();
        assert_abs_diff_eq!(h, 120.0, epsilon = 0.5);
        assert_abs_diff_eq!(s, 100.0, epsilon = 0.5);
        assert_abs_diff_eq!(b, 100.0, epsilon = 0.5);
    }
}
