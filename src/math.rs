//! Color math — direct RGB↔HSB conversions without external dependencies.
//! Channels are f64 in 0.0–1.0; hue is in degrees.

/// RGB → HSB/HSV. Channels 0.0–1.0; returns (hue 0–360, saturation 0–1, brightness 0–1).
///
/// Achromatic input (delta == 0) yields hue 0 by convention.
pub(crate) fn rgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let mut hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    if hue < 0.0 {
        hue += 360.0;
    }

    let saturation = if max == 0.0 { 0.0 } else { delta / max };
    (hue, saturation, max)
}

/// HSB/HSV → RGB. Hue in degrees, saturation/brightness 0.0–1.0.
///
/// Hue exactly at 360 (or outside every 60° sector) takes the fallback
/// branch and contributes (0, 0, 0) before the `m` offset.
pub(crate) fn hsb_to_rgb(h: f64, s: f64, b: f64) -> (f64, f64, f64) {
    let c = b * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = b - c;

    let (r, g, bl) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else if (300.0..360.0).contains(&h) {
        (c, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    (r + m, g + m, bl + m)
}
