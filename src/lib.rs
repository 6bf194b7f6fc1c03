//! # floem-convert
//!
//! An RGB/Hex/HSB color converter widget for [Floem](https://github.com/lapce/floem).
//!
//! Keeps the three representations of a single color mutually synchronized:
//! editing any row updates the others and the preview swatch. Conversion and
//! validation live in [`ColorModel`]; the widget is presentation only.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_convert::{color_converter, ColorModel};
//!
//! let model = RwSignal::new(ColorModel::default());
//! // Use `color_converter(model)` in your Floem view tree.
//! ```

mod color;
mod constants;
mod converter;
mod inputs;
mod math;

pub use color::ColorModel;

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the top-level color converter view.
///
/// The converter reads from and writes to `model`. User edits in any row
/// update the signal, and the swatch and other rows re-render from it.
pub fn color_converter(model: RwSignal<ColorModel>) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    converter::converter(model)
}
