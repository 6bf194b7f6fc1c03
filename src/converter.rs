//! Converter panel: color swatch above RGB, hex, and HSB input rows.
//!
//! The model is the single source of truth. Each row commits its text into
//! the matching `ColorModel` setter, then every field re-renders from the
//! model — recomputation always branches from the representation the user
//! edited, never from another field's derived text, so rounded display
//! values cannot drift the canonical color.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::color::ColorModel;
use crate::constants;
use crate::inputs::{channel_input, copy_button, hex_input};

fn format_channel(value: f64) -> String {
    format!("{}", value.round() as i64)
}

/// Creates the consolidated converter with swatch, RGB, hex, and HSB rows.
pub(crate) fn converter(model: RwSignal<ColorModel>) -> impl IntoView {
    // Display text per field, initialized from the current model.
    let m = model.get_untracked();
    let (r0, g0, b0) = m.to_rgb();
    let (h0, s0, bb0) = m.to_hsb();
    let r_text = RwSignal::new(r0.to_string());
    let g_text = RwSignal::new(g0.to_string());
    let b_text = RwSignal::new(b0.to_string());
    let hex_text = RwSignal::new(m.to_hex().trim_start_matches('#').to_string());
    let h_text = RwSignal::new(format_channel(h0));
    let s_text = RwSignal::new(format_channel(s0));
    let bb_text = RwSignal::new(format_channel(bb0));

    // Model → all fields. Also resets whichever field held rejected input.
    let sync = move || {
        let m = model.get_untracked();
        let (r, g, b) = m.to_rgb();
        r_text.set(r.to_string());
        g_text.set(g.to_string());
        b_text.set(b.to_string());
        hex_text.set(m.to_hex().trim_start_matches('#').to_string());
        let (h, s, bb) = m.to_hsb();
        h_text.set(format_channel(h));
        s_text.set(format_channel(s));
        bb_text.set(format_channel(bb));
    };

    let commit_rgb = move || {
        let r = r_text.get_untracked().trim().parse::<f64>();
        let g = g_text.get_untracked().trim().parse::<f64>();
        let b = b_text.get_untracked().trim().parse::<f64>();
        if let (Ok(r), Ok(g), Ok(b)) = (r, g, b) {
            model.update(|m| m.set_from_rgb(r, g, b));
        }
        sync();
    };

    let commit_hex = move || {
        let raw = hex_text.get_untracked();
        model.update(|m| m.set_from_hex(&raw));
        sync();
    };

    let commit_hsb = move || {
        let h = h_text.get_untracked().trim().parse::<f64>();
        let s = s_text.get_untracked().trim().parse::<f64>();
        let b = bb_text.get_untracked().trim().parse::<f64>();
        if let (Ok(h), Ok(s), Ok(b)) = (h, s, b) {
            model.update(|m| m.set_from_hsb(h, s, b));
        }
        sync();
    };

    v_stack((
        // Color swatch
        empty().style(move |st| {
            let m = model.get();
            st.width_full()
                .height(constants::SWATCH_HEIGHT)
                .border_radius(constants::SWATCH_RADIUS)
                .border(1.0)
                .border_color(Color::rgb8(180, 180, 180))
                .background(Color::rgba(m.r(), m.g(), m.b(), 1.0))
        }),
        // RGB inputs row
        h_stack((
            channel_input("R", r_text, commit_rgb),
            channel_input("G", g_text, commit_rgb),
            channel_input("B", b_text, commit_rgb),
            copy_button(move || {
                let (r, g, b) = model.get().to_rgb();
                format!("{}, {}, {}", r, g, b)
            }),
        ))
        .style(|st| st.gap(constants::GAP / 2.0).items_center().justify_center()),
        // Hex + copy row
        h_stack((
            hex_input(hex_text, commit_hex),
            copy_button(move || model.get().to_hex()),
        ))
        .style(|st| st.gap(constants::GAP).items_center().justify_center()),
        // HSB inputs row
        h_stack((
            channel_input("H", h_text, commit_hsb),
            channel_input("S", s_text, commit_hsb),
            channel_input("B", bb_text, commit_hsb),
            copy_button(move || {
                let (h, s, b) = model.get().to_hsb();
                format!(
                    "{}, {}, {}",
                    h.round() as i64,
                    s.round() as i64,
                    b.round() as i64,
                )
            }),
        ))
        .style(|st| st.gap(constants::GAP / 2.0).items_center().justify_center()),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding_horiz(constants::PADDING)
            .padding_bottom(constants::PADDING)
            .padding_top(constants::PADDING)
            .size_full()
            .justify_center()
            .background(Color::rgb8(242, 242, 242))
    })
}
