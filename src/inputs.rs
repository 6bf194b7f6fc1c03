//! Text-field components for color channel editing.

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::constants;

/// A labeled channel field (R/G/B or H/S/B).
///
/// The field edits `text` freely; `on_commit` runs on Enter or focus-lost
/// and is responsible for pushing the value into the model and re-syncing
/// the display text.
pub(crate) fn channel_input(
    lbl: &'static str,
    text: RwSignal<String>,
    on_commit: impl Fn() + Copy + 'static,
) -> impl IntoView {
    v_stack((
        text_input(text)
            .style(|s| {
                s.width(constants::INPUT_WIDTH)
                    .padding(2.0)
                    .font_size(constants::INPUT_FONT)
                    .font_family("monospace".to_string())
                    .background(Color::WHITE)
                    .border(1.0)
                    .border_color(Color::rgb8(200, 200, 200))
                    .border_radius(3.0)
            })
            .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
                on_commit();
            })
            .on_event(floem::event::EventListener::KeyDown, move |e| {
                if let floem::event::Event::KeyDown(ke) = e {
                    if ke.key.logical_key
                        == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                    {
                        on_commit();
                        return EventPropagation::Stop;
                    }
                }
                EventPropagation::Continue
            }),
        label(move || lbl).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
                .justify_content(Some(floem::taffy::AlignContent::Center))
        }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// The hex field, shown with a `#` label to its left.
///
/// Commit semantics match the channel fields: `on_commit` runs on Enter or
/// focus-lost and resets the text if the typed value was rejected.
pub(crate) fn hex_input(
    text: RwSignal<String>,
    on_commit: impl Fn() + Copy + 'static,
) -> impl IntoView {
    h_stack((
        label(|| "#").style(|s| {
            s.font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(120, 120, 120))
        }),
        text_input(text)
            .style(|s| {
                s.width(constants::HEX_INPUT_WIDTH)
                    .padding(2.0)
                    .font_size(constants::INPUT_FONT)
                    .font_family("monospace".to_string())
                    .background(Color::WHITE)
                    .border(1.0)
                    .border_color(Color::rgb8(200, 200, 200))
                    .border_radius(3.0)
            })
            .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
                on_commit();
            })
            .on_event(floem::event::EventListener::KeyDown, move |e| {
                if let floem::event::Event::KeyDown(ke) = e {
                    if ke.key.logical_key
                        == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                    {
                        on_commit();
                        return EventPropagation::Stop;
                    }
                }
                EventPropagation::Continue
            }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// A small copy button that copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

fn copy_to_clipboard(text: &str) {
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        let _ = clipboard.set_text(text);
    }
}
