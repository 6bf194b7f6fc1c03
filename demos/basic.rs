//! Standalone demo: opens a window with the color converter.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_convert::{color_converter, ColorModel};

fn main() {
    let model = RwSignal::new(ColorModel::default());

    floem::Application::new()
        .window(
            move |_| {
                color_converter(model).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((232.0, 300.0))
                    .title("floem-convert"),
            ),
        )
        .run();
}
