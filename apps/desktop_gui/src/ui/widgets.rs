//! Counter button widget.

use counter_core::{Activation, Control, CounterBinding, RenderedCounter};
use eframe::egui;

pub struct CounterResponse {
    pub response: egui::Response,
    /// What was drawn this frame; an activation shows up on the next frame.
    pub rendered: RenderedCounter,
    pub activation: Option<Activation>,
}

/// Draws `binding` as a button labelled with its formatted value and activates it on click.
pub fn counter_button(
    ui: &mut egui::Ui,
    binding: &mut CounterBinding,
    control: &mut Control<'_>,
) -> CounterResponse {
    let rendered = binding.render(control);
    let response = ui
        .add(egui::Button::new(rendered.text.as_str()).min_size(egui::vec2(96.0, 32.0)))
        .on_hover_text(format!("value = {}", rendered.value));

    let activation = if response.clicked() {
        let activation = binding.activate(control);
        tracing::debug!(?activation, mode = rendered.mode.label(), "counter activated");
        Some(activation)
    } else {
        None
    };

    CounterResponse {
        response,
        rendered,
        activation,
    }
}

#[cfg(test)]
#[path = "tests/widgets_tests.rs"]
mod tests;
