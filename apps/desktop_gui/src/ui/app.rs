use std::collections::VecDeque;

use counter_core::{
    try_sum, ConfigOverrides, Control, CounterBinding, CounterConfig, Operand, SumError,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::controller::events::{err_label, CounterSlot, UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::{dispatch_ui_event, try_dispatch_ui_event};
use crate::ui::widgets::counter_button;

const ACTIVITY_LOG_LEN: usize = 8;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub counter: CounterConfig,
    pub startup_error: Option<UiError>,
}

impl StartupConfig {
    /// Loads the counter config, applies `overrides`, and keeps any problem for the banner.
    pub fn resolve(path: Option<&std::path::Path>, overrides: ConfigOverrides) -> Self {
        match counter_core::load_config(path) {
            Ok(config) => {
                let counter = config.with_overrides(overrides);
                let startup_error = counter.validate().err().map(|err| {
                    tracing::warn!(%err, "counter config looks inconsistent");
                    UiError::from(err)
                });
                Self {
                    counter,
                    startup_error,
                }
            }
            Err(err) => {
                tracing::error!(%err, "failed to load counter config; using defaults");
                Self {
                    counter: CounterConfig::default().with_overrides(overrides),
                    startup_error: Some(UiError::from_message(
                        UiErrorContext::Startup,
                        err.to_string(),
                    )),
                }
            }
        }
    }
}

pub struct CounterApp {
    ctx: egui::Context,
    ui_tx: Sender<UiEvent>,
    ui_rx: Receiver<UiEvent>,
    config: CounterConfig,
    uncontrolled: CounterBinding,
    formatted: CounterBinding,
    controlled: CounterBinding,
    /// Owned here, not by the controlled binding.
    controlled_value: f64,
    sum_input: String,
    sum_outcome: Result<f64, SumError>,
    activity: VecDeque<String>,
    status: String,
    status_banner: Option<UiError>,
}

impl CounterApp {
    pub fn new(
        ctx: &egui::Context,
        startup: StartupConfig,
        ui_tx: Sender<UiEvent>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        let config = startup.counter;
        let mut uncontrolled = CounterBinding::new(config);
        let mut formatted =
            CounterBinding::new(config).with_render(|value| format!("Current count is {value}"));

        for (slot, binding) in [
            (CounterSlot::Uncontrolled, &mut uncontrolled),
            (CounterSlot::Formatted, &mut formatted),
        ] {
            let ctx = ctx.clone();
            let ui_tx = ui_tx.clone();
            binding.counter_mut().subscribe(move |value| {
                try_dispatch_ui_event(&ui_tx, UiEvent::CounterChanged { slot, value });
                ctx.request_repaint();
            });
        }

        if let Some(err) = startup.startup_error {
            try_dispatch_ui_event(&ui_tx, UiEvent::Error(err));
        }
        try_dispatch_ui_event(
            &ui_tx,
            UiEvent::Info(format!(
                "Counting from {} in steps of {}",
                config.initial_value, config.step
            )),
        );

        let sum_input = "1, 2, 3, 4".to_string();
        let sum_outcome = evaluate_sum_input(&sum_input);

        tracing::info!(
            initial_value = config.initial_value,
            max = config.max,
            step = config.step,
            "counter app started"
        );

        Self {
            ctx: ctx.clone(),
            ui_tx,
            ui_rx,
            config,
            uncontrolled,
            formatted,
            controlled: CounterBinding::new(config),
            controlled_value: config.initial_value,
            sum_input,
            sum_outcome,
            activity: VecDeque::with_capacity(ACTIVITY_LOG_LEN),
            status: "Ready".to_string(),
            status_banner: None,
        }
    }

    pub fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::CounterChanged { slot, value } => {
                    self.status = format!("{} counter is now {value}", slot.label());
                    self.record_activity(self.status.clone());
                }
                UiEvent::IncrementProposed { slot, next } => {
                    if slot == CounterSlot::Controlled {
                        self.controlled_value = next;
                        self.status = format!("accepted proposed value {next}");
                    } else {
                        tracing::debug!(
                            slot = slot.label(),
                            next,
                            "ignoring proposal for unowned slot"
                        );
                    }
                    self.record_activity(format!("{} counter proposed {next}", slot.label()));
                }
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::Error(err) => {
                    tracing::warn!(context = ?err.context(), "{}", err.message());
                    self.status =
                        format!("{} error: {}", err_label(err.category()), err.message());
                    self.status_banner = Some(err);
                }
            }
        }
    }

    fn record_activity(&mut self, entry: String) {
        if self.activity.len() == ACTIVITY_LOG_LEN {
            self.activity.pop_front();
        }
        self.activity.push_back(entry);
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = self.status_banner.clone() {
            egui::Frame::NONE
                .fill(egui::Color32::from_rgb(111, 53, 53))
                .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)))
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        let text =
                            format!("{}: {}", err_label(banner.category()), banner.message());
                        ui.label(egui::RichText::new(text).color(egui::Color32::WHITE));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.status_banner = None;
                            }
                        });
                    });
                });
        }
    }

    fn show_counters(&mut self, ui: &mut egui::Ui) {
        ui.heading("Counters");
        ui.label(format!(
            "initial {} / max {} / step {}",
            self.config.initial_value, self.config.max, self.config.step
        ));
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label("Uncontrolled");
            counter_button(ui, &mut self.uncontrolled, &mut Control::uncontrolled());
        });

        ui.horizontal(|ui| {
            ui.label("Custom render");
            counter_button(ui, &mut self.formatted, &mut Control::uncontrolled());
        });

        ui.horizontal(|ui| {
            ui.label("Controlled");
            let ui_tx = self.ui_tx.clone();
            let ctx = self.ctx.clone();
            let mut control = Control::controlled(self.controlled_value, move |next| {
                try_dispatch_ui_event(
                    &ui_tx,
                    UiEvent::IncrementProposed {
                        slot: CounterSlot::Controlled,
                        next,
                    },
                );
                ctx.request_repaint();
            });
            counter_button(ui, &mut self.controlled, &mut control);

            if ui.button("Reset").clicked() {
                dispatch_ui_event(
                    &self.ui_tx,
                    UiEvent::IncrementProposed {
                        slot: CounterSlot::Controlled,
                        next: self.config.initial_value,
                    },
                    &mut self.status,
                );
            }
        });
    }

    fn show_sum_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Sum");
        ui.horizontal(|ui| {
            ui.label("Operands");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.sum_input)
                    .hint_text("comma separated, e.g. 1, 2, 3")
                    .desired_width(240.0),
            );
            if response.changed() {
                self.sum_outcome = evaluate_sum_input(&self.sum_input);
            }
        });

        match &self.sum_outcome {
            Ok(total) => ui.label(format!("= {total}")),
            Err(err) => ui.label(
                egui::RichText::new(format!("= NaN ({err})")).color(egui::Color32::LIGHT_RED),
            ),
        };
    }

    fn show_activity(&self, ui: &mut egui::Ui) {
        ui.heading("Activity");
        if self.activity.is_empty() {
            ui.weak("No activity yet");
        }
        for entry in self.activity.iter().rev() {
            ui.label(entry);
        }
    }
}

/// Splits a comma separated list into operands and sums it.
pub fn evaluate_sum_input(raw: &str) -> Result<f64, SumError> {
    let operands: Vec<Operand> = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(Operand::parse)
        .collect();
    try_sum(&operands)
}

impl eframe::App for CounterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::top("status_bar").show(ctx, |ui| {
            self.show_status_banner(ui);
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_counters(ui);
            ui.separator();
            self.show_sum_panel(ui);
            ui.separator();
            self.show_activity(ui);
        });
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
