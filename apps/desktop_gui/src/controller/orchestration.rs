//! Queueing helpers from widget callbacks to the UI event intake.

use crossbeam_channel::{Sender, TrySendError};

use crate::controller::events::UiEvent;

pub fn dispatch_ui_event(ui_tx: &Sender<UiEvent>, event: UiEvent, status: &mut String) {
    let event_name = event_name(&event);

    match ui_tx.try_send(event) {
        Ok(()) => tracing::debug!(event = event_name, "queued ui event"),
        Err(TrySendError::Full(_)) => {
            *status = "UI event queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "UI event intake disconnected; restart the app".to_string();
        }
    }
}

/// Fire-and-forget variant for callbacks that have no status line to report to.
pub fn try_dispatch_ui_event(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    let event_name = event_name(&event);
    if let Err(err) = ui_tx.try_send(event) {
        tracing::warn!(event = event_name, error = %err, "dropped ui event");
    }
}

fn event_name(event: &UiEvent) -> &'static str {
    match event {
        UiEvent::CounterChanged { .. } => "counter_changed",
        UiEvent::IncrementProposed { .. } => "increment_proposed",
        UiEvent::Info(_) => "info",
        UiEvent::Error(_) => "error",
    }
}

#[cfg(test)]
#[path = "tests/orchestration_tests.rs"]
mod tests;
