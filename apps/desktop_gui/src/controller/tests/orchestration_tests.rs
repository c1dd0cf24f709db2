use super::*;

use crossbeam_channel::bounded;

use crate::controller::events::CounterSlot;

#[test]
fn queues_events_in_order() {
    let (ui_tx, ui_rx) = bounded(4);
    let mut status = String::new();

    dispatch_ui_event(
        &ui_tx,
        UiEvent::IncrementProposed {
            slot: CounterSlot::Controlled,
            next: 14.0,
        },
        &mut status,
    );
    dispatch_ui_event(&ui_tx, UiEvent::Info("hello".to_string()), &mut status);

    assert!(status.is_empty());
    assert_eq!(
        ui_rx.try_recv().expect("first"),
        UiEvent::IncrementProposed {
            slot: CounterSlot::Controlled,
            next: 14.0
        }
    );
    assert_eq!(
        ui_rx.try_recv().expect("second"),
        UiEvent::Info("hello".to_string())
    );
}

#[test]
fn reports_full_queue_in_status() {
    let (ui_tx, _ui_rx) = bounded(1);
    let mut status = String::new();

    dispatch_ui_event(&ui_tx, UiEvent::Info("one".to_string()), &mut status);
    dispatch_ui_event(&ui_tx, UiEvent::Info("two".to_string()), &mut status);

    assert_eq!(status, "UI event queue is full; please retry");
}

#[test]
fn reports_disconnected_intake_in_status() {
    let (ui_tx, ui_rx) = bounded::<UiEvent>(1);
    drop(ui_rx);
    let mut status = String::new();

    dispatch_ui_event(&ui_tx, UiEvent::Info("lost".to_string()), &mut status);

    assert!(status.contains("disconnected"));
}
