use std::{cell::RefCell, rc::Rc};

use counter_core::{Activation, Control, CounterBinding, CounterConfig, Mode};

fn click(binding: &mut CounterBinding, times: usize) -> Vec<String> {
    let mut control = Control::uncontrolled();
    (0..times)
        .map(|_| {
            binding.activate(&mut control);
            binding.render(&control).text
        })
        .collect()
}

#[test]
fn counts_up_when_clicked() {
    let mut binding = CounterBinding::default();
    assert_eq!(binding.render(&Control::uncontrolled()).text, "0");
    assert_eq!(click(&mut binding, 1), vec!["1"]);
}

#[test]
fn uses_initial_value_if_given() {
    let binding = CounterBinding::new(CounterConfig {
        initial_value: 3.0,
        ..CounterConfig::default()
    });
    let rendered = binding.render(&Control::uncontrolled());
    assert_eq!(rendered.value, 3.0);
    assert_eq!(rendered.text, "3");
}

#[test]
fn respects_max_across_clicks() {
    let mut binding = CounterBinding::new(CounterConfig {
        max: 1.0,
        ..CounterConfig::default()
    });
    assert_eq!(click(&mut binding, 3), vec!["1", "1", "1"]);
}

#[test]
fn increments_in_steps_across_clicks() {
    let mut binding = CounterBinding::new(CounterConfig {
        step: 2.0,
        ..CounterConfig::default()
    });
    assert_eq!(click(&mut binding, 3), vec!["2", "4", "6"]);
}

#[test]
fn parent_owned_value_round_trips_through_the_callback() {
    let parent_value = Rc::new(RefCell::new(13.0));
    let mut binding = CounterBinding::new(CounterConfig {
        max: 15.0,
        ..CounterConfig::default()
    });

    for expected in ["13", "14", "15", "15"] {
        let current = *parent_value.borrow();
        let sink = Rc::clone(&parent_value);
        let mut control = Control::controlled(current, move |next| *sink.borrow_mut() = next);

        let rendered = binding.render(&control);
        assert_eq!(rendered.text, expected);
        assert_eq!(rendered.mode, Mode::Controlled);
        assert!(matches!(
            binding.activate(&mut control),
            Activation::Proposed(_)
        ));
    }

    assert_eq!(*parent_value.borrow(), 15.0);
    assert_eq!(binding.counter().value(), 0.0);
}

#[test]
fn engine_subscription_sees_every_uncontrolled_click() {
    let repaints = Rc::new(RefCell::new(0));
    let mut binding = CounterBinding::default();
    let sink = Rc::clone(&repaints);
    binding
        .counter_mut()
        .subscribe(move |_| *sink.borrow_mut() += 1);

    click(&mut binding, 4);
    assert_eq!(*repaints.borrow(), 4);
}

#[test]
fn sum_macro_is_exported() {
    assert_eq!(counter_core::sum!(1, 2, 3, 4), 10.0);
    assert!(counter_core::sum!("hello", 1).is_nan());
}
