//! Presentation binding: decides who owns the displayed value, formats it, and routes
//! activations either to the internal engine or to the caller.

use std::fmt;

use crate::{config::CounterConfig, domain::Mode, engine::Counter};

/// Emitted once per render when only one of `value` / `on_increment` is supplied.
pub const NOT_FULLY_CONTROLLED: &str = "`value` or `onIncrement` not provided";

pub type RenderFn = Box<dyn Fn(f64) -> String>;
pub type IncrementFn<'a> = Box<dyn FnMut(f64) + 'a>;

/// Externally supplied inputs for one render: the controlled value and the callback
/// that receives proposed next values.
#[derive(Default)]
pub struct Control<'a> {
    value: Option<f64>,
    on_increment: Option<IncrementFn<'a>>,
}

impl<'a> Control<'a> {
    pub fn uncontrolled() -> Self {
        Self::default()
    }

    pub fn controlled(value: f64, on_increment: impl FnMut(f64) + 'a) -> Self {
        Self::default()
            .with_value(value)
            .with_on_increment(on_increment)
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_on_increment(mut self, on_increment: impl FnMut(f64) + 'a) -> Self {
        self.on_increment = Some(Box::new(on_increment));
        self
    }

    pub fn mode(&self) -> Mode {
        match (self.value.is_some(), self.on_increment.is_some()) {
            (false, false) => Mode::Uncontrolled,
            (true, true) => Mode::Controlled,
            _ => Mode::PartiallyControlled,
        }
    }

    /// The diagnostic for a half-controlled counter, if any.
    pub fn misconfiguration(&self) -> Option<&'static str> {
        (self.mode() == Mode::PartiallyControlled).then_some(NOT_FULLY_CONTROLLED)
    }
}

impl fmt::Debug for Control<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("value", &self.value)
            .field("on_increment", &self.on_increment.is_some())
            .finish()
    }
}

/// What a render produces: the raw value for machines, the formatted text for people.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCounter {
    pub value: f64,
    pub text: String,
    pub mode: Mode,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activation {
    /// The internal engine moved to this value (or stayed, when already at `max`).
    Incremented(f64),
    /// The caller was handed this value; internal state is untouched.
    Proposed(f64),
}

pub struct CounterBinding {
    counter: Counter,
    render: RenderFn,
}

impl CounterBinding {
    pub fn new(config: CounterConfig) -> Self {
        Self {
            counter: Counter::new(config),
            render: Box::new(|value| value.to_string()),
        }
    }

    pub fn with_render(mut self, render: impl Fn(f64) -> String + 'static) -> Self {
        self.render = Box::new(render);
        self
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    pub fn counter_mut(&mut self) -> &mut Counter {
        &mut self.counter
    }

    pub fn display_value(&self, control: &Control<'_>) -> f64 {
        control.value.unwrap_or_else(|| self.counter.value())
    }

    pub fn format(&self, value: f64) -> String {
        (self.render)(value)
    }

    pub fn render(&self, control: &Control<'_>) -> RenderedCounter {
        if let Some(message) = control.misconfiguration() {
            tracing::warn!("{message}");
        }

        let value = self.display_value(control);
        RenderedCounter {
            value,
            text: self.format(value),
            mode: control.mode(),
        }
    }

    /// Handles a click. With a callback the clamped next value is proposed to the caller;
    /// without one the internal engine increments.
    pub fn activate(&mut self, control: &mut Control<'_>) -> Activation {
        let shown = self.display_value(control);
        match control.on_increment.as_mut() {
            Some(on_increment) => {
                let next = self.counter.next_value(shown);
                tracing::debug!(from = shown, next, "proposing controlled increment");
                on_increment(next);
                Activation::Proposed(next)
            }
            None => {
                self.counter.increment();
                Activation::Incremented(self.counter.value())
            }
        }
    }
}

impl Default for CounterBinding {
    fn default() -> Self {
        Self::new(CounterConfig::default())
    }
}

impl fmt::Debug for CounterBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterBinding")
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/binding_tests.rs"]
mod tests;
