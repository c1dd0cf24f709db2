//! Clamped counter state with change notification.

use std::fmt;

use crate::{config::CounterConfig, domain::SubscriptionId};

/// `max(min, min(value, max))`, except that a NaN anywhere yields NaN.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() || min.is_nan() || max.is_nan() {
        return f64::NAN;
    }
    min.max(value.min(max))
}

type Listener = Box<dyn FnMut(f64)>;

/// Owns a single numeric value that only ever moves by `step`, clamped to
/// `[initial_value, max]`.
pub struct Counter {
    config: CounterConfig,
    value: f64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Counter {
    pub fn new(config: CounterConfig) -> Self {
        Self {
            value: config.initial_value,
            config,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// The value the next `increment` would produce from `from`.
    pub fn next_value(&self, from: f64) -> f64 {
        clamp(
            from + self.config.step,
            self.config.initial_value,
            self.config.max,
        )
    }

    pub fn increment(&mut self) {
        let next = self.next_value(self.value);
        if next == self.value {
            tracing::trace!(value = self.value, "counter already at bound");
            return;
        }

        self.value = next;
        tracing::debug!(value = next, "counter incremented");
        for (_, listener) in &mut self.listeners {
            listener(next);
        }
    }

    /// Registers a listener invoked with the new value after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(f64) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new(CounterConfig::default())
    }
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counter")
            .field("config", &self.config)
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
