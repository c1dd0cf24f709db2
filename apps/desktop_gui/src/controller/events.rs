//! UI events and error modeling for the desktop counter shell.

use counter_core::{ConfigError, SumError};

/// Identifies which counter on screen an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterSlot {
    Uncontrolled,
    Controlled,
    Formatted,
}

impl CounterSlot {
    pub fn label(self) -> &'static str {
        match self {
            CounterSlot::Uncontrolled => "uncontrolled",
            CounterSlot::Controlled => "controlled",
            CounterSlot::Formatted => "formatted",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// An engine-owned counter moved to a new value.
    CounterChanged { slot: CounterSlot, value: f64 },
    /// A controlled counter proposed this value to its owner.
    IncrementProposed { slot: CounterSlot, next: f64 },
    Info(String),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Config,
    Validation,
    Queue,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Startup,
    Sum,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(
        category: UiErrorCategory,
        context: UiErrorContext,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            context,
            message: message.into(),
        }
    }

    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("config")
            || message_lower.contains("toml")
            || message_lower.contains("exceeds max")
            || message_lower.contains("must be finite")
        {
            UiErrorCategory::Config
        } else if message_lower.contains("not a number")
            || message_lower.contains("no operands")
            || message_lower.contains("invalid")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("queue") || message_lower.contains("disconnected") {
            UiErrorCategory::Queue
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ConfigError> for UiError {
    fn from(err: ConfigError) -> Self {
        Self::new(UiErrorCategory::Config, UiErrorContext::Startup, err.to_string())
    }
}

impl From<SumError> for UiError {
    fn from(err: SumError) -> Self {
        Self::new(UiErrorCategory::Validation, UiErrorContext::Sum, err.to_string())
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Config => "Configuration",
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Queue => "Event queue",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
