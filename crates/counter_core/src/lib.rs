//! Clamped counter widget core: the summation helper, the counter engine, and the
//! presentation binding that UI shells draw.

pub mod binding;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod sum;

pub use binding::{Activation, Control, CounterBinding, RenderedCounter, NOT_FULLY_CONTROLLED};
pub use config::{load_config, ConfigOverrides, CounterConfig};
pub use domain::{Mode, OperandKind, SubscriptionId};
pub use engine::{clamp, Counter};
pub use error::{ConfigError, SumError};
pub use sum::{sum, try_sum, Operand};
