use std::path::PathBuf;

use thiserror::Error;

use crate::domain::OperandKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SumError {
    #[error("no operands given")]
    Empty,
    #[error("operand {index} is {kind}, not a number")]
    NotANumber { index: usize, kind: OperandKind },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("initial value {initial_value} exceeds max {max}")]
    InitialAboveMax { initial_value: f64, max: f64 },
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}
