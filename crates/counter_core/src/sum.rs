//! Summation over heterogeneous operands with strict numeric validation.

use crate::{domain::OperandKind, error::SumError};

/// A single argument to [`sum`]. Callers may pass anything; only numbers are summable.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Number(f64),
    Text(String),
    Boolean(bool),
    Null,
}

impl Operand {
    /// Reads a number when the text parses as one, otherwise keeps it as text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<f64>() {
            Ok(value) => Operand::Number(value),
            Err(_) => Operand::Text(trimmed.to_string()),
        }
    }

    pub fn kind(&self) -> OperandKind {
        match self {
            Operand::Number(_) => OperandKind::Number,
            Operand::Text(_) => OperandKind::Text,
            Operand::Boolean(_) => OperandKind::Boolean,
            Operand::Null => OperandKind::Null,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Operand::Number(value) => Some(*value),
            _ => None,
        }
    }
}

macro_rules! operand_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Operand::Number(f64::from(value))
                }
            }
        )*
    };
}

operand_from_number!(f64, f32, i32, i16, i8, u32, u16, u8);

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Operand::Boolean(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        value.map_or(Operand::Null, Into::into)
    }
}

/// Sums operands left to right, or explains why the input is not summable.
pub fn try_sum(operands: &[Operand]) -> Result<f64, SumError> {
    if operands.is_empty() {
        return Err(SumError::Empty);
    }

    let mut total: Option<f64> = None;
    for (index, operand) in operands.iter().enumerate() {
        let value = operand.as_number().ok_or(SumError::NotANumber {
            index,
            kind: operand.kind(),
        })?;
        total = Some(total.map_or(value, |acc| acc + value));
    }
    total.ok_or(SumError::Empty)
}

/// Sums operands left to right. Returns `NaN` for an empty list or any non-numeric operand.
pub fn sum(operands: &[Operand]) -> f64 {
    try_sum(operands).unwrap_or(f64::NAN)
}

/// Variadic front end for [`sum`]: `sum!(1, 2.5, "x")`.
#[macro_export]
macro_rules! sum {
    () => {
        $crate::sum::sum(&[])
    };
    ($($operand:expr),+ $(,)?) => {
        $crate::sum::sum(&[$($crate::sum::Operand::from($operand)),+])
    };
}

#[cfg(test)]
#[path = "tests/sum_tests.rs"]
mod tests;
