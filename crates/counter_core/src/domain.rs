use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    Number,
    Text,
    Boolean,
    Null,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OperandKind::Number => "a number",
            OperandKind::Text => "text",
            OperandKind::Boolean => "a boolean",
            OperandKind::Null => "null",
        })
    }
}

/// Who owns the value a counter displays, resolved on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The internal engine owns the value.
    Uncontrolled,
    /// The caller owns the value and receives proposed next values.
    Controlled,
    /// Only one of `value` / `on_increment` was supplied.
    PartiallyControlled,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Uncontrolled => "uncontrolled",
            Mode::Controlled => "controlled",
            Mode::PartiallyControlled => "partially controlled",
        }
    }
}
