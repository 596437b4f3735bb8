use std::fmt;

use thiserror::Error;

/// Which editable surface of a row a piece of text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Percentage,
    Odds,
    Winnings,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Percentage => write!(f, "percentage"),
            Field::Odds => write!(f, "odds"),
            Field::Winnings => write!(f, "winnings"),
        }
    }
}

/// Invalid numeric input in one of the row fields.
///
/// The ledger always recovers from these locally; they only travel outward
/// inside [`crate::ledger::Edit::Recovered`] so the caller can log them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} is empty")]
    Empty { field: Field },

    #[error("{field} is not a number: {text:?}")]
    NotANumber { field: Field, text: String },

    #[error("{field} is not a finite number: {text:?}")]
    NotFinite { field: Field, text: String },
}

impl InputError {
    pub fn field(&self) -> Field {
        match self {
            InputError::Empty { field }
            | InputError::NotANumber { field, .. }
            | InputError::NotFinite { field, .. } => *field,
        }
    }
}

/// Rejected row-count bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_rows must be at least 1")]
    NoRows,

    #[error("min_rows ({min_rows}) exceeds max_rows ({max_rows})")]
    InvertedBounds { min_rows: usize, max_rows: usize },
}
