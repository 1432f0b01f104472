use std::fmt;

/// Error type for building expressions and truth tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operator tag outside the known set.
    InvalidOperator(String),
    /// Table whose shape violates the truth-table invariants.
    MalformedTable(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidOperator(tag) => write!(f, "Invalid operator: {}", tag),
            Error::MalformedTable(msg) => write!(f, "Malformed table: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T, E = Error> = std::result::Result<T, E>;
