use thiserror::Error;

/// Which kind of sheet row was being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Item,
    Entry,
}

impl std::fmt::Display for RowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Item => write!(f, "item"),
            Self::Entry => write!(f, "journal entry"),
        }
    }
}

/// Errors produced while ingesting rows or querying a catalog.
#[derive(Debug, Error)]
pub enum HgTeaError {
    /// The row does not have the shape the schema requires
    #[error("Malformed {kind} row: expected at least {expected} columns, got {actual}")]
    Structural {
        kind: RowKind,
        expected: usize,
        actual: usize,
    },

    /// A non-empty field could not be converted to its expected type
    #[error("Invalid {field} value {value:?}: {reason}")]
    Parse {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// No item with the requested id exists
    #[error("Could not retrieve tea by id: {0}")]
    NotFound(u32),
}

impl HgTeaError {
    pub fn structural(kind: RowKind, expected: usize, actual: usize) -> Self {
        Self::Structural {
            kind,
            expected,
            actual,
        }
    }

    pub fn parse(field: &'static str, value: impl Into<String>, reason: impl ToString) -> Self {
        Self::Parse {
            field,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
