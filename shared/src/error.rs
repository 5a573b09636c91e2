use std::fmt;

use crate::constants::{
    DUPLICATE_NAME_ERROR, EMPTY_NAME_ERROR, NOT_ENOUGH_NAMES_ERROR, UNKNOWN_ENTRANT_ERROR,
};

/// Rejected wheel operations. None of these leave the roster modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WheelError {
    EmptyName,
    DuplicateEntrant(String),
    InsufficientEntrants { count: usize },
    /// Roster position past the end of the roster.
    UnknownEntrant { index: usize, count: usize },
}

impl WheelError {
    /// Text shown to the user in the inline alert.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyName => EMPTY_NAME_ERROR,
            Self::DuplicateEntrant(_) => DUPLICATE_NAME_ERROR,
            Self::InsufficientEntrants { .. } => NOT_ENOUGH_NAMES_ERROR,
            Self::UnknownEntrant { .. } => UNKNOWN_ENTRANT_ERROR,
        }
    }
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name is empty"),
            Self::DuplicateEntrant(name) => write!(f, "Duplicate entrant: {}", name),
            Self::InsufficientEntrants { count } => {
                write!(f, "Need at least 2 entrants to spin, have {}", count)
            }
            Self::UnknownEntrant { index, count } => {
                write!(f, "No entrant at index {} of {}", index, count)
            }
        }
    }
}

impl std::error::Error for WheelError {}

#[derive(Debug)]
pub enum StorageError {
    Unavailable,
    Write(String),
    Serialize(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "Storage unavailable"),
            Self::Write(e) => write!(f, "Storage write failed: {}", e),
            Self::Serialize(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialize(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialize(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Roster;

    #[test]
    fn test_blank_name_surfaces_prompt() {
        let mut roster = Roster::from_names(["Ana"]);
        let err = roster.add(" \t ").unwrap_err();
        assert_eq!(err, WheelError::EmptyName);
        assert_eq!(err.user_message(), EMPTY_NAME_ERROR);
        assert_eq!(roster.count(), 1);
    }

    #[test]
    fn test_unknown_entrant_message_names_index() {
        let err = WheelError::UnknownEntrant { index: 7, count: 5 };
        assert_eq!(err.to_string(), "No entrant at index 7 of 5");
        assert_eq!(err.user_message(), UNKNOWN_ENTRANT_ERROR);
    }
}
