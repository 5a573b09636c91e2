use serde::{Deserialize, Serialize};

use crate::error::WheelError;

/// Ordered list of unique, non-empty entrant names.
///
/// Serializes as a plain JSON array of strings. Deserialization goes through
/// [`Roster::from_names`] so stored data can never break the invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Rebuilds a roster from untrusted input. Names are trimmed; empty names
    /// and repeats are dropped, first occurrence wins.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Self::new();
        for name in names {
            if let Err(e) = roster.add(name.as_ref()) {
                log::debug!("Skipping stored entrant: {}", e);
            }
        }
        roster
    }

    /// Adds a trimmed name to the end of the roster.
    pub fn add(&mut self, name: &str) -> Result<(), WheelError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WheelError::EmptyName);
        }
        if self.contains(name) {
            return Err(WheelError::DuplicateEntrant(name.to_string()));
        }
        self.names.push(name.to_string());
        log::debug!("Added entrant {:?}, roster size {}", name, self.names.len());
        Ok(())
    }

    /// Removes a name by value. Returns whether anything was removed; removing
    /// a name that is not present is not an error.
    pub fn remove(&mut self, name: &str) -> bool {
        let name = name.trim();
        let before = self.names.len();
        self.names.retain(|n| n != name);
        let removed = self.names.len() != before;
        if removed {
            log::debug!("Removed entrant {:?}, roster size {}", name, self.names.len());
        }
        removed
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn list(&self) -> &[String] {
        &self.names
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn count(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for Roster {
    fn from(names: Vec<String>) -> Self {
        Self::from_names(names)
    }
}

impl From<Roster> for Vec<String> {
    fn from(roster: Roster) -> Self {
        roster.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_preserves_order() {
        let mut roster = Roster::new();
        roster.add("  Ana ").unwrap();
        roster.add("Bo").unwrap();
        roster.add("Cy\t").unwrap();
        assert_eq!(roster.list(), &["Ana", "Bo", "Cy"]);
        assert_eq!(roster.count(), 3);
    }

    #[test]
    fn test_add_empty_name_rejected() {
        let mut roster = Roster::from_names(["Ana"]);
        assert_eq!(roster.add(""), Err(WheelError::EmptyName));
        assert_eq!(roster.add("   "), Err(WheelError::EmptyName));
        assert_eq!(roster.list(), &["Ana"]);
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let mut roster = Roster::new();
        roster.add("Ana").unwrap();
        assert_eq!(
            roster.add(" Ana "),
            Err(WheelError::DuplicateEntrant("Ana".to_string()))
        );
        assert_eq!(roster.count(), 1);
    }

    #[test]
    fn test_duplicates_are_case_sensitive() {
        let mut roster = Roster::new();
        roster.add("ana").unwrap();
        roster.add("Ana").unwrap();
        assert_eq!(roster.count(), 2);
    }

    #[test]
    fn test_repeated_adds_never_duplicate() {
        let mut roster = Roster::new();
        let inputs = ["a", "b", "a", " b", "c", "", "c ", "a", "  "];
        for input in inputs {
            let _ = roster.add(input);
        }
        assert_eq!(roster.list(), &["a", "b", "c"]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut roster = Roster::from_names(["Ana", "Bo"]);
        assert!(!roster.remove("Cy"));
        assert_eq!(roster.list(), &["Ana", "Bo"]);
        assert!(roster.remove("Ana"));
        assert!(!roster.remove("Ana"));
        assert_eq!(roster.list(), &["Bo"]);
    }

    #[test]
    fn test_from_names_drops_invalid_entries() {
        let roster = Roster::from_names(["Ana", "", "Bo", "Ana", "  ", " Cy"]);
        assert_eq!(roster.list(), &["Ana", "Bo", "Cy"]);
    }

    #[test]
    fn test_serde_as_plain_array() {
        let roster = Roster::from_names(["Ana", "Bo"]);
        let json = serde_json::to_string(&roster).unwrap();
        assert_eq!(json, r#"["Ana","Bo"]"#);

        let parsed: Roster = serde_json::from_str(r#"["Ana","Ana"," ","Bo"]"#).unwrap();
        assert_eq!(parsed.list(), &["Ana", "Bo"]);
    }
}
