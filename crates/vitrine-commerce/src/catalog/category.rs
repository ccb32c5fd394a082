//! Ordered category name list.

use serde::{Deserialize, Serialize};

/// The shop's categories: an ordered, duplicate-free list of names.
///
/// The name string is the category's identity (case-sensitive exact
/// match). Removing a name never touches products tagged with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct CategoryList {
    names: Vec<String>,
}

impl CategoryList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from names, dropping empties and duplicates.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for name in names {
            list.add(name.into());
        }
        list
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// The first category, in insertion order.
    pub fn first(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Append a category. No-op when the trimmed name is empty or
    /// already present; returns whether the list changed.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Remove a category name unconditionally; returns whether it was
    /// present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_rejects_empty_and_duplicates() {
        let mut list = CategoryList::new();
        assert!(list.add("Cadernos"));
        assert!(!list.add(""));
        assert!(!list.add("   "));
        assert!(!list.add("Cadernos"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_duplicate_match_is_case_sensitive() {
        let mut list = CategoryList::new();
        list.add("Painéis");
        assert!(list.add("painéis"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_insertion_order_survives_removal() {
        let mut list = CategoryList::from_names(["A", "B", "C"]);
        assert!(list.remove("B"));
        assert!(!list.remove("B"));
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["A", "C"]);
        assert_eq!(list.first(), Some("A"));
    }

    #[test]
    fn test_no_duplicates_over_any_sequence() {
        let mut list = CategoryList::new();
        for name in ["X", "Y", "X", "Z", "Y"] {
            list.add(name);
        }
        list.remove("X");
        list.add("X");
        let names: Vec<_> = list.iter().collect();
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names, deduped);
        assert_eq!(names, vec!["Y", "Z", "X"]);
    }
}
