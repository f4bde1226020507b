//! The in-memory record store.

use std::collections::HashMap;

use tracing::debug;

use crate::person::{ContactKind, Person};

/// Mapping from name to [`Person`], iterated in the order names were first added.
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    persons: Vec<Person>,
    index: HashMap<String, usize>,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the person's list of `kind`, creating the person if needed.
    ///
    /// The value is stored as given; callers validate beforehand.
    pub fn add_contact(&mut self, name: &str, kind: ContactKind, value: &str) {
        if let Some(&slot) = self.index.get(name) {
            debug!("Appending {kind} to existing record {name}");
            self.persons[slot].push(kind, value.to_string());
        } else {
            debug!("Creating record {name} with {kind}");
            self.index.insert(name.to_string(), self.persons.len());
            self.persons.push(Person::with_contact(
                name.to_string(),
                kind,
                value.to_string(),
            ));
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Person> {
        self.index.get(name).map(|&slot| &self.persons[slot])
    }

    /// Every person holding `value` as a phone or an email, in store order.
    #[must_use]
    pub fn find_by_contact(&self, value: &str) -> Vec<&Person> {
        self.persons
            .iter()
            .filter(|person| person.has_contact(value))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.persons.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_add_creates_then_appends() {
        let mut store = RecordStore::new();
        assert!(store.is_empty());

        store.add_contact("alice", ContactKind::Phone, "+1");
        store.add_contact("alice", ContactKind::Email, "a@b.co");
        store.add_contact("alice", ContactKind::Phone, "+2");

        assert_eq!(store.len(), 1);
        let alice = store.get("alice").expect("alice exists");
        assert_eq!(alice.phones, vec!["+1", "+2"]);
        assert_eq!(alice.emails, vec!["a@b.co"]);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_duplicates_are_kept_in_order() {
        let mut store = RecordStore::new();
        store.add_contact("bob", ContactKind::Phone, "+7");
        store.add_contact("bob", ContactKind::Phone, "+8");
        store.add_contact("bob", ContactKind::Phone, "+7");

        assert_eq!(store.get("bob").expect("bob").phones, vec!["+7", "+8", "+7"]);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_names_are_independent() {
        let mut store = RecordStore::new();
        store.add_contact("alice", ContactKind::Phone, "+1");
        store.add_contact("bob", ContactKind::Email, "bob@x.org");
        store.add_contact("alice", ContactKind::Phone, "+2");

        let bob = store.get("bob").expect("bob");
        assert!(bob.phones.is_empty());
        assert_eq!(bob.emails, vec!["bob@x.org"]);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_new_person_has_empty_other_list() {
        let mut store = RecordStore::new();
        store.add_contact("carol", ContactKind::Email, "c@d.ru");

        let carol = store.get("carol").expect("carol");
        assert!(carol.phones.is_empty());
        assert_eq!(carol.name, "carol");
    }

    #[test]
    fn test_find_by_contact_matches_either_list() {
        let mut store = RecordStore::new();
        store.add_contact("alice", ContactKind::Phone, "+1");
        store.add_contact("bob", ContactKind::Email, "shared@x.org");
        store.add_contact("carol", ContactKind::Phone, "+3");
        store.add_contact("alice", ContactKind::Email, "shared@x.org");

        let names: Vec<_> = store
            .find_by_contact("shared@x.org")
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["alice", "bob"]);

        assert!(store.find_by_contact("+").is_empty());
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut store = RecordStore::new();
        for name in ["zoe", "adam", "mia"] {
            store.add_contact(name, ContactKind::Phone, "+0");
        }
        let names: Vec<_> = store.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["zoe", "adam", "mia"]);
    }
}
