//! Export document model and its writer.
//!
//! The writer lays out objects with fixed indentation and does not escape
//! string contents, so values containing `"` or `\` are written as-is.

use std::fmt;

use crate::person::{ContactKind, Person};
use crate::store::RecordStore;

const ENTRY_INDENT: &str = "    ";
const ELEMENT_INDENT: &str = "      ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Array(Vec<String>),
}

/// An object whose keys keep the order they were inserted in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Object {
    entries: Vec<(String, Value)>,
}

impl Object {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing an earlier value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl From<&Person> for Object {
    fn from(person: &Person) -> Self {
        ContactKind::ALL.into_iter().fold(
            Self::new().with("name", Value::String(person.name.clone())),
            |object, kind| {
                object.with(kind.keyword(), Value::Array(person.contacts(kind).to_vec()))
            },
        )
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Array(items) if items.is_empty() => f.write_str("[]"),
            Self::Array(items) => {
                f.write_str("[\n")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",\n")?;
                    }
                    write!(f, "{ELEMENT_INDENT}\"{item}\"")?;
                }
                write!(f, "\n{ENTRY_INDENT}]")
            }
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n  {{\n{ENTRY_INDENT}")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ",\n{ENTRY_INDENT}")?;
            }
            write!(f, "\"{key}\": {value}")?;
        }
        f.write_str("\n  }\n")
    }
}

/// Top-level array of objects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document(pub Vec<Object>);

impl From<&RecordStore> for Document {
    fn from(store: &RecordStore) -> Self {
        Self(store.iter().map(Object::from).collect())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, object) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{object}")?;
        }
        f.write_str("]")
    }
}

/// Render the whole store as export text.
#[must_use]
pub fn render_store(store: &RecordStore) -> String {
    Document::from(store).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_person_layout() {
        let mut store = RecordStore::new();
        store.add_contact("alice", ContactKind::Phone, "+123");

        let expected = "[\n  {\n    \"name\": \"alice\",\n    \"phone\": [\n      \"+123\"\n    ],\n    \"email\": []\n  }\n]";
        assert_eq!(render_store(&store), expected);
    }

    #[test]
    fn test_objects_are_joined_with_comma_space() {
        let mut store = RecordStore::new();
        store.add_contact("a", ContactKind::Email, "a@b.co");
        store.add_contact("b", ContactKind::Phone, "+1");
        store.add_contact("b", ContactKind::Phone, "+2");

        let expected = concat!(
            "[\n  {\n    \"name\": \"a\",\n    \"phone\": [],\n    \"email\": [\n      \"a@b.co\"\n    ]\n  }\n",
            ", \n  {\n    \"name\": \"b\",\n    \"phone\": [\n      \"+1\",\n      \"+2\"\n    ],\n    \"email\": []\n  }\n]",
        );
        assert_eq!(render_store(&store), expected);
    }

    #[test]
    fn test_empty_store_renders_empty_array() {
        assert_eq!(render_store(&RecordStore::new()), "[]");
    }

    #[test]
    fn test_person_object_key_order() {
        let person = Person::with_contact("x".to_string(), ContactKind::Phone, "+9".to_string());
        let object = Object::from(&person);

        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["name", "phone", "email"]);
        assert_eq!(object.get("email"), Some(&Value::Array(Vec::new())));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut object = Object::new()
            .with("name", Value::String("a".to_string()))
            .with("phone", Value::Array(Vec::new()));
        object.insert("name", Value::String("b".to_string()));

        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["name", "phone"]);
        assert_eq!(object.get("name"), Some(&Value::String("b".to_string())));
    }

    #[test]
    fn test_strings_are_not_escaped() {
        let object = Object::new().with("name", Value::String("a\"b".to_string()));
        assert_eq!(object.to_string(), "\n  {\n    \"name\": \"a\"b\"\n  }\n");
    }
}
