//! Contact records.

use std::fmt;

use crate::validate;

/// The two kinds of contact a person can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKind {
    Phone,
    Email,
}

impl ContactKind {
    pub const ALL: [Self; 2] = [Self::Phone, Self::Email];

    /// Keyword used on the command line, also the key in exported JSON.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }

    /// Label printed in front of the list when a record is displayed.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Phone => "phone(s)",
            Self::Email => "email(s)",
        }
    }

    /// Check `value` against the pattern for this kind.
    #[must_use]
    pub fn accepts(self, value: &str) -> bool {
        match self {
            Self::Phone => validate::is_valid_phone(value),
            Self::Email => validate::is_valid_email(value),
        }
    }
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A named entry with its phone numbers and email addresses.
///
/// Values keep insertion order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub phones: Vec<String>,
    pub emails: Vec<String>,
}

impl Person {
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            phones: Vec::new(),
            emails: Vec::new(),
        }
    }

    /// Build a person holding a single contact of the given kind.
    #[must_use]
    pub fn with_contact(name: String, kind: ContactKind, value: String) -> Self {
        let mut person = Self::new(name);
        person.push(kind, value);
        person
    }

    pub fn push(&mut self, kind: ContactKind, value: String) {
        self.contacts_mut(kind).push(value);
    }

    #[must_use]
    pub fn contacts(&self, kind: ContactKind) -> &[String] {
        match kind {
            ContactKind::Phone => &self.phones,
            ContactKind::Email => &self.emails,
        }
    }

    const fn contacts_mut(&mut self, kind: ContactKind) -> &mut Vec<String> {
        match kind {
            ContactKind::Phone => &mut self.phones,
            ContactKind::Email => &mut self.emails,
        }
    }

    /// Exact match against any phone or email of this person.
    #[must_use]
    pub fn has_contact(&self, value: &str) -> bool {
        ContactKind::ALL
            .into_iter()
            .any(|kind| self.contacts(kind).iter().any(|c| c == value))
    }

    /// Name with its first character upper-cased, as shown to the user.
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Пользователь: {}", self.display_name())?;
        for kind in ContactKind::ALL {
            let values = self.contacts(kind);
            if !values.is_empty() {
                write!(f, "\n\t{}: {}", kind.label(), values.join(", "))?;
            }
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_capitalizes_first_char() {
        assert_eq!(Person::new("alice".to_string()).display_name(), "Alice");
        assert_eq!(Person::new("иван".to_string()).display_name(), "Иван");
        assert_eq!(Person::new(String::new()).display_name(), "");
    }

    #[test]
    fn test_display_skips_empty_lists() {
        let mut person = Person::with_contact(
            "bob".to_string(),
            ContactKind::Phone,
            "+1".to_string(),
        );
        person.push(ContactKind::Phone, "+2".to_string());

        assert_eq!(person.to_string(), "Пользователь: Bob\n\tphone(s): +1, +2\n");

        person.push(ContactKind::Email, "bob@mail.ru".to_string());
        assert_eq!(
            person.to_string(),
            "Пользователь: Bob\n\tphone(s): +1, +2\n\temail(s): bob@mail.ru\n"
        );
    }

    #[test]
    fn test_has_contact_is_exact() {
        let person = Person::with_contact(
            "bob".to_string(),
            ContactKind::Email,
            "bob@mail.ru".to_string(),
        );

        assert!(person.has_contact("bob@mail.ru"));
        assert!(!person.has_contact("bob@mail"));
        assert!(!person.has_contact("bob"));
    }
}
