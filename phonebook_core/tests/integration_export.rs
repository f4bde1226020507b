//! Export text read back with a general JSON parser.
//!
//! Nothing in the crate imports exported files; these tests check that the
//! writer keeps every person and every list entry that it is given.

use phonebook_core::json::render_store;
use phonebook_core::{ContactKind, RecordStore};
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Eq)]
struct ExportedPerson {
    name: String,
    phone: Vec<String>,
    email: Vec<String>,
}

fn parse(text: &str) -> Vec<ExportedPerson> {
    serde_json::from_str(text).expect("export is valid JSON")
}

#[test]
fn test_single_person_with_empty_email_list() {
    let mut store = RecordStore::new();
    store.add_contact("alice", ContactKind::Phone, "+123");

    let persons = parse(&render_store(&store));
    assert_eq!(
        persons,
        vec![ExportedPerson {
            name: "alice".to_string(),
            phone: vec!["+123".to_string()],
            email: Vec::new(),
        }]
    );
}

#[test]
fn test_round_trip_preserves_persons_and_order() {
    let mut store = RecordStore::new();
    store.add_contact("alice", ContactKind::Phone, "+1");
    store.add_contact("bob", ContactKind::Email, "bob@mail.ru");
    store.add_contact("alice", ContactKind::Email, "alice@mail.ru");
    store.add_contact("alice", ContactKind::Phone, "+2");
    store.add_contact("alice", ContactKind::Phone, "+1");
    store.add_contact("carol", ContactKind::Phone, "++3");

    let persons = parse(&render_store(&store));
    assert_eq!(persons.len(), store.len());

    for (exported, person) in persons.iter().zip(store.iter()) {
        assert_eq!(exported.name, person.name);
        assert_eq!(exported.phone, person.phones);
        assert_eq!(exported.email, person.emails);
    }
}

#[test]
fn test_keys_appear_in_fixed_order() {
    let mut store = RecordStore::new();
    store.add_contact("dan", ContactKind::Email, "d@x.io");

    let text = render_store(&store);
    let name_at = text.find("\"name\"").expect("name key");
    let phone_at = text.find("\"phone\"").expect("phone key");
    let email_at = text.find("\"email\"").expect("email key");
    assert!(name_at < phone_at && phone_at < email_at);
    assert!(text.contains("\"phone\": []"));
}

#[test]
fn test_parsed_value_matches_document_shape() {
    let mut store = RecordStore::new();
    store.add_contact("a", ContactKind::Phone, "+1");
    store.add_contact("b", ContactKind::Phone, "+2");

    let value: serde_json::Value =
        serde_json::from_str(&render_store(&store)).expect("export is valid JSON");
    let array = value.as_array().expect("top level is an array");
    assert_eq!(array.len(), 2);
    assert_eq!(array[1]["name"], "b");
    assert_eq!(array[1]["phone"][0], "+2");
    assert_eq!(array[1]["email"], serde_json::json!([]));
}
