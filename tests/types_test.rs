use eml_roster::*;

fn record(email: &str, name: &str) -> Record {
    Record {
        date: String::new(),
        name: name.to_string(),
        phone_number: "091 000 0000".to_string(),
        email: email.to_string(),
    }
}

// --- Record ---

#[test]
fn test_record_cells_follow_headers() {
    let r = Record {
        date: "01.03.2024 10:00:00".into(),
        name: "Jane Doe".into(),
        phone_number: "+1-555-0100".into(),
        email: "jane@example.com".into(),
    };

    assert_eq!(HEADERS, ["Datum", "Ime", "Broj Mobitela", "Email"]);
    assert_eq!(
        r.cells(),
        ["01.03.2024 10:00:00", "Jane Doe", "+1-555-0100", "jane@example.com"]
    );
}

#[test]
fn test_record_display() {
    assert_eq!(record("a@b.hr", "Ana").to_string(), "Ana <a@b.hr>");
}

#[test]
fn test_record_field_names() {
    let json = serde_json::to_value(record("a@b.hr", "Ana")).unwrap();

    assert_eq!(json["Date"], "");
    assert_eq!(json["Name"], "Ana");
    assert_eq!(json["PhoneNumber"], "091 000 0000");
    assert_eq!(json["Email"], "a@b.hr");
}

// --- RecordSet ---

#[test]
fn test_record_set_last_write_wins() {
    let mut set = RecordSet::new();
    assert!(set.insert(record("a@b.hr", "First")).is_none());

    let replaced = set.insert(record("a@b.hr", "Second"));

    assert_eq!(replaced.map(|r| r.name), Some("First".to_string()));
    assert_eq!(set.len(), 1);
    assert_eq!(set.get("a@b.hr").unwrap().name, "Second");
}

#[test]
fn test_record_set_distinct_emails() {
    let set: RecordSet = vec![
        record("b@x.hr", "B"),
        record("a@x.hr", "A"),
        record("b@x.hr", "B2"),
    ]
    .into_iter()
    .collect();

    assert_eq!(set.len(), 2);
    let names: Vec<_> = set.records().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B2"]);
}

#[test]
fn test_record_set_email_is_case_sensitive_key() {
    let set: RecordSet = [record("A@x.hr", "Upper"), record("a@x.hr", "Lower")]
        .into_iter()
        .collect();

    assert_eq!(set.len(), 2);
}

#[test]
fn test_record_set_empty() {
    let set = RecordSet::new();
    assert!(set.is_empty());
    assert!(set.into_records().is_empty());
}
