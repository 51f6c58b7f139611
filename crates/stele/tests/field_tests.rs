//! Tests for the persistence-field adapter: the load/save conversion
//! contract and filter-operand preparation.

use stele::prelude::*;

enumeration! {
    static PRIORITY: "priority" {
        LOW = (10, "low"),
        NORMAL = (20, "normal"),
        HIGH = (30, "high", "High priority"),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

#[test]
fn test_save_then_load_round_trip() {
    init_tracing();
    let field = EnumField::new(&PRIORITY);

    for item in PRIORITY.get_items() {
        let stored = field.to_stored(Some(item));
        assert_eq!(stored, Some(item.value()));
        let loaded = field.from_stored(stored).unwrap();
        assert_eq!(loaded, Some(item));
    }
}

#[test]
fn test_null_round_trip() {
    let field = EnumField::new(&PRIORITY);
    assert_eq!(field.to_stored(None), None);
    assert_eq!(field.from_stored(None::<i64>).unwrap(), None);
}

#[test]
fn test_load_from_stringified_column_value() {
    // Some backends hand integer columns back as text.
    let field = EnumField::new(&PRIORITY);
    let loaded = field.from_stored("20").unwrap();
    assert_eq!(loaded.map(|i| i.slug()), Some("normal"));
}

#[test]
fn test_load_failure_identifies_the_value() {
    let field = EnumField::new(&PRIORITY);
    let err = field.from_stored(40).unwrap_err();
    assert!(err.to_string().contains("40"));
    assert!(err.to_string().contains("priority"));
}

#[test]
fn test_choices_for_selection_ui() {
    let field = EnumField::new(&PRIORITY);
    let labels: Vec<_> = field.choices().into_iter().map(|(_, label)| label).collect();
    assert_eq!(labels, ["Low", "Normal", "High priority"]);
}

#[test]
fn test_filter_operand_coercion_matches_load_path() {
    let field = EnumField::new(&PRIORITY);

    // A slug operand in an equality filter prepares to the stored integer.
    let prepared = field
        .prep_lookup(Lookup::Exact(RawValue::from("high")))
        .unwrap();
    assert_eq!(prepared, [Some(30)]);

    // Inclusion filters prepare each operand independently.
    let prepared = field
        .prep_lookup(Lookup::In(vec![
            RawValue::from(10),
            RawValue::from("normal"),
            RawValue::from(&PRIORITY["HIGH"]),
        ]))
        .unwrap();
    assert_eq!(prepared, [Some(10), Some(20), Some(30)]);
}

#[test]
fn test_unsupported_filter_kind_is_fatal_to_that_operation() {
    let field = EnumField::new(&PRIORITY);
    let err = field
        .prep_lookup(Lookup::GreaterThan(RawValue::from(10)))
        .unwrap_err();
    assert_eq!(err, FieldError::UnsupportedLookup { kind: "gt" });

    // The field itself remains usable afterwards.
    assert!(field.from_stored(10).is_ok());
}

#[test]
fn test_raw_value_deserializes_from_stored_json() {
    // The raw side of the load path: a JSON column value deserializes
    // straight into the coercion input.
    let field = EnumField::new(&PRIORITY);

    let raw: RawValue = serde_json::from_str("30").unwrap();
    let loaded = field.from_stored(raw).unwrap();
    assert_eq!(loaded.map(|i| i.display()), Some("High priority"));

    let raw: RawValue = serde_json::from_str("null").unwrap();
    assert_eq!(field.from_stored(raw).unwrap(), None);
}

#[test]
fn test_member_serializes_as_stored_value() {
    let json = serde_json::to_string(&PRIORITY["LOW"]).unwrap();
    assert_eq!(json, "10");
}
