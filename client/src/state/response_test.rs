use super::*;
use records::MemoryStorage;

fn store() -> ClientStore<MemoryStorage> {
    ClientStore::new(MemoryStorage::new())
}

#[test]
fn load_with_nothing_stored_shows_placeholders() {
    let state = ResponseState::load(&store());
    assert_eq!(state.report_text, REPORT_PLACEHOLDER);
    assert_eq!(state.preview_badge, PreviewBadge::Empty);
    assert_eq!(state.json_text, JSON_PLACEHOLDER);
    assert_eq!(state.json_status, JsonStatus::Empty);
    assert_eq!(state.json_status.label(), "empty");
}

#[test]
fn load_pretty_prints_stored_json() {
    let store = store();
    store.set_generated_report_json(r#"{"record_id":"R1"}"#).unwrap();
    store.set_report_text("Report body").unwrap();

    let state = ResponseState::load(&store);
    assert_eq!(state.report_text, "Report body");
    assert!(state.has_report_text());
    assert_eq!(state.json_text, "{\n  \"record_id\": \"R1\"\n}");
    assert_eq!(state.json_status, JsonStatus::Parsed);
}

#[test]
fn load_shows_unparseable_json_raw() {
    let store = store();
    store.backend().set("generatedReport", "{broken").unwrap();
    let state = ResponseState::load(&store);
    assert_eq!(state.json_text, "{broken");
    assert_eq!(state.json_status, JsonStatus::ParseWarning);
}

#[test]
fn download_wraps_invalid_json() {
    let mut state = ResponseState { json_text: "{broken".to_owned(), ..ResponseState::default() };
    let payload: Value = serde_json::from_str(&state.download_payload()).unwrap();
    assert_eq!(payload, serde_json::json!({ "raw": "{broken" }));

    state.json_text = r#"{"a":1}"#.to_owned();
    assert_eq!(state.download_payload(), r#"{"a":1}"#);
}

#[test]
fn validate_success_pretty_prints_and_persists() {
    let store = store();
    let mut state = ResponseState { json_text: r#"{"record_id":"R2"}"#.to_owned(), ..ResponseState::default() };
    state.validate(&store).unwrap();
    assert_eq!(state.json_status, JsonStatus::Valid);
    assert!(state.json_text.contains("\n"));
    assert_eq!(store.generated_report().unwrap().record_id, "R2");
}

#[test]
fn validate_failure_leaves_storage_untouched() {
    let store = store();
    store.set_generated_report_json(r#"{"record_id":"KEEP"}"#).unwrap();
    let mut state = ResponseState { json_text: "{oops".to_owned(), ..ResponseState::default() };
    assert!(state.validate(&store).is_err());
    assert_eq!(state.json_status, JsonStatus::Invalid);
    assert_eq!(state.json_text, "{oops");
    assert_eq!(store.generated_report().unwrap().record_id, "KEEP");
}

#[test]
fn proceed_persists_record_and_text() {
    let store = store();
    let state = ResponseState {
        report_text: "Narrative".to_owned(),
        preview_badge: PreviewBadge::Loaded,
        json_text: r#"{"record_id":"R3"}"#.to_owned(),
        json_status: JsonStatus::Parsed,
    };
    state.proceed(&store).unwrap();
    assert_eq!(store.generated_report().unwrap().record_id, "R3");
    assert_eq!(store.generated_report_text().as_deref(), Some("Narrative"));
}

#[test]
fn proceed_with_invalid_json_writes_nothing() {
    let store = store();
    let state = ResponseState {
        report_text: "Narrative".to_owned(),
        preview_badge: PreviewBadge::Loaded,
        json_text: "[1, 2]".to_owned(),
        json_status: JsonStatus::Parsed,
    };
    assert!(matches!(state.proceed(&store), Err(StoreError::NotAnObject { .. })));
    assert!(store.generated_report_raw().is_none());
    assert!(store.generated_report_text().is_none());
}
