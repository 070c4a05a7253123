use super::*;

fn store() -> ClientStore<MemoryStorage> {
    ClientStore::new(MemoryStorage::new())
}

#[test]
fn keys_match_browser_storage_names() {
    assert_eq!(StorageKey::GeneratedReport.as_str(), "generatedReport");
    assert_eq!(StorageKey::GeneratedReportText.as_str(), "generatedReport_text");
    assert_eq!(StorageKey::LastObservation.as_str(), "lastObservation");
    assert_eq!(StorageKey::ReportText.as_str(), "reportText");
    assert_eq!(StorageKey::LungRadsCategory.as_str(), "lungRadsCategory");
    assert_eq!(StorageKey::DoctorAuth.as_str(), "doctorAuth");
}

#[test]
fn generated_report_round_trips() {
    let store = store();
    let record = StagingRecord { record_id: "R7".to_owned(), ..StagingRecord::default() };
    store.set_generated_report(&record).unwrap();
    assert_eq!(store.generated_report(), Some(record));
}

#[test]
fn unparseable_report_reads_as_none() {
    let store = store();
    store.backend().set("generatedReport", "{oops").unwrap();
    assert!(store.generated_report().is_none());
    assert_eq!(store.stored_report(), StoredReport::Invalid { raw: "{oops".to_owned() });
}

#[test]
fn stored_report_pretty_prints() {
    let store = store();
    store.backend().set("generatedReport", r#"{"a":1}"#).unwrap();
    assert_eq!(store.stored_report(), StoredReport::Parsed { pretty: "{\n  \"a\": 1\n}".to_owned() });
    assert_eq!(ClientStore::new(MemoryStorage::new()).stored_report(), StoredReport::Missing);
}

#[test]
fn json_write_is_canonicalized() {
    let store = store();
    store.set_generated_report_json("{\n  \"T_stage\": \"T1a\"\n}").unwrap();
    assert_eq!(store.generated_report_raw().as_deref(), Some(r#"{"T_stage":"T1a"}"#));
}

#[test]
fn json_write_rejects_non_objects_without_touching_storage() {
    let store = store();
    store.set_generated_report_json(r#"{"keep":true}"#).unwrap();

    let err = store.set_generated_report_json("[1,2]").unwrap_err();
    assert!(matches!(err, StoreError::NotAnObject { key: "generatedReport" }));
    let err = store.set_generated_report_json("not json").unwrap_err();
    assert!(matches!(err, StoreError::InvalidJson(_)));

    assert_eq!(store.generated_report_raw().as_deref(), Some(r#"{"keep":true}"#));
}

#[test]
fn blank_text_is_refused() {
    let store = store();
    assert!(matches!(store.set_report_text("  \n"), Err(StoreError::Blank { key: "reportText" })));
    assert!(store.report_text().is_none());
}

#[test]
fn blank_stored_text_reads_as_none() {
    let store = store();
    store.backend().set("reportText", "   ").unwrap();
    assert!(store.report_text().is_none());
}

#[test]
fn clear_helpers_remove_keys() {
    let store = store();
    store.set_last_observation("nodule").unwrap();
    store.backend().set("doctorAuth", "token").unwrap();
    store.clear_last_observation();
    store.clear_doctor_auth();
    assert!(store.last_observation().is_none());
    assert!(store.backend().get("doctorAuth").is_none());
}

#[test]
fn record_context_reads_category_and_observation() {
    let store = store();
    store.backend().set("lungRadsCategory", "3").unwrap();
    store.set_last_observation("GGO 8 mm").unwrap();
    let ctx = store.record_context();
    assert_eq!(ctx.lung_rads_category.as_deref(), Some("3"));
    assert_eq!(ctx.last_observation.as_deref(), Some("GGO 8 mm"));
}
