#![cfg(not(feature = "hydrate"))]

use super::*;
use records::StoredReport;

#[test]
fn reads_miss_outside_the_browser() {
    assert_eq!(BrowserStorage.get("reportText"), None);
}

#[test]
fn writes_are_accepted_and_dropped() {
    assert!(BrowserStorage.set("reportText", "text").is_ok());
    assert_eq!(BrowserStorage.get("reportText"), None);
    BrowserStorage.remove("reportText");
}

#[test]
fn client_store_reports_nothing_stored() {
    let store = client_store();
    assert!(store.generated_report().is_none());
    assert_eq!(store.stored_report(), StoredReport::Missing);
    assert!(store.report_text().is_none());
}

#[test]
fn client_store_still_enforces_value_rules() {
    let store = client_store();
    assert!(matches!(store.set_report_text("  "), Err(StoreError::Blank { .. })));
    assert!(matches!(
        store.set_generated_report_json("[1]"),
        Err(StoreError::NotAnObject { .. })
    ));
}
