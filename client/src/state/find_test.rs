use super::*;
use serde_json::json;

fn with_dates(from: &str, to: &str) -> FindState {
    let mut state = FindState::default();
    state.query.date_from = from.to_owned();
    state.query.date_to = to.to_owned();
    state
}

#[test]
fn default_shows_initial_message() {
    let state = FindState::default();
    assert_eq!(state.message, INITIAL_MESSAGE);
    assert!(state.rows.is_empty());
}

#[test]
fn prepare_without_dates_clears_rows_and_prompts() {
    let mut state = with_dates("", " ");
    state.rows.push(ReportRow::default());
    assert!(state.prepare().is_none());
    assert!(state.rows.is_empty());
    assert_eq!(state.message, DATE_REQUIRED_MESSAGE);
    assert!(!state.loading);
}

#[test]
fn prepare_with_one_date_trims_query() {
    let mut state = with_dates(" 2025-01-01 ", "");
    state.query.patient_name = "  Lin ".to_owned();
    let query = state.prepare().unwrap();
    assert_eq!(query.date_from, "2025-01-01");
    assert_eq!(query.patient_name, "Lin");
    assert!(state.loading);
}

#[test]
fn apply_rows_projects_columns() {
    let mut state = with_dates("2025-01-01", "");
    state.prepare();
    state.apply(Ok(records::normalize_rows(json!({
        "items": [{ "json": { "record_id": "R1", "T_stage": "T1a", "tumor_size_cm": 2.5 } }]
    }))));
    assert!(!state.loading);
    assert!(state.message.is_empty());
    assert_eq!(state.rows.len(), 1);
    assert_eq!(state.rows[0].record_id, "R1");
    assert_eq!(state.rows[0].t_stage, "T1a");
    assert_eq!(state.rows[0].tumor_size_cm, "2.5");
}

#[test]
fn apply_empty_shows_not_found() {
    let mut state = with_dates("2025-01-01", "");
    state.apply(Ok(records::normalize_rows(json!([]))));
    assert!(state.rows.is_empty());
    assert_eq!(state.message, NOT_FOUND_MESSAGE);
}

#[test]
fn failures_and_malformed_bodies_get_distinct_message() {
    let mut state = with_dates("2025-01-01", "");
    state.apply(Err("query failed: 500".to_owned()));
    assert_eq!(state.message, "Query failed: query failed: 500");

    state.apply(Ok(QueryRows::Malformed("unexpected response body: string".to_owned())));
    assert!(state.message.starts_with("Query failed: "));
    assert_ne!(state.message, NOT_FOUND_MESSAGE);
}

#[test]
fn reset_restores_defaults() {
    let mut state = with_dates("2025-01-01", "2025-02-01");
    state.apply(Ok(QueryRows::Empty));
    state.reset();
    assert_eq!(state, FindState::default());
}
