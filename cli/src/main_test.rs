use super::*;

fn query_args(from: &str, to: &str) -> QueryArgs {
    QueryArgs {
        url: String::new(),
        patient_id: " P1 ".to_owned(),
        patient_name: String::new(),
        date_from: from.to_owned(),
        date_to: to.to_owned(),
    }
}

#[test]
fn cli_parses_save_draft() {
    let cli = Cli::try_parse_from(["lungstage-cli", "save", "record.json", "--draft"]).unwrap();
    assert!(matches!(cli.command, Command::Save { draft: true, .. }));
}

#[test]
fn cli_requires_observation_words() {
    assert!(Cli::try_parse_from(["lungstage-cli", "generate"]).is_err());
}

#[test]
fn build_query_requires_a_date() {
    assert!(matches!(build_query(&query_args("", " ")), Err(CliError::MissingDateBound)));
}

#[test]
fn build_query_trims_fields() {
    let query = build_query(&query_args("2025-01-01", "")).unwrap();
    assert_eq!(query.patient_id, "P1");
    assert_eq!(query.date_from, "2025-01-01");
}

#[test]
fn check_record_reports_missing_fields() {
    let record = StagingRecord::from_json(r#"{"record_id":"R1"}"#).unwrap();
    let err = check_record(&record).unwrap_err();
    assert!(!err.0.is_empty());
    assert!(CliError::from(err).to_string().starts_with("Please complete the following required fields"));
}

#[test]
fn check_record_accepts_complete_record() {
    let record = StagingRecord::from_json(
        r#"{
            "record_id": "R1",
            "patient_name": "Chen",
            "patient_info": "M/67",
            "imaging_date": "2025-03-04",
            "Imaging Modality": "CT",
            "tumor_location": "RUL",
            "tumor_size_cm": "2.3",
            "T_stage": "T1c",
            "N_stage": "N0",
            "M_stage": "M0",
            "imp": { "T": "T1c", "N": "N0", "M": "M0" }
        }"#,
    )
    .unwrap();
    assert!(check_record(&record).is_ok());
}

#[test]
fn format_row_is_tab_separated() {
    let row = ReportRow { record_id: "R1".to_owned(), t_stage: "T1a".to_owned(), ..ReportRow::default() };
    let line = format_row(&row);
    assert_eq!(line.split('\t').count(), 9);
    assert!(line.contains("R1"));
}
