use super::*;

fn complete_form() -> StagingForm {
    let mut form = StagingForm {
        record_id: "R-1".to_owned(),
        patient_name: "Chen".to_owned(),
        patient_info: "M/63".to_owned(),
        date: "2025-02-01".to_owned(),
        modalities: Modalities { ct: true, mri: false },
        size: TumorSize { kind: SizeKind::Measurable, value: "2.4".to_owned() },
        imp: Impression::from_stages("T1a", "N0", "M0"),
        ..StagingForm::default()
    };
    form.locations.set("RUL", true);
    form.t.set("T1a", true);
    form.n.set("N0", true);
    form.m.set("M0", true);
    form
}

// =============================================================
// validate
// =============================================================

#[test]
fn complete_form_validates() {
    assert_eq!(complete_form().validate(), Ok(()));
}

#[test]
fn empty_form_lists_every_rule_in_order() {
    let missing = StagingForm::default().missing_fields();
    assert_eq!(
        missing,
        vec![
            MissingField::RecordId,
            MissingField::PatientName,
            MissingField::PatientInfo,
            MissingField::ImagingDate,
            MissingField::Modality,
            MissingField::Location,
            MissingField::SizeKind,
            MissingField::TStage,
            MissingField::NStage,
            MissingField::MStage,
            MissingField::ImpressionT,
            MissingField::ImpressionN,
            MissingField::ImpressionM,
        ]
    );
}

#[test]
fn whitespace_only_text_counts_as_missing() {
    let mut form = complete_form();
    form.patient_name = "   ".to_owned();
    form.imp.m = " ".to_owned();
    assert_eq!(form.missing_fields(), vec![MissingField::PatientName, MissingField::ImpressionM]);
}

#[test]
fn single_code_satisfies_each_stage_rule() {
    let mut form = complete_form();
    form.t.clear();
    assert_eq!(form.missing_fields(), vec![MissingField::TStage]);
    form.t.set("T4nodule", true);
    assert!(form.validate().is_ok());
}

#[test]
fn other_location_text_satisfies_location_rule() {
    let mut form = complete_form();
    form.locations.clear();
    assert_eq!(form.missing_fields(), vec![MissingField::Location]);
    form.other_location = "carina".to_owned();
    assert!(form.validate().is_ok());
}

#[test]
fn either_modality_satisfies_modality_rule() {
    let mut form = complete_form();
    form.modalities = Modalities { ct: false, mri: true };
    assert!(form.validate().is_ok());
    form.modalities = Modalities::default();
    assert_eq!(form.missing_fields(), vec![MissingField::Modality]);
}

#[test]
fn measurable_without_value_is_invalid() {
    let mut form = complete_form();
    form.size = TumorSize { kind: SizeKind::Measurable, value: " ".to_owned() };
    assert_eq!(form.missing_fields(), vec![MissingField::SizeValue]);
}

#[test]
fn non_measurable_with_value_is_invalid() {
    let mut form = complete_form();
    form.size = TumorSize { kind: SizeKind::NonMeasurable, value: "3".to_owned() };
    assert_eq!(form.missing_fields(), vec![MissingField::SizeValueNotAllowed]);
}

#[test]
fn non_measurable_without_value_is_valid() {
    let mut form = complete_form();
    form.size = TumorSize { kind: SizeKind::NonMeasurable, value: String::new() };
    assert!(form.validate().is_ok());
}

#[test]
fn validation_message_bullets_each_label() {
    let err = ValidationError(vec![MissingField::RecordId, MissingField::TStage]);
    let msg = err.message();
    assert!(msg.contains("• Record ID"));
    assert!(msg.contains("• Tumor Invasion (T Classification)"));
    assert_eq!(msg.lines().count(), 3);
}

// =============================================================
// apply_record
// =============================================================

#[test]
fn t_stage_autofill_ticks_exactly_listed_codes() {
    let mut form = StagingForm::default();
    form.t.set("T2b", true);
    let record = StagingRecord { t_stage: "t1a, T3".to_owned(), ..StagingRecord::default() };
    form.apply_record(&record);
    assert_eq!(form.t.selected(), vec!["T1a", "T3"]);
}

#[test]
fn empty_stage_string_leaves_selection_untouched() {
    let mut form = StagingForm::default();
    form.n.set("N2", true);
    form.apply_record(&StagingRecord::default());
    assert_eq!(form.n.selected(), vec!["N2"]);
}

#[test]
fn unmatched_location_becomes_other_text() {
    let mut form = StagingForm::default();
    let record = StagingRecord { tumor_location: "rul, LLL, Left hilum".to_owned(), ..StagingRecord::default() };
    form.apply_record(&record);
    assert_eq!(form.locations.selected(), vec!["RUL", "LLL"]);
    assert_eq!(form.other_location, "Left hilum");
}

#[test]
fn every_unmatched_location_token_is_kept() {
    let mut form = StagingForm::default();
    let record = StagingRecord { tumor_location: "Left hilum, RUL, near carina".to_owned(), ..StagingRecord::default() };
    form.apply_record(&record);
    assert_eq!(form.locations.selected(), vec!["RUL"]);
    assert_eq!(form.other_location, "Left hilum, near carina");
}

#[test]
fn size_containing_non_selects_non_measurable() {
    let mut form = StagingForm::default();
    let record = StagingRecord { tumor_size_cm: "NON-MEASURABLE".to_owned(), ..StagingRecord::default() };
    form.apply_record(&record);
    assert_eq!(form.size, TumorSize { kind: SizeKind::NonMeasurable, value: String::new() });
}

#[test]
fn numeric_size_selects_measurable_with_value() {
    let mut form = StagingForm::default();
    let record = StagingRecord { tumor_size_cm: "3.1".to_owned(), ..StagingRecord::default() };
    form.apply_record(&record);
    assert_eq!(form.size, TumorSize { kind: SizeKind::Measurable, value: "3.1".to_owned() });
}

#[test]
fn modality_maps_onto_checkboxes() {
    let mut form = StagingForm::default();
    form.apply_record(&StagingRecord { imaging_modality: "mri".to_owned(), ..StagingRecord::default() });
    assert_eq!(form.modalities, Modalities { ct: false, mri: true });
}

#[test]
fn imaging_timestamp_is_normalized_to_date() {
    let mut form = StagingForm::default();
    let record = StagingRecord { imaging_date: "2025-06-30T08:15:00Z".to_owned(), ..StagingRecord::default() };
    form.apply_record(&record);
    assert_eq!(form.date, "2025-06-30");
}

// =============================================================
// to_record / round trip
// =============================================================

#[test]
fn to_record_builds_flat_record() {
    let mut form = complete_form();
    form.other_location = " pleura ".to_owned();
    let context = RecordContext {
        lung_rads_category: Some("4A".to_owned()),
        last_observation: Some("nodule in RUL".to_owned()),
    };
    let record = form.to_record(&context);
    assert_eq!(record.record_id, "R-1");
    assert_eq!(record.tumor_location, "RUL, pleura");
    assert_eq!(record.tumor_size_cm, "2.4");
    assert_eq!(record.t_stage, "T1a");
    assert_eq!(record.imaging_modality, "CT");
    assert_eq!(record.lung_rads_category.as_deref(), Some("4A"));
    assert_eq!(record.input.as_deref(), Some("nodule in RUL"));
    assert_eq!(record.filename.as_deref(), Some("R-1_2025-02-01.json"));
}

#[test]
fn non_measurable_is_written_as_literal() {
    let mut form = complete_form();
    form.size = TumorSize { kind: SizeKind::NonMeasurable, value: String::new() };
    assert_eq!(form.to_record(&RecordContext::default()).tumor_size_cm, NON_MEASURABLE);
}

#[test]
fn built_record_round_trips_through_autofill() {
    let mut original = complete_form();
    original.t.set("T3", true);
    original.n.set("N2a", true);
    original.modalities.mri = true;
    original.other_location = "Carina".to_owned();
    original.other_finding = "emphysema".to_owned();

    let record = original.to_record(&RecordContext::default());
    let raw = serde_json::to_string(&record).unwrap();
    let mut restored = StagingForm::default();
    restored.apply_record(&StagingRecord::from_json(&raw).unwrap());

    assert_eq!(restored, original);
}

#[test]
fn other_location_with_commas_round_trips() {
    let mut original = complete_form();
    original.other_location = "left hilum, near carina".to_owned();

    let record = original.to_record(&RecordContext::default());
    assert_eq!(record.tumor_location, "RUL, left hilum, near carina");

    let mut restored = StagingForm::default();
    restored.apply_record(&record);
    assert_eq!(restored, original);
}

#[test]
fn other_location_naming_a_lobe_fails_validation() {
    let mut form = complete_form();
    form.other_location = "pleura, lll".to_owned();
    assert!(form.other_location_names_lobe());
    assert_eq!(form.missing_fields(), vec![MissingField::OtherLocationIsCode]);

    form.other_location = "pleura".to_owned();
    form.locations.set("LLL", true);
    assert!(form.validate().is_ok());

    let mut restored = StagingForm::default();
    restored.apply_record(&form.to_record(&RecordContext::default()));
    assert_eq!(restored, form);
}

#[test]
fn clear_resets_to_default() {
    let mut form = complete_form();
    form.clear();
    assert_eq!(form, StagingForm::default());
}

// =============================================================
// normalize_imaging_date
// =============================================================

#[test]
fn normalize_accepts_calendar_dates() {
    assert_eq!(normalize_imaging_date("2024-11-05"), "2024-11-05");
    assert_eq!(normalize_imaging_date("2024/11/05"), "2024-11-05");
}

#[test]
fn normalize_keeps_unparseable_text() {
    assert_eq!(normalize_imaging_date("last Tuesday"), "last Tuesday");
    assert_eq!(normalize_imaging_date(""), "");
}
