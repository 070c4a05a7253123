//! Staging form state: validation, autofill from a stored record, and
//! rebuilding the flat record for submission.
//!
//! DESIGN
//! ======
//! `StagingForm` mirrors what the home page shows: checkbox sets, radio choice
//! for tumor size, and free-text fields. The page binds signals to it; all
//! rules live here so the CLI `check` command and the page agree.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::fmt;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::record::{Impression, StagingRecord};
use crate::stage::{CODE_SEPARATOR, CodeSelection, split_codes};

/// Literal stored in `tumor_size_cm` when the tumor is not measurable.
pub const NON_MEASURABLE: &str = "Non-measurable";

/// Tumor size radio choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeKind {
    #[default]
    Unset,
    Measurable,
    NonMeasurable,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TumorSize {
    pub kind: SizeKind,
    pub value: String,
}

/// Imaging modality checkboxes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modalities {
    pub ct: bool,
    pub mri: bool,
}

impl Modalities {
    /// Record value: `CT`, `MRI`, both joined, or empty.
    #[must_use]
    pub fn as_record_value(self) -> String {
        let mut out = Vec::new();
        if self.ct {
            out.push("CT");
        }
        if self.mri {
            out.push("MRI");
        }
        out.join(CODE_SEPARATOR)
    }
}

/// A required field the user has not completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingField {
    RecordId,
    PatientName,
    PatientInfo,
    ImagingDate,
    Modality,
    Location,
    OtherLocationIsCode,
    SizeKind,
    SizeValue,
    SizeValueNotAllowed,
    TStage,
    NStage,
    MStage,
    ImpressionT,
    ImpressionN,
    ImpressionM,
}

impl MissingField {
    /// Label surfaced to the user.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::RecordId => "Record ID",
            Self::PatientName => "Patient name",
            Self::PatientInfo => "Patient information",
            Self::ImagingDate => "Imaging date",
            Self::Modality => "Imaging Modality (select at least one)",
            Self::Location => "Tumor Location (select at least one or fill in Other)",
            Self::OtherLocationIsCode => "Tumor Location (tick the lobe instead of typing it in Other)",
            Self::SizeKind => "Tumor Size (choose Non-measurable or Measurable)",
            Self::SizeValue => "Tumor Size (Measurable requires a value)",
            Self::SizeValueNotAllowed => "Tumor Size (remove the value when Non-measurable is selected)",
            Self::TStage => "Tumor Invasion (T Classification) (select at least one)",
            Self::NStage => "Regional Lymph Node (N Classification) (select at least one)",
            Self::MStage => "Distant Metastasis (M Classification) (select at least one)",
            Self::ImpressionT => "IMP T (must not be blank)",
            Self::ImpressionN => "IMP N (must not be blank)",
            Self::ImpressionM => "IMP M (must not be blank)",
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregated validation failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("missing required fields: {}", labels(.0))]
pub struct ValidationError(pub Vec<MissingField>);

impl ValidationError {
    /// Bulleted list for a blocking dialog.
    #[must_use]
    pub fn message(&self) -> String {
        let bullets: Vec<String> = self.0.iter().map(|f| format!("• {}", f.label())).collect();
        format!("Please complete the following required fields:\n{}", bullets.join("\n"))
    }
}

fn labels(fields: &[MissingField]) -> String {
    fields.iter().map(|f| f.label()).collect::<Vec<_>>().join("; ")
}

/// Values the record carries that are not edited on the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordContext {
    pub lung_rads_category: Option<String>,
    pub last_observation: Option<String>,
}

/// In-memory state of the staging form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagingForm {
    pub record_id: String,
    pub patient_name: String,
    pub patient_info: String,
    pub date: String,
    pub modalities: Modalities,
    pub locations: CodeSelection,
    pub other_location: String,
    pub size: TumorSize,
    pub t: CodeSelection,
    pub n: CodeSelection,
    pub m: CodeSelection,
    pub other_finding: String,
    pub imp: Impression,
}

impl Default for StagingForm {
    fn default() -> Self {
        Self {
            record_id: String::new(),
            patient_name: String::new(),
            patient_info: String::new(),
            date: String::new(),
            modalities: Modalities::default(),
            locations: CodeSelection::locations(),
            other_location: String::new(),
            size: TumorSize::default(),
            t: CodeSelection::t_stage(),
            n: CodeSelection::n_stage(),
            m: CodeSelection::m_stage(),
            other_finding: String::new(),
            imp: Impression::default(),
        }
    }
}

impl StagingForm {
    /// Every rule the form currently fails, in display order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<MissingField> {
        let mut missing = Vec::new();
        let blank = |s: &str| s.trim().is_empty();

        if blank(&self.record_id) {
            missing.push(MissingField::RecordId);
        }
        if blank(&self.patient_name) {
            missing.push(MissingField::PatientName);
        }
        if blank(&self.patient_info) {
            missing.push(MissingField::PatientInfo);
        }
        if self.date.is_empty() {
            missing.push(MissingField::ImagingDate);
        }
        if !self.modalities.ct && !self.modalities.mri {
            missing.push(MissingField::Modality);
        }
        if !self.locations.any() && blank(&self.other_location) {
            missing.push(MissingField::Location);
        }
        if self.other_location_names_lobe() {
            missing.push(MissingField::OtherLocationIsCode);
        }
        match self.size.kind {
            SizeKind::Unset => missing.push(MissingField::SizeKind),
            SizeKind::Measurable if blank(&self.size.value) => missing.push(MissingField::SizeValue),
            SizeKind::NonMeasurable if !blank(&self.size.value) => {
                missing.push(MissingField::SizeValueNotAllowed);
            }
            _ => {}
        }
        if !self.t.any() {
            missing.push(MissingField::TStage);
        }
        if !self.n.any() {
            missing.push(MissingField::NStage);
        }
        if !self.m.any() {
            missing.push(MissingField::MStage);
        }
        if blank(&self.imp.t) {
            missing.push(MissingField::ImpressionT);
        }
        if blank(&self.imp.n) {
            missing.push(MissingField::ImpressionN);
        }
        if blank(&self.imp.m) {
            missing.push(MissingField::ImpressionM);
        }
        missing
    }

    /// Whether any "Other" token is one of the lobe codes. Such a token would
    /// come back as a ticked lobe after a save and reload.
    #[must_use]
    pub fn other_location_names_lobe(&self) -> bool {
        split_codes(&self.other_location)
            .iter()
            .any(|token| self.locations.codes().iter().any(|code| code.eq_ignore_ascii_case(token)))
    }

    /// # Errors
    ///
    /// Returns every missing field when any rule fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if missing.is_empty() { Ok(()) } else { Err(ValidationError(missing)) }
    }

    /// Map a stored record onto the form.
    ///
    /// Stage strings tick exactly the listed codes; location tokens that are
    /// not lobe codes are joined back into the "Other" text.
    pub fn apply_record(&mut self, record: &StagingRecord) {
        self.record_id.clone_from(&record.record_id);
        self.patient_name.clone_from(&record.patient_name);
        self.patient_info.clone_from(&record.patient_info);
        self.date = normalize_imaging_date(&record.imaging_date);

        let modality = split_codes(&record.imaging_modality);
        self.modalities = Modalities {
            ct: modality.iter().any(|m| m.eq_ignore_ascii_case("CT")),
            mri: modality.iter().any(|m| m.eq_ignore_ascii_case("MRI")),
        };

        self.imp = record.imp.clone();

        if !record.t_stage.is_empty() {
            self.t.replace_from(&record.t_stage);
        }
        if !record.n_stage.is_empty() {
            self.n.replace_from(&record.n_stage);
        }
        if !record.m_stage.is_empty() {
            self.m.replace_from(&record.m_stage);
        }

        if !record.tumor_location.is_empty() {
            let unmatched = self.locations.replace_from(&record.tumor_location);
            self.other_location = unmatched.join(CODE_SEPARATOR);
        }

        if !record.tumor_size_cm.is_empty() {
            if record.tumor_size_cm.to_lowercase().contains("non") {
                self.size = TumorSize { kind: SizeKind::NonMeasurable, value: String::new() };
            } else {
                self.size = TumorSize { kind: SizeKind::Measurable, value: record.tumor_size_cm.clone() };
            }
        }

        self.other_finding.clone_from(&record.other_findings);
    }

    /// Rebuild the flat record from the current form state.
    #[must_use]
    pub fn to_record(&self, context: &RecordContext) -> StagingRecord {
        let mut location = self.locations.selected().into_iter().map(str::to_owned).collect::<Vec<_>>();
        let other = self.other_location.trim();
        if !other.is_empty() {
            location.push(other.to_owned());
        }

        let tumor_size_cm = match self.size.kind {
            SizeKind::Measurable => self.size.value.clone(),
            SizeKind::NonMeasurable => NON_MEASURABLE.to_owned(),
            SizeKind::Unset => String::new(),
        };

        let mut record = StagingRecord {
            record_id: self.record_id.trim().to_owned(),
            patient_name: self.patient_name.trim().to_owned(),
            patient_info: self.patient_info.trim().to_owned(),
            imaging_date: self.date.clone(),
            imaging_modality: self.modalities.as_record_value(),
            tumor_location: location.join(CODE_SEPARATOR),
            tumor_size_cm,
            t_stage: self.t.joined(),
            n_stage: self.n.joined(),
            m_stage: self.m.joined(),
            lung_rads_category: context.lung_rads_category.clone(),
            other_findings: self.other_finding.clone(),
            imp: self.imp.clone(),
            input: context.last_observation.clone(),
            ..StagingRecord::default()
        };
        record.filename = Some(record.derived_filename());
        record
    }

    /// Reset every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Normalize an imaging date to `YYYY-MM-DD`.
///
/// Accepts RFC 3339 timestamps and `YYYY-MM-DD` / `YYYY/MM/DD` dates. Anything
/// else is returned unchanged.
#[must_use]
pub fn normalize_imaging_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let iso = format_description!("[year]-[month]-[day]");
    let slashed = format_description!("[year]/[month]/[day]");

    OffsetDateTime::parse(trimmed, &Rfc3339)
        .map(OffsetDateTime::date)
        .ok()
        .or_else(|| Date::parse(trimmed, iso).ok())
        .or_else(|| Date::parse(trimmed, slashed).ok())
        .and_then(|d| d.format(iso).ok())
        .unwrap_or_else(|| raw.to_owned())
}
