//! Fixed code sets for TNM staging and tumor location, plus the checkbox
//! selection model the form keeps for each set.

#[cfg(test)]
#[path = "stage_test.rs"]
mod stage_test;

/// Tumor invasion codes, in display order.
pub const T_CODES: &[&str] = &[
    "Tx", "T0", "Tis", "T1mi", "T1a", "T1b", "T1c", "T2a", "T2b", "T3", "T3invade", "T3nodule", "T4", "T4invade",
    "T4nodule",
];

/// Regional lymph node codes, in display order.
pub const N_CODES: &[&str] = &["NX", "N0", "N1", "N2", "N2a", "N2b", "N3"];

/// Distant metastasis codes, in display order.
pub const M_CODES: &[&str] = &["M0", "M1", "M1a", "M1b", "M1c", "M1c1", "M1c2"];

/// Lobe codes offered as location checkboxes.
pub const LOCATION_CODES: &[&str] = &["RUL", "RML", "RLL", "LUL", "LLL"];

/// Separator used when joining selected codes into a record string.
pub const CODE_SEPARATOR: &str = ", ";

/// Checkbox state over one fixed code set.
///
/// Order follows the code set, so [`CodeSelection::joined`] is stable no matter
/// which order boxes were ticked in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeSelection {
    codes: &'static [&'static str],
    checked: Vec<bool>,
}

impl CodeSelection {
    #[must_use]
    pub fn new(codes: &'static [&'static str]) -> Self {
        Self { codes, checked: vec![false; codes.len()] }
    }

    #[must_use]
    pub fn t_stage() -> Self {
        Self::new(T_CODES)
    }

    #[must_use]
    pub fn n_stage() -> Self {
        Self::new(N_CODES)
    }

    #[must_use]
    pub fn m_stage() -> Self {
        Self::new(M_CODES)
    }

    #[must_use]
    pub fn locations() -> Self {
        Self::new(LOCATION_CODES)
    }

    /// The code set this selection ranges over.
    #[must_use]
    pub fn codes(&self) -> &'static [&'static str] {
        self.codes
    }

    /// Whether `code` is ticked. Unknown codes are never ticked.
    #[must_use]
    pub fn is_checked(&self, code: &str) -> bool {
        self.position(code).is_some_and(|idx| self.checked[idx])
    }

    /// Tick or untick `code`. Returns `false` if the code is not in the set.
    pub fn set(&mut self, code: &str, checked: bool) -> bool {
        match self.position(code) {
            Some(idx) => {
                self.checked[idx] = checked;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn any(&self) -> bool {
        self.checked.iter().any(|c| *c)
    }

    pub fn clear(&mut self) {
        self.checked.iter_mut().for_each(|c| *c = false);
    }

    /// Ticked codes in code-set order.
    #[must_use]
    pub fn selected(&self) -> Vec<&'static str> {
        self.codes
            .iter()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|(code, _)| *code)
            .collect()
    }

    /// Ticked codes joined with `", "`.
    #[must_use]
    pub fn joined(&self) -> String {
        self.selected().join(CODE_SEPARATOR)
    }

    /// Replace the selection with the codes listed in `raw`.
    ///
    /// `raw` is split on commas and matched case-insensitively. Every code not
    /// listed ends up unticked. Returns the tokens that matched nothing.
    pub fn replace_from(&mut self, raw: &str) -> Vec<String> {
        let tokens = split_codes(raw);
        for (idx, code) in self.codes.iter().enumerate() {
            self.checked[idx] = tokens.iter().any(|t| t.eq_ignore_ascii_case(code));
        }
        tokens
            .into_iter()
            .filter(|t| !self.codes.iter().any(|c| c.eq_ignore_ascii_case(t)))
            .collect()
    }

    fn position(&self, code: &str) -> Option<usize> {
        self.codes.iter().position(|c| *c == code)
    }
}

/// Split a comma-joined code string into trimmed, non-empty tokens.
#[must_use]
pub fn split_codes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
