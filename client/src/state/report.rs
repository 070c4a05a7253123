//! Report-entry page state: the observation, the generated result, badges,
//! and the in-flight guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page wraps this in an `RwSignal`. Every path that sends a generation
//! request goes through [`ReportState::begin`], so the button and the
//! Ctrl/Cmd+Enter shortcut share one guard.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use records::{Classification, ClientStore, GenerateResponse, ObservationRequest, StorageBackend, StorageKey};

use crate::app::AppRoute;

pub const RESULT_PLACEHOLDER: &str = "No result yet";
pub const RESULT_PENDING: &str = "Generating…";

/// Badge next to the observation textarea.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ObservationBadge {
    #[default]
    Ready,
    Typing,
    Loaded,
    Copied,
}

impl ObservationBadge {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::Typing => "Typing",
            Self::Loaded => "Loaded",
            Self::Copied => "Copied",
        }
    }
}

/// Badge next to the result panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResultBadge {
    #[default]
    Waiting,
    Processing,
    Done,
    Copied,
    Saved,
    Loaded,
    Updated,
}

impl ResultBadge {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Waiting => "Waiting",
            Self::Processing => "Processing",
            Self::Done => "Done",
            Self::Copied => "Copied",
            Self::Saved => "Saved",
            Self::Loaded => "Loaded",
            Self::Updated => "Updated",
        }
    }
}

/// Why a generation request was not sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerateRejection {
    EmptyInput,
    InFlight,
    /// `lastObservation` could not be written.
    StorageUnavailable,
}

impl GenerateRejection {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyInput => "Enter an observation first",
            Self::InFlight => "Still processing, please wait…",
            Self::StorageUnavailable => "Could not save the observation locally; nothing was sent",
        }
    }
}

/// What the page does once a generation request settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerateFinish {
    /// A record came back; leave for this route after the navigation delay.
    Navigate(AppRoute),
    /// Text only; stay on the page.
    Stay,
    /// The request or the local write failed.
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportState {
    pub observation: String,
    pub result: String,
    pub observation_badge: ObservationBadge,
    pub result_badge: ResultBadge,
    pub in_flight: bool,
}

impl Default for ReportState {
    fn default() -> Self {
        Self {
            observation: String::new(),
            result: RESULT_PLACEHOLDER.to_owned(),
            observation_badge: ObservationBadge::default(),
            result_badge: ResultBadge::default(),
            in_flight: false,
        }
    }
}

impl ReportState {
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.observation.chars().count()
    }

    pub fn set_observation(&mut self, value: String) {
        self.observation = value;
        if self.observation_badge == ObservationBadge::Ready {
            self.observation_badge = ObservationBadge::Typing;
        }
    }

    /// Whether `result` holds generated text rather than a placeholder.
    #[must_use]
    pub fn has_result(&self) -> bool {
        let result = self.result.trim();
        !result.is_empty() && result != RESULT_PLACEHOLDER && result != RESULT_PENDING
    }

    /// Restore the last observation and report text from storage.
    pub fn restore<B: StorageBackend>(&mut self, store: &ClientStore<B>) {
        if let Some(observation) = store.last_observation() {
            self.observation = observation;
            self.observation_badge = ObservationBadge::Loaded;
        }
        if let Some(text) = store.report_text() {
            self.result = text;
            self.result_badge = ResultBadge::Loaded;
        }
    }

    /// Gate and prepare a generation request.
    ///
    /// On success the state is marked in flight and the normalized
    /// observation is stored under `lastObservation`.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerateRejection`] when the input is empty, a request is
    /// already running, or the observation cannot be stored. No state changes
    /// in that case.
    pub fn begin<B: StorageBackend>(&mut self, store: &ClientStore<B>) -> Result<ObservationRequest, GenerateRejection> {
        let request = ObservationRequest::from_input(&self.observation).ok_or(GenerateRejection::EmptyInput)?;
        if self.in_flight {
            return Err(GenerateRejection::InFlight);
        }
        store
            .set_last_observation(&request.observation)
            .map_err(|_| GenerateRejection::StorageUnavailable)?;
        self.in_flight = true;
        self.result = RESULT_PENDING.to_owned();
        self.result_badge = ResultBadge::Processing;
        Ok(request)
    }

    /// Settle a generation request. Always clears the in-flight flag.
    ///
    /// When the reply carries a record, the record (with `imp` seeded from
    /// the stages) goes to `generatedReport` and the reply text to
    /// `reportText`; the classification picks the next route.
    pub fn finish<B: StorageBackend>(
        &mut self,
        store: &ClientStore<B>,
        reply: Result<GenerateResponse, String>,
    ) -> GenerateFinish {
        self.in_flight = false;
        self.result_badge = ResultBadge::Done;

        let reply = match reply {
            Ok(reply) => reply,
            Err(e) => {
                self.result = RESULT_PLACEHOLDER.to_owned();
                return GenerateFinish::Failed(e);
            }
        };

        self.result = reply.display_text();
        let Some(record) = reply.prepared_record() else {
            return GenerateFinish::Stay;
        };
        if let Err(e) = store.set_generated_report(&record) {
            return GenerateFinish::Failed(e.to_string());
        }
        if let Some(text) = reply.response.as_deref().filter(|t| !t.trim().is_empty()) {
            if let Err(e) = store.set_report_text(text) {
                return GenerateFinish::Failed(e.to_string());
            }
        }

        match reply.classification() {
            Some(Classification::Benign) => GenerateFinish::Navigate(AppRoute::Benign),
            _ => GenerateFinish::Navigate(AppRoute::Response),
        }
    }

    /// Empty the textarea and forget `lastObservation`.
    pub fn clear_input<B: StorageBackend>(&mut self, store: &ClientStore<B>) {
        self.observation.clear();
        self.observation_badge = ObservationBadge::Ready;
        store.clear_last_observation();
    }

    /// Store the current result under `reportText`.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when nothing has been generated yet or
    /// the write fails.
    pub fn save_result<B: StorageBackend>(&mut self, store: &ClientStore<B>) -> Result<(), String> {
        if !self.has_result() {
            return Err("Nothing to save yet".to_owned());
        }
        store.set_report_text(&self.result).map_err(|e| e.to_string())?;
        self.result_badge = ResultBadge::Saved;
        Ok(())
    }

    /// Persist a real result before leaving for the response page.
    ///
    /// # Errors
    ///
    /// Returns the write failure so the page can report it.
    pub fn persist_before_leaving<B: StorageBackend>(&self, store: &ClientStore<B>) -> Result<(), String> {
        if self.has_result() {
            store.set_report_text(&self.result).map_err(|e| e.to_string())?;
        }
        Ok(())
    }

    /// Apply a storage event from another tab. Returns whether anything changed.
    pub fn apply_storage_event(&mut self, key: Option<&str>, new_value: Option<&str>) -> bool {
        if key != Some(StorageKey::ReportText.as_str()) {
            return false;
        }
        match new_value.filter(|v| !v.trim().is_empty()) {
            Some(value) => {
                self.result = value.to_owned();
                self.result_badge = ResultBadge::Updated;
                true
            }
            None => false,
        }
    }
}
