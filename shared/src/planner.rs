//! State machine behind the weekly planner.
//!
//! `PlannerState` holds everything the planner displays: the anchor date, the
//! selected day, the time inputs, the availability list and the three error
//! categories. Each UI event or network completion maps to one transition
//! method. Nothing here performs I/O; the caller issues the requests that
//! `prepare_submission` hands back.

use chrono::NaiveDate;
use thiserror::Error;

use crate::validation::{validate_time_range, ValidationError};
use crate::week::{compute_week_days, shift_week, week_title, WeekDay, WeekDirection, DAYS_PER_WEEK};
use crate::{sort_by_start, Availability, CreateAvailabilityRequest};

/// Why a submission never reached the network
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Select a day before adding an availability.")]
    NoDaySelected,
    #[error("The previous availability is still being saved.")]
    AlreadySubmitting,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Where the add-availability form stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// No day selected; the form is hidden
    Closed,
    Open,
    Submitting,
    OpenWithError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerState {
    anchor: NaiveDate,
    selected: Option<NaiveDate>,
    start_input: String,
    end_input: String,
    availabilities: Vec<Availability>,
    loading: bool,
    submitting: bool,
    load_error: Option<String>,
    form_error: Option<SubmitError>,
    submit_error: Option<String>,
}

impl PlannerState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            anchor: today,
            selected: None,
            start_input: String::new(),
            end_input: String::new(),
            availabilities: Vec::new(),
            loading: false,
            submitting: false,
            load_error: None,
            form_error: None,
            submit_error: None,
        }
    }

    // Queries

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn start_input(&self) -> &str {
        &self.start_input
    }

    pub fn end_input(&self) -> &str {
        &self.end_input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Validation failure, if the last submit attempt was rejected locally
    pub fn form_error(&self) -> Option<&SubmitError> {
        self.form_error.as_ref()
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn week_days(&self) -> [WeekDay; DAYS_PER_WEEK] {
        compute_week_days(self.anchor, self.selected)
    }

    pub fn week_title(&self) -> String {
        week_title(self.anchor)
    }

    /// Held availabilities in display order (ascending start time).
    pub fn sorted_availabilities(&self) -> Vec<Availability> {
        let mut sorted = self.availabilities.clone();
        sort_by_start(&mut sorted);
        sorted
    }

    pub fn form_phase(&self) -> FormPhase {
        match self.selected {
            None => FormPhase::Closed,
            Some(_) if self.submitting => FormPhase::Submitting,
            Some(_) if self.form_error.is_some() || self.submit_error.is_some() => FormPhase::OpenWithError,
            Some(_) => FormPhase::Open,
        }
    }

    /// Build the create request for the current inputs without changing state.
    pub fn prepare_submission(&self, guide_id: &str) -> Result<CreateAvailabilityRequest, SubmitError> {
        if self.submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        let date = self.selected.ok_or(SubmitError::NoDaySelected)?;
        let availability = validate_time_range(date, &self.start_input, &self.end_input)?;

        Ok(CreateAvailabilityRequest {
            guide_id: guide_id.to_string(),
            availability,
        })
    }

    // Transitions

    pub fn navigate(&mut self, direction: WeekDirection) {
        self.anchor = shift_week(self.anchor, direction);
        self.selected = None;
        self.clear_form();
    }

    pub fn select_day(&mut self, day: NaiveDate) {
        self.selected = Some(day);
        self.clear_form();
    }

    pub fn set_start_time(&mut self, value: String) {
        self.start_input = value;
        self.form_error = None;
    }

    pub fn set_end_time(&mut self, value: String) {
        self.end_input = value;
        self.form_error = None;
    }

    /// Record a locally rejected submission. A rejection caused by a request
    /// already in flight leaves the form as it is.
    pub fn submission_rejected(&mut self, error: SubmitError) {
        if error != SubmitError::AlreadySubmitting {
            self.form_error = Some(error);
        }
    }

    pub fn submission_started(&mut self) {
        self.submitting = true;
        self.form_error = None;
        self.submit_error = None;
    }

    pub fn submission_succeeded(&mut self, mut created: Availability) {
        for availability in &mut self.availabilities {
            availability.added = false;
        }
        created.added = true;
        self.availabilities.push(created);

        self.submitting = false;
        self.selected = None;
        self.clear_form();
    }

    /// Inputs and selection stay so the user can retry by hand.
    pub fn submission_failed(&mut self, message: String) {
        self.submitting = false;
        self.submit_error = Some(message);
    }

    pub fn load_started(&mut self) {
        self.loading = true;
        self.load_error = None;
    }

    pub fn load_succeeded(&mut self, availabilities: Vec<Availability>) {
        self.loading = false;
        self.load_error = None;
        self.availabilities = availabilities
            .into_iter()
            .map(|availability| Availability { added: false, ..availability })
            .collect();
    }

    pub fn load_failed(&mut self, message: String) {
        self.loading = false;
        self.load_error = Some(message);
    }

    fn clear_form(&mut self) {
        self.start_input.clear();
        self.end_input.clear();
        self.form_error = None;
        self.submit_error = None;
    }
}
