//! Form submission state machine
//!
//! Every interactive form moves independently through
//! `Idle -> Submitting -> Idle`. Success closes the form; failure reopens it
//! in `Idle` with errors so the user can correct and resubmit.

use serde::Serialize;

use crate::types::ApiErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormPhase {
    Idle,
    Submitting,
}

/// Field data plus submission state of one form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormState<D> {
    pub data: D,
    pub errors: ApiErrors,
    pub phase: FormPhase,
    pub open: bool,
}

impl<D: Default> Default for FormState<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

impl<D> FormState<D> {
    pub fn new(data: D) -> Self {
        Self {
            data,
            errors: ApiErrors::new(),
            phase: FormPhase::Idle,
            open: true,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Submit control is disabled while a submission is in flight
    pub fn can_submit(&self) -> bool {
        self.open && !self.is_submitting()
    }

    /// Edit a field; clears that field's error
    pub fn edit(&mut self, field: &str, change: impl FnOnce(&mut D)) {
        change(&mut self.data);
        self.errors.remove(field);
    }

    /// Idle -> Submitting. Returns false if a submission is already running.
    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.errors = ApiErrors::new();
        self.phase = FormPhase::Submitting;
        true
    }

    /// Submitting -> Idle, closing the form
    pub fn succeed(&mut self) {
        self.errors = ApiErrors::new();
        self.phase = FormPhase::Idle;
        self.open = false;
    }

    /// Submitting -> Idle with errors; the form stays open and populated
    pub fn fail(&mut self, errors: ApiErrors) {
        self.errors = errors;
        self.phase = FormPhase::Idle;
        self.open = true;
    }

    /// Validation failure before any request
    pub fn reject(&mut self, errors: ApiErrors) {
        self.fail(errors);
    }

    pub fn reopen(&mut self) {
        self.open = true;
        self.errors = ApiErrors::new();
    }
}
