//! Export session state machine.
//!
//! ARCHITECTURE
//! ============
//! One session exists per wizard lifetime and exclusively owns its
//! `FilterState`; editors receive the tree by reference and request changes
//! through `apply`, never by holding their own copy. The machine is
//! deliberately small: two steps, a terminal submit, and unconditional
//! resets on cancel/close.
//!
//! Back navigation clears only the chosen procedure. Previously entered
//! filter values survive; the procedure-specific map is emptied when the
//! *next* procedure is chosen, so stale keys from one procedure never leak
//! into another's export.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::Serialize;

use crate::export::ExportError;
use crate::filters::{FilterPathError, FilterState};
use crate::procedures::ProcedureId;

/// Wizard step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    SelectProcedure,
    ConfigureFilters,
}

/// Rejected procedure selection; the session is guaranteed unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("procedure {} is not available", .0.as_str())]
pub struct SelectError(pub ProcedureId);

/// Body of `POST /surgery/filter-export`.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRequest {
    pub procedure: ProcedureId,
    pub filters: FilterState,
}

/// The bounded interaction during which a user picks a procedure,
/// configures filters, and submits one export request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSession {
    pub step: Step,
    pub selected_procedure: Option<ProcedureId>,
    pub filters: FilterState,
}

impl ExportSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a specific procedure and advance to the configure step.
    ///
    /// # Errors
    ///
    /// [`SelectError`] when the procedure's `available` flag is off; the
    /// session is left exactly as it was.
    pub fn select(&mut self, id: ProcedureId) -> Result<(), SelectError> {
        if !id.is_available() {
            return Err(SelectError(id));
        }
        self.filters = self.filters.without_procedure_filters();
        self.selected_procedure = Some(id);
        self.step = Step::ConfigureFilters;
        Ok(())
    }

    /// Choose the `"all"` pseudo-procedure. Always permitted.
    pub fn select_all(&mut self) {
        // Availability never gates this path.
        let _ = self.select(ProcedureId::All);
    }

    /// Return to procedure selection, keeping every filter value.
    pub fn back(&mut self) {
        self.step = Step::SelectProcedure;
        self.selected_procedure = None;
    }

    /// Unconditional full reset (cancel/close, or post-submit clear).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply one filter edit through the path-updater.
    ///
    /// # Errors
    ///
    /// Propagates [`FilterPathError`]; the session keeps its previous tree.
    pub fn apply(&mut self, path: &str, value: &str) -> Result<(), FilterPathError> {
        self.filters = self.filters.update(path, value)?;
        Ok(())
    }

    /// Package the submit body after validating numeric ranges.
    ///
    /// # Errors
    ///
    /// [`ExportError::NotReady`] outside the configure step,
    /// [`ExportError::InvalidRange`] when validation fails. The session is
    /// never modified here.
    pub fn export_request(&self) -> Result<ExportRequest, ExportError> {
        let (Step::ConfigureFilters, Some(procedure)) = (self.step, self.selected_procedure) else {
            return Err(ExportError::NotReady);
        };
        self.filters.validate()?;
        Ok(ExportRequest { procedure, filters: self.filters.clone() })
    }
}
