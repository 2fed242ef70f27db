//! Common filter editor: the fields that apply regardless of procedure.
//!
//! A closed enum of field names keyed to top-level paths, so callers never
//! spell a dot path by hand. The editor is stateless: it reads the session
//! tree and hands back the replacement produced by the path-updater.

#[cfg(test)]
#[path = "common_test.rs"]
mod common_test;

use crate::filters::model::{FilterPathError, FilterState};

/// The closed set of common filter fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonField {
    DateStart,
    DateEnd,
    AgeMin,
    AgeMax,
    Gender,
    Status,
}

impl CommonField {
    /// Dot path of this field inside the filter tree.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::DateStart => "dateRange.start",
            Self::DateEnd => "dateRange.end",
            Self::AgeMin => "patientAge.min",
            Self::AgeMax => "patientAge.max",
            Self::Gender => "gender",
            Self::Status => "status",
        }
    }
}

/// Write one common field, returning the replacement tree.
///
/// # Errors
///
/// [`FilterPathError::InvalidValue`] when an enum field receives a value
/// outside its closed set.
pub fn set(filters: &FilterState, field: CommonField, value: &str) -> Result<FilterState, FilterPathError> {
    filters.update(field.path(), value)
}
