//! Canonical filter tree and its pure path-updater.
//!
//! ARCHITECTURE
//! ============
//! One `FilterState` exists per export session. The four common fields are
//! always present; procedure-specific constraints live in a flat string map
//! where an absent key means "no constraint". Editors never mutate the tree
//! directly: every change goes through [`FilterState::update`], which
//! returns a fresh tree (copy-on-write) and leaves the input untouched.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filters::range::{NumericRange, RangeError};

/// Inclusive date bounds; empty strings mean unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Patient age bounds as raw input strings; empty means unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: String,
    pub max: String,
}

/// Patient gender constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    All,
    Male,
    Female,
}

impl Gender {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }

    #[must_use]
    pub fn wire_value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Record completion status constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    #[default]
    All,
    Complete,
    #[serde(rename = "follow-ups")]
    FollowUps,
    Draft,
}

impl RecordStatus {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "complete" => Some(Self::Complete),
            "follow-ups" => Some(Self::FollowUps),
            "draft" => Some(Self::Draft),
            _ => None,
        }
    }

    #[must_use]
    pub fn wire_value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Complete => "complete",
            Self::FollowUps => "follow-ups",
            Self::Draft => "draft",
        }
    }
}

/// Errors from the dot-path updater.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterPathError {
    /// The path does not name a known filter field.
    #[error("unknown filter path: {0}")]
    UnknownPath(String),

    /// The value is not valid for the enum field at this path.
    #[error("invalid value for {path}: {value}")]
    InvalidValue { path: String, value: String },
}

/// The nested object describing all active constraints for an export/query.
///
/// All four common fields are always present; `procedure_specific` is always
/// a map (possibly empty), reset whenever the session resets or a new
/// procedure is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub date_range: DateRange,
    pub patient_age: AgeRange,
    pub gender: Gender,
    pub status: RecordStatus,
    pub procedure_specific: BTreeMap<String, String>,
}

impl FilterState {
    /// Return a new tree with the dot-delimited `path` set to `value`.
    ///
    /// Common fields are addressed by their wire spelling (`dateRange.start`,
    /// `patientAge.min`, `gender`, `status`); procedure-specific constraints
    /// by `procedureSpecific.<key>`, where an unknown key is created
    /// silently. The receiver is never mutated.
    ///
    /// # Errors
    ///
    /// [`FilterPathError::UnknownPath`] for paths outside the tree,
    /// [`FilterPathError::InvalidValue`] for enum fields given a value
    /// outside their closed set.
    pub fn update(&self, path: &str, value: &str) -> Result<Self, FilterPathError> {
        let mut next = self.clone();
        match path {
            "dateRange.start" => next.date_range.start = value.to_string(),
            "dateRange.end" => next.date_range.end = value.to_string(),
            "patientAge.min" => next.patient_age.min = value.to_string(),
            "patientAge.max" => next.patient_age.max = value.to_string(),
            "gender" => {
                next.gender = Gender::parse(value).ok_or_else(|| FilterPathError::InvalidValue {
                    path: path.to_string(),
                    value: value.to_string(),
                })?;
            }
            "status" => {
                next.status = RecordStatus::parse(value).ok_or_else(|| FilterPathError::InvalidValue {
                    path: path.to_string(),
                    value: value.to_string(),
                })?;
            }
            _ => match path.strip_prefix("procedureSpecific.") {
                Some(key) if !key.is_empty() => {
                    next.procedure_specific.insert(key.to_string(), value.to_string());
                }
                _ => return Err(FilterPathError::UnknownPath(path.to_string())),
            },
        }
        Ok(next)
    }

    /// Read the value at a dot-delimited `path`, if the path is known.
    ///
    /// Enum fields read back as their wire spelling; absent
    /// procedure-specific keys read back as `None`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<String> {
        match path {
            "dateRange.start" => Some(self.date_range.start.clone()),
            "dateRange.end" => Some(self.date_range.end.clone()),
            "patientAge.min" => Some(self.patient_age.min.clone()),
            "patientAge.max" => Some(self.patient_age.max.clone()),
            "gender" => Some(self.gender.wire_value().to_string()),
            "status" => Some(self.status.wire_value().to_string()),
            _ => {
                let key = path.strip_prefix("procedureSpecific.")?;
                self.procedure_specific.get(key).cloned()
            }
        }
    }

    /// Return a new tree with `procedure_specific` emptied.
    #[must_use]
    pub fn without_procedure_filters(&self) -> Self {
        let mut next = self.clone();
        next.procedure_specific.clear();
        next
    }

    /// Return a new tree with the procedure-specific `key` removed.
    #[must_use]
    pub fn without_procedure_key(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.procedure_specific.remove(key);
        next
    }

    fn procedure_value(&self, key: &str) -> &str {
        self.procedure_specific.get(key).map_or("", String::as_str)
    }

    /// Validate every numeric range before the tree is sent to the remote
    /// API: patient age, VAS score (domain 0-10), laser power.
    ///
    /// # Errors
    ///
    /// The first [`RangeError`] encountered; nothing is silently corrected.
    pub fn validate(&self) -> Result<(), RangeError> {
        NumericRange::new("patientAge", &self.patient_age.min, &self.patient_age.max).validate()?;
        NumericRange::new(
            "vasScore",
            self.procedure_value("vasScoreMin"),
            self.procedure_value("vasScoreMax"),
        )
        .with_domain(0.0, 10.0)
        .validate()?;
        NumericRange::new(
            "laserPower",
            self.procedure_value("laserPowerMin"),
            self.procedure_value("laserPowerMax"),
        )
        .validate()?;
        Ok(())
    }
}
