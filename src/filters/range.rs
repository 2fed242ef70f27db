//! Validated numeric range.
//!
//! TRADE-OFFS
//! ==========
//! The editors accept whatever the input widgets produce, exactly like the
//! original UI; this type is the single gate applied before anything is
//! sent to the remote API. Non-numeric bounds, inverted bounds, and bounds
//! outside an optional domain all fail validation — nothing is corrected
//! silently and nothing invalid leaves the client.

#[cfg(test)]
#[path = "range_test.rs"]
mod range_test;

/// Errors from numeric-range validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RangeError {
    #[error("{field} {bound} is not a number: {value}")]
    NotNumeric { field: &'static str, bound: &'static str, value: String },

    #[error("{field} minimum {min} exceeds maximum {max}")]
    Inverted { field: &'static str, min: f64, max: f64 },

    #[error("{field} {bound} {value} is outside {lo}..={hi}")]
    OutOfDomain { field: &'static str, bound: &'static str, value: f64, lo: f64, hi: f64 },
}

/// A min/max pair of raw input strings with an optional closed domain.
///
/// Empty bounds mean "unbounded" and always validate.
#[derive(Debug, Clone)]
pub struct NumericRange<'a> {
    field: &'static str,
    min: &'a str,
    max: &'a str,
    domain: Option<(f64, f64)>,
}

impl<'a> NumericRange<'a> {
    #[must_use]
    pub fn new(field: &'static str, min: &'a str, max: &'a str) -> Self {
        Self { field, min, max, domain: None }
    }

    #[must_use]
    pub fn with_domain(mut self, lo: f64, hi: f64) -> Self {
        self.domain = Some((lo, hi));
        self
    }

    /// Check both bounds and their ordering.
    ///
    /// # Errors
    ///
    /// See [`RangeError`].
    pub fn validate(&self) -> Result<(), RangeError> {
        let min = self.bound("minimum", self.min)?;
        let max = self.bound("maximum", self.max)?;
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(RangeError::Inverted { field: self.field, min, max });
            }
        }
        Ok(())
    }

    fn bound(&self, bound: &'static str, raw: &str) -> Result<Option<f64>, RangeError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let value: f64 = raw.parse().map_err(|_| RangeError::NotNumeric {
            field: self.field,
            bound,
            value: raw.to_string(),
        })?;
        if let Some((lo, hi)) = self.domain {
            if value < lo || value > hi {
                return Err(RangeError::OutOfDomain { field: self.field, bound, value, lo, hi });
            }
        }
        Ok(Some(value))
    }
}
