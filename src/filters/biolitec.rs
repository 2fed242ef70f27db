//! Procedure-specific filter editor for the Biolitec laser LHP procedure.
//!
//! DESIGN
//! ======
//! Internally every constraint is a real enum; the literal wire strings the
//! remote contract expects (`"1470nm"`, `"yes"`, `"true"`, ...) appear only
//! in the `wire_value` encoders. An "all"/empty selection removes the key,
//! because an absent key already means "no constraint". All writes funnel
//! through the path-updater under `procedureSpecific.<key>`.

#[cfg(test)]
#[path = "biolitec_test.rs"]
mod biolitec_test;

use crate::filters::model::FilterState;

/// Laser wavelength constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Wavelength {
    #[default]
    All,
    Nm1470,
    Nm980,
    Nm810,
}

impl Wavelength {
    fn wire_value(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Nm1470 => Some("1470nm"),
            Self::Nm980 => Some("980nm"),
            Self::Nm810 => Some("810nm"),
        }
    }
}

/// Follow-up period constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FollowUpPeriod {
    #[default]
    All,
    TwoWeeks,
    SixWeeks,
    ThreeMonths,
    SixMonths,
    TwelveMonths,
    TwoYears,
    ThreeYears,
    FiveYears,
}

impl FollowUpPeriod {
    fn wire_value(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::TwoWeeks => Some("twoWeeks"),
            Self::SixWeeks => Some("sixWeeks"),
            Self::ThreeMonths => Some("threeMonths"),
            Self::SixMonths => Some("sixMonths"),
            Self::TwelveMonths => Some("twelveMonths"),
            Self::TwoYears => Some("twoYears"),
            Self::ThreeYears => Some("threeYears"),
            Self::FiveYears => Some("fiveYears"),
        }
    }
}

/// Follow-up completion tri-state. The remote contract takes the literal
/// strings `"true"`/`"false"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Completion {
    #[default]
    All,
    Completed,
    NotCompleted,
}

impl Completion {
    fn wire_value(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Completed => Some("true"),
            Self::NotCompleted => Some("false"),
        }
    }
}

/// Symptom presence tri-state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Presence {
    #[default]
    All,
    Present,
    NotPresent,
}

impl Presence {
    fn wire_value(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Present => Some("yes"),
            Self::NotPresent => Some("no"),
        }
    }
}

/// Diagnostic finding constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiagnosticState {
    #[default]
    All,
    Observed,
    Treated,
    Both,
}

impl DiagnosticState {
    fn wire_value(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Observed => Some("observed"),
            Self::Treated => Some("treated"),
            Self::Both => Some("both"),
        }
    }
}

/// Prior-treatment toggle. String-encoded booleans on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Usage {
    #[default]
    All,
    Used,
    NotUsed,
}

impl Usage {
    fn wire_value(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Used => Some("true"),
            Self::NotUsed => Some("false"),
        }
    }
}

/// Anaesthesia type constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Anaesthesia {
    #[default]
    All,
    Spinal,
    General,
    Local,
    Regional,
    SaddleBlock,
    PudendusBlock,
}

impl Anaesthesia {
    fn wire_value(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Spinal => Some("spinal"),
            Self::General => Some("general"),
            Self::Local => Some("local"),
            Self::Regional => Some("regional"),
            Self::SaddleBlock => Some("saddleBlock"),
            Self::PudendusBlock => Some("pudendusBlock"),
        }
    }
}

/// The five tracked symptoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symptom {
    Pain,
    Itching,
    Bleeding,
    Soiling,
    Prolapsing,
}

impl Symptom {
    pub const ALL: [Self; 5] = [Self::Pain, Self::Itching, Self::Bleeding, Self::Soiling, Self::Prolapsing];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Pain => "symptom_pain",
            Self::Itching => "symptom_itching",
            Self::Bleeding => "symptom_bleeding",
            Self::Soiling => "symptom_soiling",
            Self::Prolapsing => "symptom_prolapsing",
        }
    }
}

/// The six tracked diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    Fissure,
    SkinTags,
    Fistula,
    Cryptitis,
    AnalRectumProlapse,
    AnalStenosis,
}

impl Diagnostic {
    pub const ALL: [Self; 6] = [
        Self::Fissure,
        Self::SkinTags,
        Self::Fistula,
        Self::Cryptitis,
        Self::AnalRectumProlapse,
        Self::AnalStenosis,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Fissure => "diagnostic_fissure",
            Self::SkinTags => "diagnostic_skinTags",
            Self::Fistula => "diagnostic_fistula",
            Self::Cryptitis => "diagnostic_cryptitis",
            Self::AnalRectumProlapse => "diagnostic_analRectumProlapse",
            Self::AnalStenosis => "diagnostic_analStenosis",
        }
    }
}

/// The six tracked prior treatments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Treatment {
    Medication,
    Sclerosation,
    InfraredCoagulation,
    RubberBandLigation,
    HalDghal,
    Surgery,
}

impl Treatment {
    pub const ALL: [Self; 6] = [
        Self::Medication,
        Self::Sclerosation,
        Self::InfraredCoagulation,
        Self::RubberBandLigation,
        Self::HalDghal,
        Self::Surgery,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Medication => "treatment_medication",
            Self::Sclerosation => "treatment_sclerosation",
            Self::InfraredCoagulation => "treatment_infraredCoagulation",
            Self::RubberBandLigation => "treatment_rubberBandLigation",
            Self::HalDghal => "treatment_halDghal",
            Self::Surgery => "treatment_surgery",
        }
    }
}

// =============================================================================
// SETTERS
// =============================================================================

fn set_key(filters: &FilterState, key: &'static str, wire: Option<&str>) -> FilterState {
    match wire {
        None => filters.without_procedure_key(key),
        Some(value) => filters
            .update(&format!("procedureSpecific.{key}"), value)
            // Static non-empty keys cannot produce a path error.
            .unwrap_or_else(|_| filters.clone()),
    }
}

fn set_raw(filters: &FilterState, key: &'static str, value: &str) -> FilterState {
    let value = value.trim();
    if value.is_empty() {
        filters.without_procedure_key(key)
    } else {
        set_key(filters, key, Some(value))
    }
}

#[must_use]
pub fn set_wavelength(filters: &FilterState, wavelength: Wavelength) -> FilterState {
    set_key(filters, "laserWavelength", wavelength.wire_value())
}

#[must_use]
pub fn set_laser_power_min(filters: &FilterState, value: &str) -> FilterState {
    set_raw(filters, "laserPowerMin", value)
}

#[must_use]
pub fn set_laser_power_max(filters: &FilterState, value: &str) -> FilterState {
    set_raw(filters, "laserPowerMax", value)
}

#[must_use]
pub fn set_follow_up_period(filters: &FilterState, period: FollowUpPeriod) -> FilterState {
    set_key(filters, "followUpPeriod", period.wire_value())
}

#[must_use]
pub fn set_follow_up_completed(filters: &FilterState, completion: Completion) -> FilterState {
    set_key(filters, "followUpCompleted", completion.wire_value())
}

#[must_use]
pub fn set_vas_score_min(filters: &FilterState, value: &str) -> FilterState {
    set_raw(filters, "vasScoreMin", value)
}

#[must_use]
pub fn set_vas_score_max(filters: &FilterState, value: &str) -> FilterState {
    set_raw(filters, "vasScoreMax", value)
}

#[must_use]
pub fn set_symptom(filters: &FilterState, symptom: Symptom, presence: Presence) -> FilterState {
    set_key(filters, symptom.key(), presence.wire_value())
}

#[must_use]
pub fn set_diagnostic(filters: &FilterState, diagnostic: Diagnostic, state: DiagnosticState) -> FilterState {
    set_key(filters, diagnostic.key(), state.wire_value())
}

#[must_use]
pub fn set_treatment(filters: &FilterState, treatment: Treatment, usage: Usage) -> FilterState {
    set_key(filters, treatment.key(), usage.wire_value())
}

#[must_use]
pub fn set_anaesthesia(filters: &FilterState, anaesthesia: Anaesthesia) -> FilterState {
    set_key(filters, "anaesthesia", anaesthesia.wire_value())
}
