//! Procedure catalog backing the export wizard's first step.
//!
//! The catalog is closed: six surgery types plus the `"all"`
//! pseudo-procedure. Only Biolitec LHP is available today; the rest are
//! announced but cannot be selected, and the selector rejects them without
//! firing any callback.

#[cfg(test)]
#[path = "procedures_test.rs"]
mod procedures_test;

use serde::{Deserialize, Serialize};

/// A surgery type, or the `"all"` pseudo-procedure covering every type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProcedureId {
    All,
    BiolitecLhp,
    Cardiac,
    Neurosurgery,
    Orthopedic,
    General,
    Ent,
}

impl ProcedureId {
    /// Wire identifier, e.g. `"biolitec-lhp"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::BiolitecLhp => "biolitec-lhp",
            Self::Cardiac => "cardiac",
            Self::Neurosurgery => "neurosurgery",
            Self::Orthopedic => "orthopedic",
            Self::General => "general",
            Self::Ent => "ent",
        }
    }

    /// Whether the procedure can currently be selected for export.
    /// `All` is always permitted.
    #[must_use]
    pub fn is_available(self) -> bool {
        matches!(self, Self::All | Self::BiolitecLhp)
    }

    /// Whether a procedure-specific filter editor exists. Procedures
    /// without one still export fine with common filters only.
    #[must_use]
    pub fn has_filter_editor(self) -> bool {
        matches!(self, Self::BiolitecLhp)
    }
}

/// One entry of the selector catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcedureInfo {
    pub id: ProcedureId,
    pub name: &'static str,
    pub description: &'static str,
    pub available: bool,
}

/// The closed set of selectable procedures, in display order. `All` is not
/// listed here; the selector offers it as a separate always-on action.
#[must_use]
pub fn catalog() -> &'static [ProcedureInfo] {
    const CATALOG: &[ProcedureInfo] = &[
        ProcedureInfo {
            id: ProcedureId::BiolitecLhp,
            name: "Biolitec Laser LHP",
            description: "Laser hemorrhoid procedure",
            available: true,
        },
        ProcedureInfo {
            id: ProcedureId::Cardiac,
            name: "Cardiac Surgery",
            description: "Coming soon",
            available: false,
        },
        ProcedureInfo {
            id: ProcedureId::Neurosurgery,
            name: "Neurosurgery",
            description: "Coming soon",
            available: false,
        },
        ProcedureInfo {
            id: ProcedureId::Orthopedic,
            name: "Orthopedic Surgery",
            description: "Coming soon",
            available: false,
        },
        ProcedureInfo {
            id: ProcedureId::General,
            name: "General Surgery",
            description: "Coming soon",
            available: false,
        },
        ProcedureInfo {
            id: ProcedureId::Ent,
            name: "ENT Surgery",
            description: "Coming soon",
            available: false,
        },
    ];
    CATALOG
}
