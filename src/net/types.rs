//! Wire types for the remote admin API.
//!
//! Field names follow the remote JSON contract exactly (camelCase, Mongo
//! style `_id` identifiers), so every type carries serde renames rather
//! than leaking wire spelling into the rest of the crate.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// AUTH
// =============================================================================

/// The authenticated administrator profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Response of `POST /api/v1/admin-login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub admin: Admin,
}

// =============================================================================
// DOCTORS
// =============================================================================

/// A doctor record as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub email: String,
    pub phone: String,
    pub status: String,
}

/// Body of the add/update doctor requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorPayload {
    pub name: String,
    pub specialty: String,
    pub email: String,
    pub phone: String,
    pub status: String,
}

/// `GET /api/users` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct UsersEnvelope {
    pub users: Vec<Doctor>,
}

/// Add/update doctor response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct UserEnvelope {
    pub user: Doctor,
}

// =============================================================================
// SURGERIES
// =============================================================================

/// A surgery record row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurgeryRecord {
    /// Mongo `_id` in list payloads; some detail payloads send `id`.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub patient_name: String,
    pub patient_age: u32,
    pub procedure: String,
    #[serde(default)]
    pub duration: Option<String>,
    pub doctor: String,
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    pub status: String,
}

/// Generic `{data: ...}` envelope used by the surgery endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Response of `GET /api/v1/surgery/{doctorId}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DoctorSurgeries {
    pub data: Vec<SurgeryRecord>,
    pub count: u64,
    pub doctor: Option<Doctor>,
}

// =============================================================================
// DASHBOARD ANALYTICS
// =============================================================================

/// Headline counters shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_doctors: u64,
    pub total_surgeries: u64,
    pub active_patients: u64,
    pub uptime_percent: f64,
}

/// One point of the monthly surgery trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    pub count: u64,
}

/// Share of surgeries per procedure type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureShare {
    pub procedure: String,
    pub count: u64,
}

/// One row of the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: String,
    pub doctor: String,
    pub action: String,
    pub procedure: String,
    pub time: String,
    pub status: String,
}

/// One row of the top-doctors table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorPerformance {
    pub doctor: String,
    pub surgeries: u64,
}

// =============================================================================
// THIRD-PARTY: restcountries.com
// =============================================================================

/// `GET https://restcountries.com/v3.1/all?fields=name` element.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryName {
    pub name: CountryNameFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryNameFields {
    pub common: String,
}
