//! REST plumbing for the remote admin API.
//!
//! DESIGN
//! ======
//! `AdminApi` is the seam between orchestration and transport: the state
//! layer is generic over it, `ApiClient` is the one production
//! implementation, and tests substitute recording fakes. Each method is a
//! fire-once request — no retries, no cancellation, no de-duplication.

pub mod api;
pub mod countries;
pub mod types;

pub use api::ApiClient;

use crate::error::ApiError;
use crate::export::session::ExportRequest;
use crate::filters::FilterState;
use crate::net::types::{
    ActivityEntry, AnalyticsSummary, Doctor, DoctorPayload, DoctorPerformance, DoctorSurgeries, LoginResponse,
    ProcedureShare, SurgeryRecord, TrendPoint,
};

/// The remote collaborator consumed by the admin front-end.
#[allow(async_fn_in_trait)]
pub trait AdminApi {
    /// Install or clear the bearer token used by subsequent requests.
    fn set_token(&self, _token: Option<String>) {}

    async fn admin_login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;

    async fn fetch_doctors(&self) -> Result<Vec<Doctor>, ApiError>;
    async fn add_doctor(&self, doctor: &DoctorPayload) -> Result<Doctor, ApiError>;
    async fn update_doctor(&self, id: &str, doctor: &DoctorPayload) -> Result<Doctor, ApiError>;

    async fn fetch_surgeries(&self) -> Result<Vec<SurgeryRecord>, ApiError>;
    async fn fetch_doctor_surgeries(&self, doctor_id: &str) -> Result<DoctorSurgeries, ApiError>;
    async fn fetch_surgery(&self, id: &str) -> Result<SurgeryRecord, ApiError>;
    async fn filter_surgeries(&self, filters: &FilterState) -> Result<Vec<SurgeryRecord>, ApiError>;
    async fn export_filtered(&self, request: &ExportRequest) -> Result<Vec<u8>, ApiError>;

    async fn fetch_summary(&self) -> Result<AnalyticsSummary, ApiError>;
    async fn fetch_surgery_trends(&self) -> Result<Vec<TrendPoint>, ApiError>;
    async fn fetch_procedure_distribution(&self) -> Result<Vec<ProcedureShare>, ApiError>;
    async fn fetch_recent_activity(&self) -> Result<Vec<ActivityEntry>, ApiError>;
    async fn fetch_top_doctors(&self) -> Result<Vec<DoctorPerformance>, ApiError>;
}
