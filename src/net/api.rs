//! Production `AdminApi` implementation over `reqwest`.
//!
//! ERROR HANDLING
//! ==============
//! Every failure funnels into `ApiError` before leaving this module; the
//! remote `message` field is preferred over raw bodies for non-success
//! statuses. Client-level timeouts are the only guard against hung
//! requests — a slow backend simply keeps its caller pending.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::RwLock;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{ApiError, response_error};
use crate::export::session::ExportRequest;
use crate::filters::FilterState;
use crate::net::AdminApi;
use crate::net::types::{
    ActivityEntry, AnalyticsSummary, DataEnvelope, Doctor, DoctorPayload, DoctorPerformance, DoctorSurgeries,
    LoginResponse, ProcedureShare, SurgeryRecord, TrendPoint, UserEnvelope, UsersEnvelope,
};

/// Bearer-authenticated HTTP client for the remote admin API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Build the client from config.
    ///
    /// # Errors
    ///
    /// [`ApiError::ClientBuild`] when the underlying client cannot be
    /// constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone(), token: RwLock::new(None) })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn v1(&self, path: &str) -> String {
        format!("{}/api/v1{path}", self.base_url)
    }

    fn bearer(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.bearer() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = self
            .authed(request)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let code = status.as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(response_error(code, &body))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        let response = self.send(self.http.get(url)).await?;
        decode(response).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(&self, url: String, body: &B) -> Result<T, ApiError> {
        let response = self.send(self.http.post(url).json(body)).await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let text = response.text().await.map_err(|e| ApiError::Request(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
}

impl AdminApi for ApiClient {
    fn set_token(&self, token: Option<String>) {
        match self.token.write() {
            Ok(mut guard) => *guard = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
    }

    async fn admin_login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        self.post_json(self.v1("/admin-login"), &body).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.send(self.http.post(self.v1("/logout"))).await.map(|_| ())
    }

    async fn fetch_doctors(&self) -> Result<Vec<Doctor>, ApiError> {
        let envelope: UsersEnvelope = self.get_json(self.url("/api/users")).await?;
        Ok(envelope.users)
    }

    async fn add_doctor(&self, doctor: &DoctorPayload) -> Result<Doctor, ApiError> {
        let envelope: UserEnvelope = self.post_json(self.url("/api/register"), doctor).await?;
        Ok(envelope.user)
    }

    async fn update_doctor(&self, id: &str, doctor: &DoctorPayload) -> Result<Doctor, ApiError> {
        let envelope: UserEnvelope = self.post_json(self.url(&format!("/api/users/{id}")), doctor).await?;
        Ok(envelope.user)
    }

    async fn fetch_surgeries(&self) -> Result<Vec<SurgeryRecord>, ApiError> {
        let envelope: DataEnvelope<Vec<SurgeryRecord>> = self.get_json(self.v1("/surgery")).await?;
        Ok(envelope.data)
    }

    async fn fetch_doctor_surgeries(&self, doctor_id: &str) -> Result<DoctorSurgeries, ApiError> {
        self.get_json(self.v1(&format!("/surgery/{doctor_id}"))).await
    }

    async fn fetch_surgery(&self, id: &str) -> Result<SurgeryRecord, ApiError> {
        self.get_json(self.v1(&format!("/admin/surgery/{id}"))).await
    }

    async fn filter_surgeries(&self, filters: &FilterState) -> Result<Vec<SurgeryRecord>, ApiError> {
        let envelope: DataEnvelope<Vec<SurgeryRecord>> =
            self.post_json(self.url("/surgeries/filter"), filters).await?;
        Ok(envelope.data)
    }

    async fn export_filtered(&self, request: &ExportRequest) -> Result<Vec<u8>, ApiError> {
        let response = self.send(self.http.post(self.url("/surgery/filter-export")).json(request)).await?;
        let bytes = response.bytes().await.map_err(|e| ApiError::Request(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    async fn fetch_summary(&self) -> Result<AnalyticsSummary, ApiError> {
        self.get_json(self.v1("/analytics/summary")).await
    }

    async fn fetch_surgery_trends(&self) -> Result<Vec<TrendPoint>, ApiError> {
        let envelope: DataEnvelope<Vec<TrendPoint>> = self.get_json(self.v1("/analytics/surgery-trends")).await?;
        Ok(envelope.data)
    }

    async fn fetch_procedure_distribution(&self) -> Result<Vec<ProcedureShare>, ApiError> {
        let envelope: DataEnvelope<Vec<ProcedureShare>> =
            self.get_json(self.v1("/analytics/procedure-distribution")).await?;
        Ok(envelope.data)
    }

    async fn fetch_recent_activity(&self) -> Result<Vec<ActivityEntry>, ApiError> {
        let envelope: DataEnvelope<Vec<ActivityEntry>> = self.get_json(self.v1("/analytics/recent-activity")).await?;
        Ok(envelope.data)
    }

    async fn fetch_top_doctors(&self) -> Result<Vec<DoctorPerformance>, ApiError> {
        let envelope: DataEnvelope<Vec<DoctorPerformance>> = self.get_json(self.v1("/analytics/top-doctors")).await?;
        Ok(envelope.data)
    }
}
