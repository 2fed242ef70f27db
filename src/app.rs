//! Orchestration layer: one async method per remote operation.
//!
//! ARCHITECTURE
//! ============
//! `AdminApp` owns the application state, the remote collaborator, the
//! credential store, and the notification sink. Each method reproduces one
//! thunk of the original UI: set the pending phase, await the fire-once
//! request, settle the slice, and normalize the failure into a string the
//! components can show. Nothing here retries, cancels, or de-duplicates.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::time::Duration;

use crate::export::{self, ExportError, ExportSession};
use crate::net::AdminApi;
use crate::net::countries;
use crate::notify::Notifier;
use crate::session::SessionStore;
use crate::state::AppState;
use crate::state::dashboard::DashboardData;
use crate::state::doctors::{DoctorForm, DoctorFormError};

/// The admin front-end, minus its rendering.
pub struct AdminApp<A, S, N> {
    pub state: AppState,
    api: A,
    store: S,
    notify: N,
    export_reset_delay: Duration,
}

#[cfg(test)]
impl<A, S, N> AdminApp<A, S, N> {
    pub(crate) fn api_ref(&self) -> &A {
        &self.api
    }

    pub(crate) fn store_ref(&self) -> &S {
        &self.store
    }
}

impl<A: AdminApi, S: SessionStore, N: Notifier> AdminApp<A, S, N> {
    /// Build the app, hydrating auth from any persisted session.
    pub fn new(api: A, store: S, notify: N) -> Self {
        let mut state = AppState::default();
        let stored = store.load();
        if let Some(session) = &stored {
            api.set_token(Some(session.access_token.clone()));
        }
        state.auth = crate::state::auth::AuthState::hydrated(stored);
        Self { state, api, store, notify, export_reset_delay: export::RESET_DELAY }
    }

    /// Shorten the post-export reset delay (tests).
    pub fn with_export_reset_delay(mut self, delay: Duration) -> Self {
        self.export_reset_delay = delay;
        self
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    pub async fn login(&mut self, email: &str, password: &str) {
        self.state.auth.login_pending();
        match self.api.admin_login(email, password).await {
            Ok(response) => {
                self.store.save(&response.access_token, &response.admin);
                self.api.set_token(Some(response.access_token.clone()));
                self.state.auth.login_fulfilled(&response);
                self.notify.success("Logged in");
            }
            Err(e) => {
                self.state.auth.login_rejected(e.to_string());
                self.notify.error(&e.to_string());
            }
        }
    }

    /// Credentials are cleared locally even when the remote logout fails.
    pub async fn logout(&mut self) {
        self.state.auth.logout_pending();
        let result = self.api.logout().await;
        self.store.clear();
        self.api.set_token(None);
        self.state.auth.logout_settled();
        match result {
            Ok(()) => self.notify.success("Logged out"),
            Err(e) => {
                tracing::warn!(error = %e, "logout request failed, credentials cleared anyway");
                self.notify.error("Logout failed");
            }
        }
    }

    // =========================================================================
    // DOCTORS
    // =========================================================================

    pub async fn load_doctors(&mut self) {
        self.state.doctors.request_pending();
        match self.api.fetch_doctors().await {
            Ok(doctors) => self.state.doctors.list_fulfilled(doctors),
            Err(e) => self.state.doctors.request_rejected(e.to_string()),
        }
    }

    /// Add or update a doctor, gated on client-side validation: an
    /// incomplete form sends nothing and mutates nothing.
    ///
    /// # Errors
    ///
    /// [`DoctorFormError`] naming the missing field.
    pub async fn save_doctor(&mut self, form: &DoctorForm) -> Result<(), DoctorFormError> {
        let payload = form.validate()?;
        self.state.doctors.request_pending();
        let result = match &form.id {
            None => self.api.add_doctor(&payload).await.map(|d| self.state.doctors.add_fulfilled(d)),
            Some(id) => self
                .api
                .update_doctor(id, &payload)
                .await
                .map(|d| self.state.doctors.update_fulfilled(d)),
        };
        match result {
            Ok(()) => self.notify.success("Doctor saved"),
            Err(e) => {
                self.state.doctors.request_rejected(e.to_string());
                self.notify.error(&e.to_string());
            }
        }
        Ok(())
    }

    /// Country names for the doctor form; failures collapse to an empty
    /// list and never block the form.
    pub async fn load_countries(&self, http: &reqwest::Client) -> Vec<String> {
        countries::fetch_country_names(http, countries::COUNTRIES_URL).await
    }

    // =========================================================================
    // SURGERIES
    // =========================================================================

    pub async fn load_surgeries(&mut self) {
        self.state.surgeries.request_pending();
        match self.api.fetch_surgeries().await {
            Ok(records) => self.state.surgeries.list_fulfilled(records),
            Err(e) => self.state.surgeries.request_rejected(e.to_string()),
        }
    }

    pub async fn load_doctor_surgeries(&mut self, doctor_id: &str) {
        self.state.surgeries.request_pending();
        match self.api.fetch_doctor_surgeries(doctor_id).await {
            Ok(response) => self.state.surgeries.doctor_fulfilled(response),
            Err(e) => self.state.surgeries.request_rejected(e.to_string()),
        }
    }

    pub async fn load_surgery(&mut self, id: &str) {
        self.state.surgeries.request_pending();
        match self.api.fetch_surgery(id).await {
            Ok(record) => self.state.surgeries.current_fulfilled(record),
            Err(e) => self.state.surgeries.request_rejected(e.to_string()),
        }
    }

    pub async fn filter_surgeries(&mut self, session: &ExportSession) {
        self.state.surgeries.request_pending();
        match self.api.filter_surgeries(&session.filters).await {
            Ok(records) => self.state.surgeries.filter_fulfilled(records),
            Err(e) => self.state.surgeries.request_rejected(e.to_string()),
        }
    }

    /// Run the submit half of the export wizard against the remote API.
    ///
    /// # Errors
    ///
    /// See [`export::run_export`].
    pub async fn run_export(&mut self, session: &mut ExportSession) -> Result<Vec<u8>, ExportError> {
        self.state.surgeries.export_pending();
        let result = export::run_export(&self.api, &self.notify, session, self.export_reset_delay).await;
        self.state
            .surgeries
            .export_settled(result.as_ref().map(|_| ()).map_err(ToString::to_string));
        result
    }

    // =========================================================================
    // DASHBOARD
    // =========================================================================

    /// Five-way fan-out/fan-in over the analytics endpoints.
    ///
    /// All-or-nothing on purpose: one failing fetch rejects the combined
    /// load and none of the five slots changes.
    pub async fn load_dashboard(&mut self) {
        self.state.dashboard.load_pending();
        let joined = tokio::try_join!(
            self.api.fetch_summary(),
            self.api.fetch_surgery_trends(),
            self.api.fetch_procedure_distribution(),
            self.api.fetch_recent_activity(),
            self.api.fetch_top_doctors(),
        );
        match joined {
            Ok((summary, trends, distribution, recent_activity, top_doctors)) => {
                self.state.dashboard.load_fulfilled(DashboardData {
                    summary,
                    trends,
                    distribution,
                    recent_activity,
                    top_doctors,
                });
            }
            Err(e) => self.state.dashboard.load_rejected(e.to_string()),
        }
    }
}
