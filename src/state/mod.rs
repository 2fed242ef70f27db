//! Typed application-state container.
//!
//! DESIGN
//! ======
//! State is split by domain so orchestration methods can depend on small
//! focused slices. Each slice exposes pure reducer methods named after the
//! request phase they handle (`*_pending` / `*_fulfilled` / `*_rejected`);
//! the async-task phases themselves are explicit in [`Loadable`], not
//! hidden in framework plumbing.

pub mod auth;
pub mod dashboard;
pub mod doctors;
pub mod loadable;
pub mod surgeries;

pub use loadable::Loadable;

/// The whole client-side application state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub auth: auth::AuthState,
    pub doctors: doctors::DoctorsState,
    pub surgeries: surgeries::SurgeriesState,
    pub dashboard: dashboard::DashboardState,
}
