//! Dashboard slice.
//!
//! TRADE-OFFS
//! ==========
//! The five analytics reads land here as one atom: the original issues them
//! together and blanks the whole dashboard when any of them fails, so the
//! slice holds a single `Loadable` around all five payloads instead of five
//! independently-settling slots.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::{ActivityEntry, AnalyticsSummary, DoctorPerformance, ProcedureShare, TrendPoint};
use crate::state::Loadable;

/// All five analytics payloads, filled together or not at all.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub summary: AnalyticsSummary,
    pub trends: Vec<TrendPoint>,
    pub distribution: Vec<ProcedureShare>,
    pub recent_activity: Vec<ActivityEntry>,
    pub top_doctors: Vec<DoctorPerformance>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub data: Loadable<DashboardData>,
}

impl DashboardState {
    pub fn load_pending(&mut self) {
        self.data = Loadable::Pending;
    }

    pub fn load_fulfilled(&mut self, data: DashboardData) {
        self.data = Loadable::Fulfilled(data);
    }

    pub fn load_rejected(&mut self, message: String) {
        self.data = Loadable::Rejected(message);
    }
}
