//! Surgery-record slice: the full listing, per-doctor listing, the record
//! detail view, filter results, and the export-request phase.

#[cfg(test)]
#[path = "surgeries_test.rs"]
mod surgeries_test;

use crate::net::types::{Doctor, DoctorSurgeries, SurgeryRecord};
use crate::state::Loadable;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurgeriesState {
    pub surgeries: Vec<SurgeryRecord>,
    pub doctor_surgeries: Vec<SurgeryRecord>,
    pub doctor: Option<Doctor>,
    pub count: u64,
    pub current: Option<SurgeryRecord>,
    pub filtered: Vec<SurgeryRecord>,
    pub request: Loadable<()>,
    pub export: Loadable<()>,
}

impl SurgeriesState {
    pub fn request_pending(&mut self) {
        self.request = Loadable::Pending;
    }

    pub fn request_rejected(&mut self, message: String) {
        self.request = Loadable::Rejected(message);
    }

    pub fn list_fulfilled(&mut self, records: Vec<SurgeryRecord>) {
        self.surgeries = records;
        self.request = Loadable::Fulfilled(());
    }

    pub fn doctor_fulfilled(&mut self, response: DoctorSurgeries) {
        self.doctor_surgeries = response.data;
        self.count = response.count;
        self.doctor = response.doctor;
        self.request = Loadable::Fulfilled(());
    }

    pub fn current_fulfilled(&mut self, record: SurgeryRecord) {
        self.current = Some(record);
        self.request = Loadable::Fulfilled(());
    }

    pub fn filter_fulfilled(&mut self, records: Vec<SurgeryRecord>) {
        self.filtered = records;
        self.request = Loadable::Fulfilled(());
    }

    pub fn export_pending(&mut self) {
        self.export = Loadable::Pending;
    }

    pub fn export_settled(&mut self, result: Result<(), String>) {
        self.export = match result {
            Ok(()) => Loadable::Fulfilled(()),
            Err(message) => Loadable::Rejected(message),
        };
    }

    pub fn clear_current(&mut self) {
        self.current = None;
    }

    pub fn clear_error(&mut self) {
        self.request.clear_error();
        self.export.clear_error();
    }
}
