//! Doctor management slice: list, add/update reducers, and the
//! client-side-validated form.

#[cfg(test)]
#[path = "doctors_test.rs"]
mod doctors_test;

use crate::net::types::{Doctor, DoctorPayload};
use crate::state::Loadable;

/// Doctor activity status used by the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DoctorStatus {
    #[default]
    Active,
    Inactive,
}

impl DoctorStatus {
    #[must_use]
    pub fn wire_value(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// Required field missing from the doctor form; no request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("required field missing: {field}")]
pub struct DoctorFormError {
    pub field: &'static str,
}

/// The add/edit doctor form. `id` is set in edit mode only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorForm {
    pub id: Option<String>,
    pub name: String,
    pub specialty: String,
    pub email: String,
    pub phone: String,
    pub status: DoctorStatus,
    pub country: String,
}

impl DoctorForm {
    /// Gate submission on the required fields, producing the wire payload.
    ///
    /// # Errors
    ///
    /// [`DoctorFormError`] naming the first missing field.
    pub fn validate(&self) -> Result<DoctorPayload, DoctorFormError> {
        let required = [
            ("name", &self.name),
            ("specialty", &self.specialty),
            ("email", &self.email),
            ("phone", &self.phone),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DoctorFormError { field });
            }
        }
        Ok(DoctorPayload {
            name: self.name.clone(),
            specialty: self.specialty.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            status: self.status.wire_value().to_string(),
        })
    }
}

/// Doctor collection and request phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorsState {
    pub doctors: Vec<Doctor>,
    pub request: Loadable<()>,
}

impl DoctorsState {
    pub fn request_pending(&mut self) {
        self.request = Loadable::Pending;
    }

    pub fn request_rejected(&mut self, message: String) {
        self.request = Loadable::Rejected(message);
    }

    pub fn list_fulfilled(&mut self, doctors: Vec<Doctor>) {
        self.doctors = doctors;
        self.request = Loadable::Fulfilled(());
    }

    /// New doctors go to the top of the list, like the original.
    pub fn add_fulfilled(&mut self, doctor: Doctor) {
        self.doctors.insert(0, doctor);
        self.request = Loadable::Fulfilled(());
    }

    /// Replace the matching row; an unknown id leaves the list unchanged.
    pub fn update_fulfilled(&mut self, doctor: Doctor) {
        if let Some(existing) = self.doctors.iter_mut().find(|d| d.id == doctor.id) {
            *existing = doctor;
        }
        self.request = Loadable::Fulfilled(());
    }

    pub fn clear_error(&mut self) {
        self.request.clear_error();
    }
}
