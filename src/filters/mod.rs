//! Filter model for surgery-record queries and exports.
//!
//! DESIGN
//! ======
//! `model` owns the canonical `FilterState` tree and its pure dot-path
//! updater; `common` and `biolitec` are the two field catalogs that write
//! into it; `range` is the single validated-range type enforced at the
//! submit boundary. Editors stay permissive (raw input strings), the
//! boundary does not.

pub mod biolitec;
pub mod common;
pub mod model;
pub mod range;

pub use model::{FilterPathError, FilterState, Gender, RecordStatus};
pub use range::{NumericRange, RangeError};
