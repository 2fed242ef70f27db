//! Headless core of the surgery-record administration front-end.
//!
//! ARCHITECTURE
//! ============
//! The crate mirrors the remote admin API into a typed application-state
//! container (`state`), drives it through async orchestration methods
//! (`app`), and carries the filter/export subsystem (`filters`, `export`,
//! `procedures`) as a plain state machine over a pure copy-on-write
//! filter tree. All rendering, routing, and binary artifact generation
//! live outside this crate.

pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod filters;
pub mod net;
pub mod notify;
pub mod procedures;
pub mod session;
pub mod state;
