//! Domain logic for the buildnote field-service companion.
//!
//! Everything in this crate is pure: no I/O, no clocks (callers pass `now`
//! explicitly), no network. The REST access layer (`buildnote-client`) and
//! the state layer (`buildnote-store`) build on top of these types.

pub mod decode;
pub mod error;
pub mod measurement;
pub mod model;
pub mod status;
pub mod timeclock;
pub mod types;
pub mod units;
