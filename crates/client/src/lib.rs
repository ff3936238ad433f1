//! REST access layer for the buildnote backend.
//!
//! [`api::BuildnoteApi`] wraps the documented endpoint set with `reqwest`;
//! [`dto`] maps the backend's loosely-typed wire rows onto the domain
//! records from `buildnote-core`. Transport failures, non-2xx statuses, and
//! undecodable payloads are distinct [`error::ApiError`] variants, so a
//! corrupt response is never mistaken for an empty dataset.

pub mod api;
pub mod config;
pub mod dto;
pub mod error;

pub use api::BuildnoteApi;
pub use config::ClientConfig;
pub use error::ApiError;
