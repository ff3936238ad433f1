//! Buildnote development backend library.
//!
//! An axum server carrying the fixture dataset in memory and serving the
//! same endpoint set as the hosted backend, so the mobile client's REST
//! layer can be developed and integration-tested against it without a
//! network dependency. Exposes the building blocks (config, state, error
//! handling, routes, fixtures) so integration tests and the binary
//! entrypoint can both access them.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod routes;
pub mod state;
