//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&Store` as the first argument, one repository per feature area.

pub mod appointment_repo;
pub mod chat_repo;
pub mod customer_repo;
pub mod document_repo;
pub mod material_repo;
pub mod measurement_repo;
pub mod project_repo;
pub mod time_entry_repo;

pub use appointment_repo::AppointmentRepo;
pub use chat_repo::ChatRepo;
pub use customer_repo::CustomerRepo;
pub use document_repo::DocumentRepo;
pub use material_repo::MaterialRepo;
pub use measurement_repo::MeasurementRepo;
pub use project_repo::ProjectRepo;
pub use time_entry_repo::TimeEntryRepo;
