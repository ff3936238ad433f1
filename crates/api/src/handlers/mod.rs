pub mod appointment;
pub mod material;
pub mod measurement;
pub mod project;
