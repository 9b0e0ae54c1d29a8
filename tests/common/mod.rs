//! Shared fixtures for the integration suites

pub mod assertions;
pub mod database;
pub mod fixtures;

pub use assertions::ReportAssertions;
pub use backends::ScriptedBackend;
pub use database::TestDatabase;
pub use fixtures::OrderFactory;
