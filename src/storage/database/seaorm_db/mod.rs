// Module declarations
mod backend;
mod connection;
mod order_ops;
mod types;


// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmDatabase};
