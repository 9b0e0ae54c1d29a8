/// Order entity module
pub mod order;

pub use order::Entity as Order;
