pub mod connection;
pub mod connection_validator;
pub mod port_validator;
pub mod store;

// Re-export commonly used types
pub use connection::{Connection, Endpoint};
pub use connection_validator::ConnectionValidator;
pub use port_validator::PortValidator;
pub use store::ConnectionStore;
