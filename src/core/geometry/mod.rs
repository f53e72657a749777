pub mod ports;
pub mod viewport;

// Re-export commonly used types
pub use ports::{port_position, port_position_by_id};
pub use viewport::{to_logic_space, to_screen_space, ContainerRect, Viewport};
