pub mod component;
pub mod port_specs;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use component::{Component, ComponentOptions};
pub use port_specs::{port_layout, PortLayout, PortSpec};
pub use store::ComponentStore;
pub use types::{ComponentKind, FlipFlopType, GateType, InputType, NodeType, OutputType};
