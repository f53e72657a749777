pub mod core;

// Re-export commonly used types
pub use crate::core::analysis::{CircuitAnalyzer, CircuitGraph, RuleBook, ValidationResult};
pub use crate::core::components::{Component, ComponentKind, ComponentOptions};
pub use crate::core::config::EditorConfig;
pub use crate::core::editor::{CircuitEditor, EditorShortcut};
pub use crate::core::types::{ComponentId, ConnectionId, Point, PortDirection, PortRef, Size};
