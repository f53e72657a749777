pub mod session;
pub mod shortcuts;

// Re-export commonly used types
pub use session::CircuitEditor;
pub use shortcuts::EditorShortcut;
