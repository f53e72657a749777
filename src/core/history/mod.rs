pub mod manager;
pub mod snapshot;

// Re-export commonly used types
pub use manager::HistoryManager;
pub use snapshot::Snapshot;
