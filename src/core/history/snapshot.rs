use crate::core::components::Component;
use crate::core::connections::Connection;
use std::sync::Arc;

/// Immutable capture of the editor's components and connections
///
/// Holds the stores' `Arc` handles, so taking a snapshot is O(1); the stores
/// replace their collections copy-on-write, which keeps captured snapshots
/// frozen. Equality compares the contents, not the handles.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub components: Arc<Vec<Component>>,
    pub connections: Arc<Vec<Connection>>,
}

impl Snapshot {
    pub fn new(components: Arc<Vec<Component>>, connections: Arc<Vec<Connection>>) -> Self {
        Self { components, connections }
    }

    pub fn empty() -> Self {
        Self::new(Arc::new(Vec::new()), Arc::new(Vec::new()))
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.connections.is_empty()
    }
}
