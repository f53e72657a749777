use crate::core::types::{ComponentId, ConnectionId, Point, PortDirection, PortRef};

/// One end of a wire, with its last known anchor position
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub component_id: ComponentId,
    pub port_id: String,
    /// Anchor position cached for drawing, kept in sync by the connection store
    pub position: Point,
}

impl Endpoint {
    pub fn new(port: &PortRef, position: Point) -> Self {
        Self {
            component_id: port.component_id.clone(),
            port_id: port.port_id.clone(),
            position,
        }
    }

    pub fn matches(&self, component_id: &ComponentId, port_id: &str) -> bool {
        &self.component_id == component_id && self.port_id == port_id
    }
}

/// A directed wire from an output port to an input port
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub id: ConnectionId,
    /// Output side
    pub from: Endpoint,
    /// Input side
    pub to: Endpoint,
}

impl Connection {
    pub fn touches(&self, component_id: &ComponentId) -> bool {
        &self.from.component_id == component_id || &self.to.component_id == component_id
    }

    pub fn source_port(&self) -> PortRef {
        PortRef::new(self.from.component_id.clone(), &self.from.port_id, PortDirection::Output)
    }

    pub fn target_port(&self) -> PortRef {
        PortRef::new(self.to.component_id.clone(), &self.to.port_id, PortDirection::Input)
    }
}
