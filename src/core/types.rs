use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a placed component
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    /// Create a component ID from an existing string (imports, tests)
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh, unique ID with a readable prefix
    pub fn generate(prefix: &str) -> Self {
        Self(format!("{}-{}", prefix, Uuid::new_v4().simple()))
    }

    /// Get the raw ID string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create an input port reference on this component
    pub fn input(&self, port: &str) -> PortRef {
        PortRef::new(self.clone(), port, PortDirection::Input)
    }

    /// Create an output port reference on this component
    pub fn output(&self, port: &str) -> PortRef {
        PortRef::new(self.clone(), port, PortDirection::Output)
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Identifier of a wire between two ports
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(String);

impl ConnectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(format!("wire-{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ConnectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A point in logic (model) space or screen space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by an offset
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Width and height of a component's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clamp both dimensions to a lower bound
    pub fn clamped(self, min: f64) -> Self {
        Self::new(self.width.max(min), self.height.max(min))
    }
}

/// Direction of a port relative to its component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    /// Receives a signal from exactly one driver
    Input,
    /// Drives any number of inputs
    Output,
}

impl PortDirection {
    pub fn opposite(self) -> Self {
        match self {
            PortDirection::Input => PortDirection::Output,
            PortDirection::Output => PortDirection::Input,
        }
    }

    /// Wires always join an output to an input
    pub fn can_connect_to(self, other: PortDirection) -> bool {
        other == self.opposite()
    }
}

/// Reference to one port on one component
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PortRef {
    pub component_id: ComponentId,
    pub port_id: String,
    pub direction: PortDirection,
}

impl PortRef {
    pub fn new(component_id: ComponentId, port_id: &str, direction: PortDirection) -> Self {
        Self {
            component_id,
            port_id: port_id.to_string(),
            direction,
        }
    }
}

impl std::fmt::Display for PortRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.component_id, self.port_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = ComponentId::generate("gate");
        let b = ComponentId::generate("gate");
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("gate-"));
    }

    #[test]
    fn test_port_direction_pairs() {
        assert!(PortDirection::Output.can_connect_to(PortDirection::Input));
        assert!(PortDirection::Input.can_connect_to(PortDirection::Output));
        assert!(!PortDirection::Input.can_connect_to(PortDirection::Input));
        assert!(!PortDirection::Output.can_connect_to(PortDirection::Output));
        assert_eq!(PortDirection::Input.opposite(), PortDirection::Output);
    }

    #[test]
    fn test_size_clamp() {
        let size = Size::new(10.0, 45.0).clamped(30.0);
        assert_eq!(size, Size::new(30.0, 45.0));
    }
}
