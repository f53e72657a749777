use crate::core::components::port_specs::PortSpec;
use crate::core::components::types::ComponentKind;
use crate::core::types::{ComponentId, Point, PortDirection, Size};

/// A circuit element placed on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// Unique ID, fixed at creation
    pub id: ComponentId,
    pub kind: ComponentKind,
    /// Top-left corner in logic space
    pub position: Point,
    pub size: Size,
    pub input_ports: Vec<PortSpec>,
    pub output_ports: Vec<PortSpec>,
    /// Logic level for toggleable inputs and LEDs
    pub state: Option<bool>,
    /// User-editable name for variable inputs and outputs
    pub label: Option<String>,
}

impl Component {
    /// Ports on one side of the component
    pub fn ports(&self, direction: PortDirection) -> &[PortSpec] {
        match direction {
            PortDirection::Input => &self.input_ports,
            PortDirection::Output => &self.output_ports,
        }
    }

    /// Position of a port within its direction's list
    pub fn port_index(&self, port_id: &str, direction: PortDirection) -> Option<usize> {
        self.ports(direction).iter().position(|p| p.id == port_id)
    }

    pub fn has_port(&self, port_id: &str, direction: PortDirection) -> bool {
        self.port_index(port_id, direction).is_some()
    }

    pub fn display_label(&self) -> String {
        self.kind.display_label(self.label.as_deref())
    }
}

/// Optional overrides applied when placing a component
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentOptions {
    pub label: Option<String>,
    pub size: Option<Size>,
    /// Initial input count for multi-input gates
    pub input_count: Option<usize>,
    /// Initial state for kinds that carry one
    pub state: Option<bool>,
}

impl ComponentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Some(Size::new(width, height));
        self
    }

    pub fn with_input_count(mut self, count: usize) -> Self {
        self.input_count = Some(count);
        self
    }

    pub fn with_state(mut self, state: bool) -> Self {
        self.state = Some(state);
        self
    }
}
