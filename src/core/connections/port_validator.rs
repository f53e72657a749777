use crate::core::components::Component;
use crate::core::types::PortRef;

/// Port validation utilities for connection endpoints
pub struct PortValidator;

impl PortValidator {
    /// Validate that the referenced component exists and has the port on the given side
    pub fn validate_port<'a>(components: &'a [Component], port: &PortRef) -> Result<&'a Component, String> {
        let component = components
            .iter()
            .find(|c| c.id == port.component_id)
            .ok_or_else(|| format!("Component '{}' not found", port.component_id))?;

        if !component.has_port(&port.port_id, port.direction) {
            let valid: Vec<&str> = component
                .ports(port.direction)
                .iter()
                .map(|p| p.id.as_str())
                .collect();
            return Err(format!(
                "{:?} port '{}' not found on component '{}'. Valid {:?} ports: {:?}",
                port.direction, port.port_id, port.component_id, port.direction, valid
            ));
        }
        Ok(component)
    }
}
