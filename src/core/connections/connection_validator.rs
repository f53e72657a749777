use crate::core::components::Component;
use crate::core::connections::connection::Connection;
use crate::core::connections::port_validator::PortValidator;
use crate::core::types::{PortDirection, PortRef};

/// Centralized legality checks for drawing a wire between two ports
pub struct ConnectionValidator;

impl ConnectionValidator {
    /// Validate a wire drawn from `start` to `end`, in either direction
    ///
    /// Checks run in order: opposite directions, both ports exist, no
    /// duplicate pair, target input still free. Returns the pair normalized
    /// to `(output, input)`.
    pub fn validate_connection(
        components: &[Component],
        connections: &[Connection],
        start: &PortRef,
        end: &PortRef,
    ) -> Result<(PortRef, PortRef), String> {
        Self::check_directions(start, end)?;
        PortValidator::validate_port(components, start)?;
        PortValidator::validate_port(components, end)?;

        let (from, to) = Self::normalize(start, end);
        Self::check_duplicate(connections, &from, &to)?;
        Self::check_input_port_collision(connections, &to)?;
        Ok((from, to))
    }

    /// Reject input→input and output→output wires
    pub fn check_directions(start: &PortRef, end: &PortRef) -> Result<(), String> {
        if !start.direction.can_connect_to(end.direction) {
            return Err(format!(
                "Cannot connect {} to {}: both ports are {:?}",
                start, end, start.direction
            ));
        }
        Ok(())
    }

    /// Order a pair of opposite ports as `(output, input)`
    pub fn normalize(a: &PortRef, b: &PortRef) -> (PortRef, PortRef) {
        if a.direction == PortDirection::Output {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        }
    }

    /// Check that the pair is not already wired, in either orientation
    pub fn check_duplicate(connections: &[Connection], from: &PortRef, to: &PortRef) -> Result<(), String> {
        let exists = connections.iter().any(|c| {
            (c.from.matches(&from.component_id, &from.port_id) && c.to.matches(&to.component_id, &to.port_id))
                || (c.from.matches(&to.component_id, &to.port_id) && c.to.matches(&from.component_id, &from.port_id))
        });
        if exists {
            return Err(format!("Connection {} -> {} already exists", from, to));
        }
        Ok(())
    }

    /// Check if an input port is already driven (prevents multiple drivers)
    pub fn check_input_port_collision(connections: &[Connection], to: &PortRef) -> Result<(), String> {
        if let Some(existing) = connections
            .iter()
            .find(|c| c.to.matches(&to.component_id, &to.port_id))
        {
            return Err(format!(
                "Input port '{}' on component '{}' is already driven by {}. Multiple drivers not allowed.",
                to.port_id, to.component_id, existing.source_port()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::components::{ComponentKind, ComponentOptions, ComponentStore, GateType, InputType};
    use crate::core::types::ComponentId;

    #[test]
    fn test_validate_connection_normalizes() {
        let mut store = ComponentStore::default();
        let input = store.create(ComponentKind::Input(InputType::High), 0.0, 0.0, ComponentOptions::new());
        let gate = store.create(ComponentKind::Gate(GateType::Or), 100.0, 0.0, ComponentOptions::new());

        let (from, to) = ConnectionValidator::validate_connection(
            store.as_slice(),
            &[],
            &gate.id.input("in1"),
            &input.id.output("out"),
        )
        .expect("legal wire");
        assert_eq!(from, input.id.output("out"));
        assert_eq!(to, gate.id.input("in1"));
    }

    #[test]
    fn test_same_direction_rejected_first() {
        let result = ConnectionValidator::check_directions(
            &ComponentId::new("a").output("out"),
            &ComponentId::new("b").output("out"),
        );
        assert!(result.unwrap_err().contains("both ports are Output"));
    }
}
