use crate::core::components::Component;
use crate::core::connections::connection::{Connection, Endpoint};
use crate::core::connections::connection_validator::ConnectionValidator;
use crate::core::geometry::port_position_by_id;
use crate::core::types::{ComponentId, ConnectionId, Point, PortDirection, PortRef};
use log::debug;
use std::sync::Arc;

/// Owns the wires of a circuit and the half-drawn wire the user is dragging
///
/// Like the component store, the collection is replaced copy-on-write.
/// Endpoint coordinates are derived from the live components passed in by
/// the caller, so every method that can move an anchor takes them.
#[derive(Default)]
pub struct ConnectionStore {
    connections: Arc<Vec<Connection>>,
    pending: Option<PortRef>,
}

impl ConnectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the current collection
    pub fn connections(&self) -> Arc<Vec<Connection>> {
        Arc::clone(&self.connections)
    }

    pub fn as_slice(&self) -> &[Connection] {
        &self.connections
    }

    pub fn get(&self, id: &ConnectionId) -> Option<&Connection> {
        self.connections.iter().find(|c| &c.id == id)
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// The port the current drag started from, if any
    pub fn pending(&self) -> Option<&PortRef> {
        self.pending.as_ref()
    }

    /// Remember the port a wire drag starts from, replacing any earlier start
    pub fn begin_connection(&mut self, port: PortRef) {
        debug!("Connection started at {} ({:?})", port, port.direction);
        self.pending = Some(port);
    }

    pub fn cancel_connection(&mut self) {
        self.pending = None;
    }

    /// Finish the pending wire at `port`
    ///
    /// The pending start is cleared whether or not a wire is created; illegal
    /// wires are dropped silently and only logged.
    pub fn complete_connection(&mut self, components: &[Component], port: PortRef) -> Option<Connection> {
        let start = self.pending.take()?;

        let (from, to) = match ConnectionValidator::validate_connection(components, &self.connections, &start, &port) {
            Ok(pair) => pair,
            Err(reason) => {
                debug!("Rejected connection {} -> {}: {}", start, port, reason);
                return None;
            }
        };

        let connection = Connection {
            id: ConnectionId::generate(),
            from: Endpoint::new(&from, anchor(components, &from)?),
            to: Endpoint::new(&to, anchor(components, &to)?),
        };

        debug!("Connected {} -> {} as {}", from, to, connection.id);
        Arc::make_mut(&mut self.connections).push(connection.clone());
        Some(connection)
    }

    /// Remove a single wire
    pub fn delete_connection(&mut self, id: &ConnectionId) -> Option<Connection> {
        let index = self.connections.iter().position(|c| &c.id == id)?;
        let removed = Arc::make_mut(&mut self.connections).remove(index);
        debug!("Deleted connection {}", id);
        Some(removed)
    }

    /// Remove every wire touching a component, returning how many were removed
    pub fn delete_connections_for(&mut self, component_id: &ComponentId) -> usize {
        if self
            .pending
            .as_ref()
            .is_some_and(|p| &p.component_id == component_id)
        {
            self.pending = None;
        }
        let before = self.connections.len();
        if !self.connections.iter().any(|c| c.touches(component_id)) {
            return 0;
        }
        Arc::make_mut(&mut self.connections).retain(|c| !c.touches(component_id));
        let removed = before - self.connections.len();
        debug!("Deleted {} connection(s) of component {}", removed, component_id);
        removed
    }

    /// Recompute endpoint anchors for wires touching a moved component
    pub fn refresh_after_move(&mut self, components: &[Component], component_id: &ComponentId) {
        let Some(component) = components.iter().find(|c| &c.id == component_id) else {
            return;
        };
        if !self.connections.iter().any(|c| c.touches(component_id)) {
            return;
        }

        for connection in Arc::make_mut(&mut self.connections).iter_mut() {
            if &connection.from.component_id == component_id {
                if let Some(p) = port_position_by_id(component, &connection.from.port_id, PortDirection::Output) {
                    connection.from.position = p;
                }
            }
            if &connection.to.component_id == component_id {
                if let Some(p) = port_position_by_id(component, &connection.to.port_id, PortDirection::Input) {
                    connection.to.position = p;
                }
            }
        }
    }

    /// Recompute every anchor and drop wires whose ports no longer exist
    ///
    /// A pending start on a vanished port is dropped too. Returns the number of wires dropped.
    pub fn refresh_after_structural_change(&mut self, components: &[Component]) -> usize {
        if self
            .pending
            .as_ref()
            .is_some_and(|p| anchor(components, p).is_none())
        {
            debug!("Dropped pending connection start on a removed port");
            self.pending = None;
        }
        let before = self.connections.len();
        let refreshed: Vec<Connection> = self
            .connections
            .iter()
            .filter_map(|c| {
                let from = anchor(components, &c.source_port())?;
                let to = anchor(components, &c.target_port())?;
                let mut updated = c.clone();
                updated.from.position = from;
                updated.to.position = to;
                Some(updated)
            })
            .collect();

        if refreshed != *self.connections {
            self.connections = Arc::new(refreshed);
        }
        let dropped = before - self.connections.len();
        if dropped > 0 {
            debug!("Dropped {} dangling connection(s)", dropped);
        }
        dropped
    }

    /// Whether any wire ends at, or starts from, the given port
    pub fn is_port_connected(&self, port: &PortRef) -> bool {
        self.connections.iter().any(|c| match port.direction {
            PortDirection::Output => c.from.matches(&port.component_id, &port.port_id),
            PortDirection::Input => c.to.matches(&port.component_id, &port.port_id),
        })
    }

    /// The wire driving an input port, if any
    pub fn incoming_for(&self, component_id: &ComponentId, port_id: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.to.matches(component_id, port_id))
    }

    /// Swap in a whole collection, e.g. from a history snapshot
    pub fn replace_all(&mut self, connections: Arc<Vec<Connection>>) {
        self.connections = connections;
        self.pending = None;
    }

    pub fn clear(&mut self) {
        self.connections = Arc::new(Vec::new());
        self.pending = None;
    }
}

fn anchor(components: &[Component], port: &PortRef) -> Option<Point> {
    let component = components.iter().find(|c| c.id == port.component_id)?;
    port_position_by_id(component, &port.port_id, port.direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::components::{ComponentKind, ComponentOptions, ComponentStore, GateType, InputType, OutputType};
    use approx::assert_relative_eq;

    struct Fixture {
        components: ComponentStore,
        wires: ConnectionStore,
        input: ComponentId,
        gate: ComponentId,
        led: ComponentId,
    }

    fn fixture() -> Fixture {
        let mut components = ComponentStore::default();
        let input = components
            .create(ComponentKind::Input(InputType::Variable), -100.0, 0.0, ComponentOptions::new())
            .id;
        let gate = components
            .create(ComponentKind::Gate(GateType::And), 0.0, 0.0, ComponentOptions::new())
            .id;
        let led = components
            .create(ComponentKind::Output(OutputType::Led), 100.0, 0.0, ComponentOptions::new())
            .id;
        Fixture {
            components,
            wires: ConnectionStore::new(),
            input,
            gate,
            led,
        }
    }

    impl Fixture {
        fn connect(&mut self, start: PortRef, end: PortRef) -> Option<Connection> {
            self.wires.begin_connection(start);
            self.wires.complete_connection(self.components.as_slice(), end)
        }
    }

    #[test]
    fn test_connection_records_anchors() {
        let mut f = fixture();
        let wire = f.connect(f.input.output("out"), f.gate.input("in0")).expect("legal");

        assert_eq!(wire.from.position, Point::new(-60.0, 20.0));
        assert_relative_eq!(wire.to.position.x, 0.0);
        assert_relative_eq!(wire.to.position.y, 50.0 / 3.0);
        assert!(f.wires.pending().is_none());
        assert_eq!(f.wires.len(), 1);
    }

    #[test]
    fn test_reverse_drag_is_normalized() {
        let mut f = fixture();
        let wire = f.connect(f.gate.input("in1"), f.input.output("out")).expect("legal");
        assert_eq!(wire.from.component_id, f.input);
        assert_eq!(wire.to.component_id, f.gate);
        assert_eq!(wire.to.port_id, "in1");
    }

    #[test]
    fn test_illegal_wires_clear_pending() {
        let mut f = fixture();
        assert!(f.connect(f.gate.input("in0"), f.led.input("in")).is_none());
        assert!(f.wires.pending().is_none());
        assert!(f.connect(f.gate.output("out"), f.input.output("out")).is_none());
        assert!(f.connect(f.gate.output("out"), f.led.input("missing")).is_none());
        assert!(f.wires.is_empty());
    }

    #[test]
    fn test_complete_without_pending_is_noop() {
        let mut f = fixture();
        assert!(f.wires.complete_connection(f.components.as_slice(), f.gate.input("in0")).is_none());
    }

    #[test]
    fn test_begin_replaces_pending() {
        let mut f = fixture();
        f.wires.begin_connection(f.gate.input("in0"));
        f.wires.begin_connection(f.gate.output("out"));
        assert_eq!(f.wires.pending(), Some(&f.gate.output("out")));
    }

    #[test]
    fn test_duplicates_and_second_driver_rejected() {
        let mut f = fixture();
        assert!(f.connect(f.input.output("out"), f.gate.input("in0")).is_some());
        assert!(f.connect(f.input.output("out"), f.gate.input("in0")).is_none());
        assert!(f.connect(f.gate.input("in0"), f.input.output("out")).is_none());

        // in0 already driven by the input pin
        let other = f
            .components
            .create(ComponentKind::Input(InputType::High), -100.0, 100.0, ComponentOptions::new())
            .id;
        assert!(f.connect(other.output("out"), f.gate.input("in0")).is_none());

        // an output may fan out
        assert!(f.connect(f.input.output("out"), f.gate.input("in1")).is_some());
        assert_eq!(f.wires.len(), 2);
    }

    #[test]
    fn test_delete_connections_for_component() {
        let mut f = fixture();
        f.connect(f.input.output("out"), f.gate.input("in0"));
        f.connect(f.gate.output("out"), f.led.input("in"));

        assert_eq!(f.wires.delete_connections_for(&f.gate), 2);
        assert!(f.wires.is_empty());
        assert_eq!(f.wires.delete_connections_for(&f.gate), 0);
    }

    #[test]
    fn test_delete_connections_for_unwired_component_clears_pending() {
        let mut f = fixture();
        f.wires.begin_connection(f.led.input("in"));
        assert_eq!(f.wires.delete_connections_for(&f.led), 0);
        assert!(f.wires.pending().is_none());

        f.wires.begin_connection(f.input.output("out"));
        assert_eq!(f.wires.delete_connections_for(&f.led), 0);
        assert_eq!(f.wires.pending(), Some(&f.input.output("out")));
    }

    #[test]
    fn test_delete_single_connection() {
        let mut f = fixture();
        let wire = f.connect(f.input.output("out"), f.gate.input("in0")).unwrap();
        assert!(f.wires.delete_connection(&ConnectionId::new("nope")).is_none());
        assert_eq!(f.wires.delete_connection(&wire.id), Some(wire));
        assert!(!f.wires.is_port_connected(&f.gate.input("in0")));
    }

    #[test]
    fn test_refresh_after_move() {
        let mut f = fixture();
        f.connect(f.gate.output("out"), f.led.input("in"));

        f.components.move_to(&f.led, 200.0, 50.0);
        f.wires.refresh_after_move(f.components.as_slice(), &f.led);

        let wire = &f.wires.as_slice()[0];
        assert_eq!(wire.to.position, Point::new(200.0, 70.0));
        assert_eq!(wire.from.position, Point::new(60.0, 25.0));
    }

    #[test]
    fn test_structural_change_prunes_removed_ports() {
        let mut f = fixture();
        assert!(f.components.add_input_port(&f.gate));
        f.connect(f.input.output("out"), f.gate.input("in2"));
        f.connect(f.gate.output("out"), f.led.input("in"));

        assert!(f.components.remove_input_port(&f.gate));
        assert_eq!(f.wires.refresh_after_structural_change(f.components.as_slice()), 1);
        assert_eq!(f.wires.len(), 1);
        assert!(f.wires.incoming_for(&f.led, "in").is_some());
    }

    #[test]
    fn test_snapshot_handle_unaffected_by_later_edits() {
        let mut f = fixture();
        f.connect(f.input.output("out"), f.gate.input("in0"));
        let before = f.wires.connections();
        f.wires.delete_connections_for(&f.input);
        assert_eq!(before.len(), 1);
        assert!(f.wires.is_empty());
    }
}
