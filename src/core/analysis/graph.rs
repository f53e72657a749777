//! Serializable DAG projection of a circuit and its re-import.

use crate::core::components::{port_layout, Component, ComponentKind, NodeType};
use crate::core::config::EditorConfig;
use crate::core::connections::{Connection, ConnectionValidator, Endpoint, PortValidator};
use crate::core::geometry::port_position_by_id;
use crate::core::types::{ComponentId, ConnectionId, Point, PortDirection, PortRef, Size};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Node/edge view of a circuit, also the export file format
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CircuitGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// One component in the exported graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: ComponentId,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub subtype: String,
    /// Human-readable name (`AND`, `JK Flip-Flop`, variable name, ...)
    pub label: String,
    pub data: NodeData,
}

/// Per-node payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub position: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_count: Option<usize>,
}

/// One wire in the exported graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub id: ConnectionId,
    pub source: ComponentId,
    pub target: ComponentId,
    pub source_handle: String,
    pub target_handle: String,
}

impl CircuitGraph {
    /// Project live components and connections into a graph
    pub fn build(components: &[Component], connections: &[Connection]) -> Self {
        let nodes = components
            .iter()
            .map(|c| GraphNode {
                id: c.id.clone(),
                node_type: c.kind.node_type(),
                subtype: c.kind.subtype_name().to_string(),
                label: c.display_label(),
                data: NodeData {
                    state: c.state,
                    name: c.label.clone(),
                    position: c.position,
                    size: Some(c.size),
                    input_count: Some(c.input_ports.len()),
                },
            })
            .collect();

        let edges = connections
            .iter()
            .map(|w| GraphEdge {
                id: w.id.clone(),
                source: w.from.component_id.clone(),
                target: w.to.component_id.clone(),
                source_handle: w.from.port_id.clone(),
                target_handle: w.to.port_id.clone(),
            })
            .collect();

        Self { nodes, edges }
    }

    pub fn node(&self, id: &ComponentId) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    /// Edges ending at the given node
    pub fn incoming<'a>(&'a self, id: &'a ComponentId) -> impl Iterator<Item = &'a GraphEdge> + 'a {
        self.edges.iter().filter(move |e| &e.target == id)
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize circuit graph: {}", e))
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse circuit graph: {}", e))
    }

    /// Rebuild components and connections from an exported graph
    ///
    /// Node and edge IDs are kept; endpoint anchors are recomputed. Edges
    /// that would break a wiring rule make the whole import fail.
    pub fn to_circuit(&self, config: &EditorConfig) -> Result<(Vec<Component>, Vec<Connection>), String> {
        let mut seen = HashSet::new();
        let mut components = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !seen.insert(&node.id) {
                return Err(format!("Duplicate node id '{}'", node.id));
            }
            components.push(component_from_node(node, config)?);
        }

        let mut edge_ids = HashSet::new();
        let mut connections: Vec<Connection> = Vec::with_capacity(self.edges.len());
        for edge in &self.edges {
            if !edge_ids.insert(&edge.id) {
                return Err(format!("Duplicate edge id '{}'", edge.id));
            }
            let from = PortRef::new(edge.source.clone(), &edge.source_handle, PortDirection::Output);
            let to = PortRef::new(edge.target.clone(), &edge.target_handle, PortDirection::Input);

            let source = PortValidator::validate_port(&components, &from)
                .map_err(|e| format!("Edge '{}': {}", edge.id, e))?;
            let target = PortValidator::validate_port(&components, &to)
                .map_err(|e| format!("Edge '{}': {}", edge.id, e))?;
            ConnectionValidator::check_duplicate(&connections, &from, &to)
                .and_then(|_| ConnectionValidator::check_input_port_collision(&connections, &to))
                .map_err(|e| format!("Edge '{}': {}", edge.id, e))?;

            let from_pos = port_position_by_id(source, &from.port_id, PortDirection::Output)
                .ok_or_else(|| format!("Edge '{}': no anchor for {}", edge.id, from))?;
            let to_pos = port_position_by_id(target, &to.port_id, PortDirection::Input)
                .ok_or_else(|| format!("Edge '{}': no anchor for {}", edge.id, to))?;

            connections.push(Connection {
                id: edge.id.clone(),
                from: Endpoint::new(&from, from_pos),
                to: Endpoint::new(&to, to_pos),
            });
        }

        Ok((components, connections))
    }
}

fn component_from_node(node: &GraphNode, config: &EditorConfig) -> Result<Component, String> {
    let kind = ComponentKind::from_parts(node.node_type, &node.subtype)
        .map_err(|e| format!("Node '{}': {}", node.id, e))?;

    let gate_inputs = node.data.input_count.map(|n| n.min(config.max_gate_inputs));
    let layout = port_layout(kind, gate_inputs);
    let default_size = match kind {
        ComponentKind::Gate(_) => config.gate_size,
        ComponentKind::FlipFlop(_) => config.flipflop_size,
        ComponentKind::Input(_) | ComponentKind::Output(_) => config.io_size,
    };

    Ok(Component {
        id: node.id.clone(),
        kind,
        position: node.data.position,
        size: node.data.size.unwrap_or(default_size).clamped(config.min_component_size),
        input_ports: layout.inputs,
        output_ports: layout.outputs,
        state: kind.default_state().map(|d| node.data.state.unwrap_or(d)),
        label: node.data.name.clone(),
    })
}
