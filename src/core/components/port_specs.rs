use crate::core::components::types::{ComponentKind, FlipFlopType};
use serde::{Deserialize, Serialize};

/// One named port on a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortSpec {
    /// Port identifier, unique within its direction on the component
    pub id: String,
    /// Label drawn next to the port
    pub label: String,
}

impl PortSpec {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }

    /// Input `index` of a multi-input gate: `in0` labelled `A`, `in1` labelled `B`, ...
    pub fn gate_input(index: usize) -> Self {
        let label = match u8::try_from(index) {
            Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
            _ => format!("I{}", index),
        };
        Self {
            id: format!("in{}", index),
            label,
        }
    }
}

/// Default input and output ports for one component kind
#[derive(Debug, Clone, PartialEq)]
pub struct PortLayout {
    pub inputs: Vec<PortSpec>,
    pub outputs: Vec<PortSpec>,
}

/// Number of inputs a multi-input gate starts with
pub const DEFAULT_GATE_INPUTS: usize = 2;

/// Port table for every component kind
///
/// `gate_inputs` only applies to multi-input gates and is raised to the
/// two-input minimum.
pub fn port_layout(kind: ComponentKind, gate_inputs: Option<usize>) -> PortLayout {
    match kind {
        ComponentKind::Gate(_) if !kind.is_multi_input_gate() => PortLayout {
            inputs: vec![PortSpec::gate_input(0)],
            outputs: vec![PortSpec::new("out", "Y")],
        },
        ComponentKind::Gate(_) => {
            let count = gate_inputs.unwrap_or(DEFAULT_GATE_INPUTS).max(DEFAULT_GATE_INPUTS);
            PortLayout {
                inputs: (0..count).map(PortSpec::gate_input).collect(),
                outputs: vec![PortSpec::new("out", "Y")],
            }
        }
        ComponentKind::FlipFlop(ff) => PortLayout {
            inputs: flipflop_inputs(ff),
            outputs: vec![PortSpec::new("Q", "Q"), PortSpec::new("Q_bar", "Q̅")],
        },
        ComponentKind::Input(_) => PortLayout {
            inputs: Vec::new(),
            outputs: vec![PortSpec::new("out", "OUT")],
        },
        ComponentKind::Output(_) => PortLayout {
            inputs: vec![PortSpec::new("in", "IN")],
            outputs: Vec::new(),
        },
    }
}

fn flipflop_inputs(ff: FlipFlopType) -> Vec<PortSpec> {
    let clk = PortSpec::new("CLK", "CLK");
    match ff {
        FlipFlopType::D => vec![PortSpec::new("D", "D"), clk],
        FlipFlopType::T => vec![PortSpec::new("T", "T"), clk],
        FlipFlopType::Jk => vec![PortSpec::new("J", "J"), clk, PortSpec::new("K", "K")],
        FlipFlopType::Sr => vec![PortSpec::new("S", "S"), clk, PortSpec::new("R", "R")],
    }
}
