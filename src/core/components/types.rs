use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Logic gate variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GateType {
    And,
    Or,
    Not,
    Nand,
    Nor,
    Xor,
    Xnor,
}

impl GateType {
    pub const ALL: [GateType; 7] = [
        GateType::And,
        GateType::Or,
        GateType::Not,
        GateType::Nand,
        GateType::Nor,
        GateType::Xor,
        GateType::Xnor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GateType::And => "AND",
            GateType::Or => "OR",
            GateType::Not => "NOT",
            GateType::Nand => "NAND",
            GateType::Nor => "NOR",
            GateType::Xor => "XOR",
            GateType::Xnor => "XNOR",
        }
    }
}

impl FromStr for GateType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GateType::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| format!("Unknown gate subtype '{}'", s))
    }
}

/// Flip-flop variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FlipFlopType {
    D,
    Jk,
    Sr,
    T,
}

impl FlipFlopType {
    pub const ALL: [FlipFlopType; 4] = [FlipFlopType::D, FlipFlopType::Jk, FlipFlopType::Sr, FlipFlopType::T];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlipFlopType::D => "D",
            FlipFlopType::Jk => "JK",
            FlipFlopType::Sr => "SR",
            FlipFlopType::T => "T",
        }
    }
}

impl FromStr for FlipFlopType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlipFlopType::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("Unknown flip-flop subtype '{}'", s))
    }
}

/// Signal sources placed on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InputType {
    High,
    Low,
    Clock,
    Variable,
}

impl InputType {
    pub const ALL: [InputType; 4] = [InputType::High, InputType::Low, InputType::Clock, InputType::Variable];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::High => "HIGH",
            InputType::Low => "LOW",
            InputType::Clock => "CLOCK",
            InputType::Variable => "VARIABLE",
        }
    }
}

impl FromStr for InputType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputType::ALL
            .iter()
            .copied()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| format!("Unknown input subtype '{}'", s))
    }
}

/// Signal sinks placed on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OutputType {
    /// Lamp whose state the user may toggle
    Led,
    /// Generic named output
    Variable,
}

impl OutputType {
    pub const ALL: [OutputType; 2] = [OutputType::Led, OutputType::Variable];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputType::Led => "LED",
            OutputType::Variable => "VARIABLE",
        }
    }
}

impl FromStr for OutputType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputType::ALL
            .iter()
            .copied()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| format!("Unknown output subtype '{}'", s))
    }
}

/// Coarse component category, serialized as the `type` field of exported nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Gate,
    Flipflop,
    Input,
    Output,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Gate => "gate",
            NodeType::Flipflop => "flipflop",
            NodeType::Input => "input",
            NodeType::Output => "output",
        }
    }
}

/// Every placeable kind/subtype pair
///
/// Adding a variant here forces the port layout table, the geometry table and
/// the display label to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Gate(GateType),
    FlipFlop(FlipFlopType),
    Input(InputType),
    Output(OutputType),
}

impl ComponentKind {
    /// Parse the `type`/`subtype` pair used by exported graphs
    pub fn from_parts(node_type: NodeType, subtype: &str) -> Result<Self, String> {
        Ok(match node_type {
            NodeType::Gate => ComponentKind::Gate(subtype.parse()?),
            NodeType::Flipflop => ComponentKind::FlipFlop(subtype.parse()?),
            NodeType::Input => ComponentKind::Input(subtype.parse()?),
            NodeType::Output => ComponentKind::Output(subtype.parse()?),
        })
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            ComponentKind::Gate(_) => NodeType::Gate,
            ComponentKind::FlipFlop(_) => NodeType::Flipflop,
            ComponentKind::Input(_) => NodeType::Input,
            ComponentKind::Output(_) => NodeType::Output,
        }
    }

    pub fn subtype_name(&self) -> &'static str {
        match self {
            ComponentKind::Gate(g) => g.as_str(),
            ComponentKind::FlipFlop(f) => f.as_str(),
            ComponentKind::Input(i) => i.as_str(),
            ComponentKind::Output(o) => o.as_str(),
        }
    }

    /// Gates other than NOT accept a variable number of inputs
    pub fn is_multi_input_gate(&self) -> bool {
        matches!(self, ComponentKind::Gate(g) if *g != GateType::Not)
    }

    /// Whether `toggle_state` has any effect on this kind
    pub fn supports_toggle(&self) -> bool {
        matches!(self, ComponentKind::Input(_) | ComponentKind::Output(OutputType::Led))
    }

    /// Whether the user-facing label is meaningful for this kind
    pub fn supports_rename(&self) -> bool {
        matches!(
            self,
            ComponentKind::Input(InputType::Variable) | ComponentKind::Output(OutputType::Variable)
        )
    }

    /// Initial `state` for a freshly placed component
    pub fn default_state(&self) -> Option<bool> {
        match self {
            ComponentKind::Input(InputType::High) | ComponentKind::Input(InputType::Clock) => Some(true),
            ComponentKind::Input(_) | ComponentKind::Output(OutputType::Led) => Some(false),
            _ => None,
        }
    }

    /// Human-readable name shown for this component in exported graphs
    pub fn display_label(&self, label: Option<&str>) -> String {
        match self {
            ComponentKind::Gate(g) => g.as_str().to_string(),
            ComponentKind::FlipFlop(f) => format!("{} Flip-Flop", f.as_str()),
            ComponentKind::Input(InputType::Variable) | ComponentKind::Output(OutputType::Variable) => {
                match label {
                    Some(name) if !name.is_empty() => name.to_string(),
                    _ => self.subtype_name().to_string(),
                }
            }
            ComponentKind::Input(i) => i.as_str().to_string(),
            ComponentKind::Output(o) => o.as_str().to_string(),
        }
    }

    /// Prefix used when generating IDs for this kind
    pub fn id_prefix(&self) -> &'static str {
        self.node_type().as_str()
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.node_type().as_str(), self.subtype_name())
    }
}
