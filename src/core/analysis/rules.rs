use crate::core::analysis::cycle::has_cycle;
use crate::core::analysis::graph::CircuitGraph;
use crate::core::components::NodeType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Verdict of a rule check, surfaced to the user as-is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub feedback: String,
}

impl ValidationResult {
    pub fn valid(feedback: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            feedback: feedback.into(),
        }
    }

    pub fn invalid(feedback: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            feedback: feedback.into(),
        }
    }
}

/// Checks a circuit against the requirements of one target circuit type
pub trait RuleChecker {
    fn check(&self, graph: &CircuitGraph) -> ValidationResult;
}

impl<F> RuleChecker for F
where
    F: Fn(&CircuitGraph) -> ValidationResult,
{
    fn check(&self, graph: &CircuitGraph) -> ValidationResult {
        self(graph)
    }
}

/// Rule checkers keyed by target circuit type (`"counter"`, `"decoder"`, ...)
#[derive(Default)]
pub struct RuleBook {
    checkers: HashMap<String, Box<dyn RuleChecker>>,
}

impl RuleBook {
    /// Create an empty rule book
    pub fn new() -> Self {
        Self::default()
    }

    /// Rule book with the structural `counter` and `decoder` checks registered
    pub fn with_builtin_rules() -> Self {
        let mut book = Self::new();
        book.checkers.insert("counter".to_string(), Box::new(CounterRules));
        book.checkers.insert("decoder".to_string(), Box::new(DecoderRules));
        book
    }

    /// Register a checker for a target type
    pub fn register(&mut self, target_type: &str, checker: Box<dyn RuleChecker>) -> Result<(), String> {
        if self.checkers.contains_key(target_type) {
            return Err(format!("Rules for circuit type '{}' are already registered", target_type));
        }
        self.checkers.insert(target_type.to_string(), checker);
        Ok(())
    }

    pub fn has_rules(&self, target_type: &str) -> bool {
        self.checkers.contains_key(target_type)
    }

    /// Registered target types, sorted
    pub fn target_types(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.checkers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Run the checker for `target_type` against a graph
    pub fn validate(&self, graph: &CircuitGraph, target_type: &str) -> ValidationResult {
        match self.checkers.get(target_type) {
            Some(checker) => checker.check(graph),
            None => ValidationResult::invalid(format!("No rules registered for circuit type '{}'", target_type)),
        }
    }
}

fn count_nodes(graph: &CircuitGraph, node_type: NodeType, subtype: Option<&str>) -> usize {
    graph
        .nodes
        .iter()
        .filter(|n| n.node_type == node_type && subtype.map_or(true, |s| n.subtype == s))
        .count()
}

/// Sequential counter: clocked flip-flops driving visible outputs
pub struct CounterRules;

impl RuleChecker for CounterRules {
    fn check(&self, graph: &CircuitGraph) -> ValidationResult {
        if count_nodes(graph, NodeType::Input, Some("CLOCK")) == 0 {
            return ValidationResult::invalid("A counter needs a CLOCK input");
        }
        if count_nodes(graph, NodeType::Flipflop, None) == 0 {
            return ValidationResult::invalid("A counter needs at least one flip-flop");
        }
        if count_nodes(graph, NodeType::Output, None) == 0 {
            return ValidationResult::invalid("A counter needs at least one output");
        }

        let unclocked = graph
            .nodes
            .iter()
            .filter(|n| n.node_type == NodeType::Flipflop)
            .find(|n| !graph.incoming(&n.id).any(|e| e.target_handle == "CLK"));
        if let Some(ff) = unclocked {
            return ValidationResult::invalid(format!("Flip-flop '{}' has no clock connected", ff.label));
        }

        ValidationResult::valid("Circuit satisfies the counter requirements")
    }
}

/// Combinational decoder: variable inputs decoded through gates to several outputs
pub struct DecoderRules;

impl RuleChecker for DecoderRules {
    fn check(&self, graph: &CircuitGraph) -> ValidationResult {
        if count_nodes(graph, NodeType::Input, Some("VARIABLE")) == 0 {
            return ValidationResult::invalid("A decoder needs at least one VARIABLE input");
        }
        if count_nodes(graph, NodeType::Output, None) < 2 {
            return ValidationResult::invalid("A decoder needs at least two outputs");
        }
        if count_nodes(graph, NodeType::Gate, None) == 0 {
            return ValidationResult::invalid("A decoder needs at least one logic gate");
        }
        if count_nodes(graph, NodeType::Flipflop, None) > 0 {
            return ValidationResult::invalid("A decoder is combinational and must not contain flip-flops");
        }

        let undriven = graph
            .nodes
            .iter()
            .filter(|n| n.node_type == NodeType::Output)
            .find(|n| graph.incoming(&n.id).next().is_none());
        if let Some(output) = undriven {
            return ValidationResult::invalid(format!("Output '{}' is not connected", output.label));
        }
        if has_cycle(graph) {
            return ValidationResult::invalid("A decoder must not contain feedback loops");
        }

        ValidationResult::valid("Circuit satisfies the decoder requirements")
    }
}
