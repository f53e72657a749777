use crate::core::analysis::cycle::{has_cycle, propagation_stages};
use crate::core::analysis::graph::CircuitGraph;
use crate::core::analysis::rules::{RuleBook, ValidationResult};
use crate::core::components::Component;
use crate::core::connections::Connection;
use log::info;
use serde::{Deserialize, Serialize};

/// Combined result of analyzing a circuit against a target type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Warning only; editing is never blocked by a cycle
    pub has_cycle: bool,
    /// Number of propagation stages, absent for cyclic circuits
    pub stage_count: Option<usize>,
    pub validation: ValidationResult,
}

/// Stateless entry points for graph building, cycle detection and validation
pub struct CircuitAnalyzer;

impl CircuitAnalyzer {
    /// Project the live circuit into its DAG view
    pub fn to_graph(components: &[Component], connections: &[Connection]) -> CircuitGraph {
        CircuitGraph::build(components, connections)
    }

    pub fn has_cycle(graph: &CircuitGraph) -> bool {
        has_cycle(graph)
    }

    /// Check the circuit against the rules registered for `target_type`
    pub fn validate(
        components: &[Component],
        connections: &[Connection],
        target_type: &str,
        rules: &RuleBook,
    ) -> ValidationResult {
        let graph = Self::to_graph(components, connections);
        rules.validate(&graph, target_type)
    }

    /// Build the graph once and run every check on it
    pub fn analyze(
        components: &[Component],
        connections: &[Connection],
        target_type: &str,
        rules: &RuleBook,
    ) -> AnalysisReport {
        let graph = Self::to_graph(components, connections);
        let cyclic = has_cycle(&graph);
        if cyclic {
            info!("Circuit contains a feedback loop");
        }

        AnalysisReport {
            has_cycle: cyclic,
            stage_count: propagation_stages(&graph).ok().map(|stages| stages.len()),
            validation: rules.validate(&graph, target_type),
        }
    }
}
