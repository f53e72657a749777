pub mod analyzer;
pub mod cycle;
pub mod graph;
pub mod rules;

// Re-export commonly used types
pub use analyzer::{AnalysisReport, CircuitAnalyzer};
pub use cycle::{has_cycle, propagation_stages};
pub use graph::{CircuitGraph, GraphEdge, GraphNode, NodeData};
pub use rules::{CounterRules, DecoderRules, RuleBook, RuleChecker, ValidationResult};
