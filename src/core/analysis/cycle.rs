use crate::core::analysis::graph::CircuitGraph;
use crate::core::types::ComponentId;
use std::collections::{HashMap, HashSet};

/// Adjacency list keyed by source node, one entry per node even when it has no edges
fn adjacency(graph: &CircuitGraph) -> HashMap<&ComponentId, Vec<&ComponentId>> {
    let mut adj_list: HashMap<&ComponentId, Vec<&ComponentId>> = HashMap::new();
    for node in &graph.nodes {
        adj_list.entry(&node.id).or_default();
    }
    for edge in &graph.edges {
        adj_list.entry(&edge.source).or_default().push(&edge.target);
    }
    adj_list
}

/// Depth-first cycle detection over a circuit graph
///
/// Iterative DFS with an explicit stack of `(node, next neighbor index)`
/// frames; a neighbor already on the stack closes a cycle. Every node not
/// reached from an earlier root becomes a root itself.
pub fn has_cycle(graph: &CircuitGraph) -> bool {
    let adj_list = adjacency(graph);
    let mut visited: HashSet<&ComponentId> = HashSet::new();
    let mut on_stack: HashSet<&ComponentId> = HashSet::new();

    for root in graph.nodes.iter().map(|n| &n.id) {
        if !visited.insert(root) {
            continue;
        }
        on_stack.insert(root);
        let mut stack: Vec<(&ComponentId, usize)> = vec![(root, 0)];

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            let neighbors = adj_list.get(node).map(Vec::as_slice).unwrap_or(&[]);

            match neighbors.get(frame.1) {
                Some(&next) => {
                    frame.1 += 1;
                    if on_stack.contains(next) {
                        return true;
                    }
                    if visited.insert(next) {
                        on_stack.insert(next);
                        stack.push((next, 0));
                    }
                }
                None => {
                    on_stack.remove(node);
                    stack.pop();
                }
            }
        }
    }

    false
}

/// Group nodes into propagation stages using Kahn's algorithm
///
/// Stage 0 holds nodes with no incoming wires; each later stage holds the
/// nodes whose drivers all sit in earlier stages. Stages are sorted by ID for
/// deterministic results. Fails if the graph has a cycle.
pub fn propagation_stages(graph: &CircuitGraph) -> Result<Vec<Vec<ComponentId>>, String> {
    let adj_list = adjacency(graph);
    let mut in_degree: HashMap<&ComponentId, usize> = graph.nodes.iter().map(|n| (&n.id, 0)).collect();

    for edge in &graph.edges {
        if !in_degree.contains_key(&edge.source) {
            continue;
        }
        if let Some(degree) = in_degree.get_mut(&edge.target) {
            *degree += 1;
        }
    }

    let mut stages = Vec::new();
    while !in_degree.is_empty() {
        // Find all nodes with zero in-degree (current stage)
        let mut current_stage: Vec<&ComponentId> = in_degree
            .iter()
            .filter(|(_, &degree)| degree == 0)
            .map(|(id, _)| *id)
            .collect();

        if current_stage.is_empty() {
            return Err("Cycle detected in circuit graph".to_string());
        }
        current_stage.sort();

        for id in &current_stage {
            in_degree.remove(id);
            if let Some(neighbors) = adj_list.get(id) {
                for neighbor in neighbors {
                    if let Some(degree) = in_degree.get_mut(neighbor) {
                        *degree -= 1;
                    }
                }
            }
        }

        stages.push(current_stage.into_iter().cloned().collect());
    }

    Ok(stages)
}
