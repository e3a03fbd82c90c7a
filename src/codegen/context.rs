use crate::graph::{Graph, NodeId, OutputId};
use ahash::{AHashMap, AHashSet};

/// Hands out unique variable names: `base_1`, `base_2`, ...
#[derive(Debug, Clone, Default)]
pub struct NameAllocator {
    counts: AHashMap<String, usize>,
}

impl NameAllocator {
    pub fn allocate(&mut self, base: &str) -> String {
        let count = self.counts.entry(base.to_string()).or_insert(0);
        *count += 1;
        format!("{}_{}", base, count)
    }
}

/// Mutable state of one event compilation.
#[derive(Debug)]
pub struct CodeGenContext<'g> {
    graph: &'g Graph,
    names: NameAllocator,
    output_vars: AHashMap<OutputId, String>,
    bound_order: Vec<OutputId>,
    visited: AHashSet<NodeId>,
}

impl<'g> CodeGenContext<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            names: NameAllocator::default(),
            output_vars: AHashMap::new(),
            bound_order: Vec::new(),
            visited: AHashSet::new(),
        }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn allocate(&mut self, base: &str) -> String {
        self.names.allocate(base)
    }

    /// Records the variable holding an output's value.
    pub fn bind(&mut self, output: OutputId, name: String) {
        if self.output_vars.insert(output, name).is_none() {
            self.bound_order.push(output);
        }
    }

    pub fn variable_for(&self, output: OutputId) -> Option<&str> {
        self.output_vars.get(&output).map(String::as_str)
    }

    /// Bound outputs and their variables, in first-bound order.
    pub fn bindings(&self) -> impl Iterator<Item = (OutputId, &str)> {
        self.bound_order
            .iter()
            .filter_map(|id| self.variable_for(*id).map(|name| (*id, name)))
    }

    pub fn is_visited(&self, node: NodeId) -> bool {
        self.visited.contains(&node)
    }

    pub fn mark_visited(&mut self, node: NodeId) {
        self.visited.insert(node);
    }
}
