use super::{Connector, Input, InputId, Node, NodeId, NodeKind, Output, OutputId};
use ahash::AHashMap;

/// Owns every node and connector of one graph.
///
/// Nodes and connectors live in slot tables indexed by their ids. Removing a
/// node empties its slots; ids are never reused, so stale ids simply fail to
/// resolve. Slot order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    name: String,
    pub(crate) nodes: Vec<Option<Node>>,
    pub(crate) inputs: Vec<Option<Input>>,
    pub(crate) outputs: Vec<Option<Output>>,
    name_counters: AHashMap<&'static str, usize>,
}

impl Graph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a node without connectors, naming it `<Label>_<n>`.
    pub fn add_node(&mut self, kind: NodeKind) -> NodeId {
        let counter = self.name_counters.entry(kind.label()).or_insert(0);
        *counter += 1;
        let name = format!("{}_{}", kind.label(), counter);

        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(Some(Node {
            id,
            name,
            kind,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }));
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())?.as_ref()
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())?.as_mut()
    }

    pub fn input(&self, id: InputId) -> Option<&Input> {
        self.inputs.get(id.index())?.as_ref()
    }

    pub(crate) fn input_mut(&mut self, id: InputId) -> Option<&mut Input> {
        self.inputs.get_mut(id.index())?.as_mut()
    }

    pub fn output(&self, id: OutputId) -> Option<&Output> {
        self.outputs.get(id.index())?.as_ref()
    }

    pub(crate) fn output_mut(&mut self, id: OutputId) -> Option<&mut Output> {
        self.outputs.get_mut(id.index())?.as_mut()
    }

    /// Live nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().flatten()
    }

    pub fn inputs(&self) -> impl Iterator<Item = &Input> {
        self.inputs.iter().flatten()
    }

    pub fn outputs(&self) -> impl Iterator<Item = &Output> {
        self.outputs.iter().flatten()
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Event nodes in graph order.
    pub fn events(&self) -> impl Iterator<Item = &Node> {
        self.nodes().filter(|n| n.kind().is_event())
    }

    pub fn find_node(&self, name: &str) -> Option<&Node> {
        self.nodes().find(|n| n.name() == name)
    }

    pub fn find_input(&self, node: NodeId, name: &str) -> Option<InputId> {
        self.input_named(node, name).map(Input::id)
    }

    pub fn find_output(&self, node: NodeId, name: &str) -> Option<OutputId> {
        self.output_named(node, name).map(Output::id)
    }

    pub fn input_named(&self, node: NodeId, name: &str) -> Option<&Input> {
        self.node(node)?
            .inputs()
            .iter()
            .filter_map(|id| self.input(*id))
            .find(|input| input.name() == name)
    }

    pub fn output_named(&self, node: NodeId, name: &str) -> Option<&Output> {
        self.node(node)?
            .outputs()
            .iter()
            .filter_map(|id| self.output(*id))
            .find(|output| output.name() == name)
    }

    /// The node wired to the first downstream input of a named output.
    pub fn successor(&self, node: NodeId, output: &str) -> Option<NodeId> {
        let output = self.output_named(node, output)?;
        let first = output.fan_out().first()?;
        self.input(*first).map(Input::node)
    }

    /// Every `(output, input)` edge, ordered by output then fan-out.
    pub fn connections(&self) -> impl Iterator<Item = (OutputId, InputId)> + '_ {
        self.outputs()
            .flat_map(|output| output.fan_out().iter().map(move |input| (output.id(), *input)))
    }

    pub fn connection_count(&self) -> usize {
        self.connections().count()
    }
}
