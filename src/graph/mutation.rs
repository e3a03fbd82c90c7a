use super::{Connector, ConnectorId, Direction, Graph, Input, InputId, Node, NodeId, Output, OutputId};
use crate::error::GraphError;
use crate::reflect::ClassName;
use crate::types::{ConnectorType, Literal};

/// Decides whether an output of a given type may feed several inputs at once.
pub trait FanOutPolicy {
    fn allows_fan_out(&self, ty: ConnectorType) -> bool;
}

impl<F> FanOutPolicy for F
where
    F: Fn(ConnectorType) -> bool,
{
    fn allows_fan_out(&self, ty: ConnectorType) -> bool {
        self(ty)
    }
}

/// Every output may fan out.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowFanOut;

impl FanOutPolicy for AllowFanOut {
    fn allows_fan_out(&self, _ty: ConnectorType) -> bool {
        true
    }
}

/// Execution outputs drive a single successor; data outputs may fan out.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleExecution;

impl FanOutPolicy for SingleExecution {
    fn allows_fan_out(&self, ty: ConnectorType) -> bool {
        !ty.is_execution()
    }
}

impl Graph {
    /// Connects `from` to `to`, replacing any upstream link `to` already had.
    pub fn connect(&mut self, from: OutputId, to: InputId) -> Result<(), GraphError> {
        self.connect_with(from, to, &AllowFanOut)
    }

    /// Like [`Graph::connect`], but first clears the existing fan-out of
    /// `from` when the policy forbids fan-out for its type.
    pub fn connect_with<P: FanOutPolicy + ?Sized>(
        &mut self,
        from: OutputId,
        to: InputId,
        policy: &P,
    ) -> Result<(), GraphError> {
        let from_ty = self
            .output(from)
            .ok_or(GraphError::OutputNotFound(from))?
            .connector_type();
        let to_ty = self
            .input(to)
            .ok_or(GraphError::InputNotFound(to))?
            .connector_type();

        if from_ty != to_ty {
            return Err(GraphError::TypeMismatch {
                from: from_ty,
                to: to_ty,
            });
        }

        if !policy.allows_fan_out(from_ty) {
            self.break_all_connections_from(from)?;
        }
        self.break_input(to)?;

        if let Some(output) = self.output_mut(from) {
            output.to.push(to);
        }
        if let Some(input) = self.input_mut(to) {
            input.from = Some(from);
        }
        Ok(())
    }

    /// Detaches an input from its upstream output. No-op when unconnected.
    pub fn break_input(&mut self, input: InputId) -> Result<(), GraphError> {
        let upstream = self
            .input_mut(input)
            .ok_or(GraphError::InputNotFound(input))?
            .from
            .take();

        if let Some(output) = upstream.and_then(|id| self.output_mut(id)) {
            output.to.retain(|id| *id != input);
        }
        Ok(())
    }

    /// Removes the edge `output -> input` if it exists.
    pub fn break_connection(&mut self, output: OutputId, input: InputId) -> Result<(), GraphError> {
        self.output(output).ok_or(GraphError::OutputNotFound(output))?;
        let linked = self
            .input(input)
            .ok_or(GraphError::InputNotFound(input))?
            .upstream()
            == Some(output);

        if linked {
            self.break_input(input)?;
        }
        Ok(())
    }

    pub fn break_all_connections_from(&mut self, output: OutputId) -> Result<(), GraphError> {
        let downstream = std::mem::take(
            &mut self
                .output_mut(output)
                .ok_or(GraphError::OutputNotFound(output))?
                .to,
        );
        for id in downstream {
            if let Some(input) = self.input_mut(id) {
                input.from = None;
            }
        }
        Ok(())
    }

    /// Breaks every input, then every output, of a node.
    pub fn break_node_connections(&mut self, node: NodeId) -> Result<(), GraphError> {
        let (inputs, outputs) = {
            let node = self.node(node).ok_or(GraphError::NodeNotFound(node))?;
            (node.inputs.clone(), node.outputs.clone())
        };
        for input in inputs {
            self.break_input(input)?;
        }
        for output in outputs {
            self.break_all_connections_from(output)?;
        }
        Ok(())
    }

    /// Disconnects a node and removes it together with its connectors.
    pub fn remove_node(&mut self, node: NodeId) -> Result<Node, GraphError> {
        self.break_node_connections(node)?;
        let removed = self.nodes[node.index()]
            .take()
            .ok_or(GraphError::NodeNotFound(node))?;

        for input in &removed.inputs {
            self.inputs[input.index()] = None;
        }
        for output in &removed.outputs {
            self.outputs[output.index()] = None;
        }
        Ok(removed)
    }

    /// Appends a new connector to a node.
    ///
    /// Object outputs created without a class are typed as the root class.
    pub fn create_connector(
        &mut self,
        node: NodeId,
        direction: Direction,
        ty: ConnectorType,
        name: &str,
        class: Option<ClassName>,
    ) -> Result<ConnectorId, GraphError> {
        let owner = self.node(node).ok_or(GraphError::NodeNotFound(node))?;
        if !ty.is_supported() {
            return Err(GraphError::UnsupportedType {
                name: name.to_string(),
            });
        }

        let taken = match direction {
            Direction::Input => self.input_named(node, name).is_some(),
            Direction::Output => self.output_named(node, name).is_some(),
        };
        if taken {
            return Err(GraphError::DuplicateConnector {
                node: owner.name().to_string(),
                direction,
                name: name.to_string(),
            });
        }

        let class = match (direction, ty, class) {
            (Direction::Output, ConnectorType::Object, None) => Some(ClassName::root()),
            (_, _, class) => class,
        };
        Ok(self.push_connector(node, direction, ty, name, class))
    }

    /// Parses `text` as the input's literal default.
    pub fn set_input_default(&mut self, input: InputId, text: &str) -> Result<(), GraphError> {
        let ty = self
            .input(input)
            .ok_or(GraphError::InputNotFound(input))?
            .connector_type();
        let literal = Literal::parse(ty, text)?;
        if let Some(input) = self.input_mut(input) {
            input.default = literal;
        }
        Ok(())
    }

    /// Appends a connector whose node, type and name were already validated.
    fn push_connector(
        &mut self,
        node: NodeId,
        direction: Direction,
        ty: ConnectorType,
        name: &str,
        class: Option<ClassName>,
    ) -> ConnectorId {
        let id = match direction {
            Direction::Input => {
                let id = InputId::from_index(self.inputs.len());
                self.inputs.push(Some(Input {
                    id,
                    node,
                    name: name.to_string(),
                    ty,
                    class,
                    from: None,
                    default: Literal::default_for(ty).unwrap_or(Literal::Execution),
                }));
                ConnectorId::Input(id)
            }
            Direction::Output => {
                let id = OutputId::from_index(self.outputs.len());
                self.outputs.push(Some(Output {
                    id,
                    node,
                    name: name.to_string(),
                    ty,
                    class,
                    to: Vec::new(),
                }));
                ConnectorId::Output(id)
            }
        };

        if let Some(owner) = self.node_mut(node) {
            match id {
                ConnectorId::Input(input) => owner.inputs.push(input),
                ConnectorId::Output(output) => owner.outputs.push(output),
            }
        }
        id
    }
}
