use super::{
    pins, CallNode, ComponentTemplate, Direction, EventNode, Graph, MemberVariableNode, NodeId,
    NodeKind,
};
use crate::error::GraphError;
use crate::reflect::{ClassName, FunctionDescriptor, PropertyDescriptor};
use crate::types::{classify, ConnectorType};
use tracing::debug;

impl Graph {
    /// Adds an event node. Every non-return parameter becomes an output.
    pub fn add_event(&mut self, function: FunctionDescriptor) -> Result<NodeId, GraphError> {
        let kind = NodeKind::Event(EventNode {
            name: function.name.clone(),
            function: Some(function.clone()),
        });
        self.build_node(kind, |graph, id| {
            graph.create_connector(id, Direction::Output, ConnectorType::Execution, pins::DONE, None)?;
            for param in function.arguments() {
                let (ty, class) = classify(&param.ty);
                if !ty.is_supported() {
                    debug!(param = %param.name, event = %function.name, "skipping unsupported parameter");
                    continue;
                }
                graph.create_connector(id, Direction::Output, ty, &param.name, class)?;
            }
            Ok(())
        })
    }

    /// Adds a call node for `function`.
    ///
    /// Pure functions become pure call nodes with no execution connectors.
    /// `return_class` retypes an object return value.
    pub fn add_function_call(
        &mut self,
        function: FunctionDescriptor,
        return_class: Option<ClassName>,
    ) -> Result<NodeId, GraphError> {
        self.add_call(function, None, return_class)
    }

    /// Adds a call that spawns a component from `template`.
    ///
    /// The return value is typed as the template's class.
    pub fn add_new_component(
        &mut self,
        function: FunctionDescriptor,
        template: ComponentTemplate,
    ) -> Result<NodeId, GraphError> {
        let return_class = Some(template.class.clone());
        self.add_call(function, Some(template), return_class)
    }

    pub fn add_if_else(&mut self) -> Result<NodeId, GraphError> {
        self.build_node(NodeKind::IfElse, |graph, id| {
            graph.create_connector(id, Direction::Input, ConnectorType::Execution, pins::RUN, None)?;
            graph.create_connector(id, Direction::Input, ConnectorType::Bool, pins::BOOL, None)?;
            graph.create_connector(id, Direction::Output, ConnectorType::Execution, pins::TRUE, None)?;
            graph.create_connector(id, Direction::Output, ConnectorType::Execution, pins::FALSE, None)?;
            Ok(())
        })
    }

    pub fn add_for_loop(&mut self) -> Result<NodeId, GraphError> {
        self.build_node(NodeKind::ForLoop, |graph, id| {
            graph.create_connector(id, Direction::Input, ConnectorType::Execution, pins::RUN, None)?;
            graph.create_connector(id, Direction::Input, ConnectorType::Int, pins::COUNT, None)?;
            graph.create_connector(id, Direction::Output, ConnectorType::Execution, pins::LOOP, None)?;
            graph.create_connector(id, Direction::Output, ConnectorType::Int, pins::LOOP_COUNT, None)?;
            graph.create_connector(id, Direction::Output, ConnectorType::Execution, pins::THEN, None)?;
            Ok(())
        })
    }

    /// Adds a member variable node with a `Set` input (unless read-only) and a `Get` output.
    pub fn add_member_variable(
        &mut self,
        property: &PropertyDescriptor,
    ) -> Result<NodeId, GraphError> {
        let (ty, class) = classify(&property.ty);
        if !ty.is_supported() {
            return Err(GraphError::UnsupportedType {
                name: property.name.clone(),
            });
        }

        let kind = NodeKind::MemberVariable(MemberVariableNode {
            name: property.name.clone(),
            var_type: ty,
            class: class.clone(),
            read_only: property.read_only,
        });
        self.build_node(kind, |graph, id| {
            if !property.read_only {
                graph.create_connector(id, Direction::Input, ty, pins::SET, class.clone())?;
            }
            graph.create_connector(id, Direction::Output, ty, pins::GET, class.clone())?;
            Ok(())
        })
    }

    fn add_call(
        &mut self,
        function: FunctionDescriptor,
        template: Option<ComponentTemplate>,
        return_class: Option<ClassName>,
    ) -> Result<NodeId, GraphError> {
        let pure = function.flags.pure;
        let call = CallNode {
            function: Some(function.clone()),
            template,
        };
        let kind = if pure {
            NodeKind::PureFunctionCall(call)
        } else {
            NodeKind::FunctionCall(call)
        };

        self.build_node(kind, |graph, id| {
            if !pure {
                graph.create_connector(id, Direction::Input, ConnectorType::Execution, pins::RUN, None)?;
                graph.create_connector(
                    id,
                    Direction::Input,
                    ConnectorType::Object,
                    pins::TARGET,
                    Some(function.owner.clone()),
                )?;
                graph.create_connector(id, Direction::Output, ConnectorType::Execution, pins::DONE, None)?;
            }
            graph.connectors_from_function(id, &function, return_class)
        })
    }

    /// Maps out and return parameters to outputs and the rest to inputs.
    fn connectors_from_function(
        &mut self,
        id: NodeId,
        function: &FunctionDescriptor,
        return_class: Option<ClassName>,
    ) -> Result<(), GraphError> {
        for param in &function.params {
            let (ty, class) = classify(&param.ty);
            if !ty.is_supported() {
                debug!(param = %param.name, function = %function.name, "skipping unsupported parameter");
                continue;
            }

            if param.is_return {
                let class = match (ty, &return_class) {
                    (ConnectorType::Object, Some(over)) => Some(over.clone()),
                    _ => class,
                };
                self.create_connector(id, Direction::Output, ty, pins::RETURN, class)?;
            } else if param.out {
                self.create_connector(id, Direction::Output, ty, &param.name, class)?;
            } else {
                self.create_connector(id, Direction::Input, ty, &param.name, class)?;
            }
        }
        Ok(())
    }

    /// Adds a node and runs `build` on it, removing the node again if it fails.
    fn build_node<F>(&mut self, kind: NodeKind, build: F) -> Result<NodeId, GraphError>
    where
        F: FnOnce(&mut Graph, NodeId) -> Result<(), GraphError>,
    {
        let id = self.add_node(kind);
        match build(self, id) {
            Ok(()) => Ok(id),
            Err(err) => {
                self.remove_node(id)?;
                Err(err)
            }
        }
    }
}
