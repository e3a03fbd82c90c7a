use super::{GraphDefinition, NodeKindDefinition};
use crate::error::DefinitionError;
use crate::graph::{Direction, Graph, NodeId};
use crate::reflect::{ClassName, FunctionDescriptor, Reflection};
use ahash::AHashMap;
use itertools::Itertools;
use tracing::debug;

/// Anything that can be turned into a [`Graph`] given a reflection source.
///
/// Implement this for your own editor or file format to feed it to the
/// compiler. Conversion goes through the mutation API, so the result always
/// satisfies the graph's connection invariants.
pub trait IntoGraph {
    fn into_graph<R: Reflection + ?Sized>(self, reflection: &R) -> Result<Graph, DefinitionError>;
}

impl IntoGraph for GraphDefinition {
    fn into_graph<R: Reflection + ?Sized>(self, reflection: &R) -> Result<Graph, DefinitionError> {
        let mut graph = Graph::new(self.name);
        let mut ids: AHashMap<String, NodeId> = AHashMap::new();

        for node in self.nodes {
            if ids.contains_key(&node.id) {
                return Err(DefinitionError::DuplicateNode(node.id));
            }

            let id = match node.kind {
                NodeKindDefinition::Event { class, function } => {
                    graph.add_event(lookup_function(reflection, &class, &function)?)?
                }
                NodeKindDefinition::Call {
                    class,
                    function,
                    return_class,
                } => graph.add_function_call(
                    lookup_function(reflection, &class, &function)?,
                    return_class,
                )?,
                NodeKindDefinition::NewComponent {
                    class,
                    function,
                    template,
                } => graph.add_new_component(
                    lookup_function(reflection, &class, &function)?,
                    template,
                )?,
                NodeKindDefinition::IfElse => graph.add_if_else()?,
                NodeKindDefinition::ForLoop => graph.add_for_loop()?,
                NodeKindDefinition::Variable { class, property } => {
                    let descriptor = reflection.property(&class, &property).ok_or_else(|| {
                        DefinitionError::UnknownProperty {
                            class: class.to_string(),
                            property: property.clone(),
                        }
                    })?;
                    graph.add_member_variable(descriptor)?
                }
            };

            if let Some(built) = graph.node_mut(id) {
                built.set_name(node.id.clone());
            }

            for (input_name, text) in node.defaults.iter().sorted() {
                let input = graph.find_input(id, input_name).ok_or_else(|| {
                    DefinitionError::UnknownConnector {
                        node: node.id.clone(),
                        direction: Direction::Input,
                        name: input_name.clone(),
                    }
                })?;
                graph.set_input_default(input, text)?;
            }

            debug!(node = %node.id, "built node from definition");
            ids.insert(node.id, id);
        }

        for link in self.links {
            let from = *ids
                .get(&link.from)
                .ok_or_else(|| DefinitionError::UnknownNode(link.from.clone()))?;
            let to = *ids
                .get(&link.to)
                .ok_or_else(|| DefinitionError::UnknownNode(link.to.clone()))?;

            let output = graph.find_output(from, &link.output).ok_or_else(|| {
                DefinitionError::UnknownConnector {
                    node: link.from.clone(),
                    direction: Direction::Output,
                    name: link.output.clone(),
                }
            })?;
            let input = graph.find_input(to, &link.input).ok_or_else(|| {
                DefinitionError::UnknownConnector {
                    node: link.to.clone(),
                    direction: Direction::Input,
                    name: link.input.clone(),
                }
            })?;
            graph.connect(output, input)?;
        }

        Ok(graph)
    }
}

fn lookup_function<R: Reflection + ?Sized>(
    reflection: &R,
    class: &ClassName,
    function: &str,
) -> Result<FunctionDescriptor, DefinitionError> {
    reflection
        .function(class, function)
        .cloned()
        .ok_or_else(|| DefinitionError::UnknownFunction {
            class: class.to_string(),
            function: function.to_string(),
        })
}
