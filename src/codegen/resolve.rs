use super::{node_ref, CodeGenContext, CodeLines};
use crate::codegen::call::call_expression;
use crate::error::CompileError;
use crate::graph::{pins, Connector, Input, Node, NodeId, NodeKind};
use ahash::AHashSet;

/// The source text for an input's value.
///
/// Unconnected inputs use their literal default. Member variable outputs
/// resolve to the variable itself; anything else must already be bound.
pub fn resolve_input(
    ctx: &CodeGenContext<'_>,
    consumer: &Node,
    input: &Input,
) -> Result<String, CompileError> {
    let graph = ctx.graph();
    let Some(output) = input.upstream().and_then(|id| graph.output(id)) else {
        return Ok(input.default_value().code_string());
    };
    let source = node_ref(graph, output.node())?;

    if let NodeKind::MemberVariable(var) = source.kind() {
        return Ok(var.name.clone());
    }

    ctx.variable_for(output.id())
        .map(str::to_string)
        .ok_or_else(|| CompileError::UnresolvedValue {
            output: output.name().to_string(),
            source_node: source.name().to_string(),
            consumer: consumer.name().to_string(),
        })
}

/// Resolves a named input only when something is connected to it.
pub fn resolve_connected(
    ctx: &CodeGenContext<'_>,
    node: &Node,
    name: &str,
) -> Result<Option<String>, CompileError> {
    match ctx.graph().input_named(node.id(), name) {
        Some(input) if input.is_connected() => resolve_input(ctx, node, input).map(Some),
        _ => Ok(None),
    }
}

/// Emits every pure call feeding `node`, dependencies first.
///
/// A pure call already emitted during this compilation is reused.
pub fn lower_pure_dependencies(
    ctx: &mut CodeGenContext<'_>,
    node: NodeId,
) -> Result<CodeLines, CompileError> {
    let mut order = Vec::new();
    let mut expanding = AHashSet::new();
    collect_pure_dependencies(ctx, node, &mut expanding, &mut order)?;

    let mut lines = CodeLines::new();
    for dependency in order {
        lines.append(call_expression(ctx, dependency)?);
    }
    Ok(lines)
}

fn collect_pure_dependencies(
    ctx: &mut CodeGenContext<'_>,
    node: NodeId,
    expanding: &mut AHashSet<NodeId>,
    order: &mut Vec<NodeId>,
) -> Result<(), CompileError> {
    let graph = ctx.graph();
    let sources = node_ref(graph, node)?
        .inputs()
        .iter()
        .filter_map(|id| graph.input(*id))
        .filter(|input| !input.connector_type().is_execution())
        .filter_map(|input| input.upstream().and_then(|id| graph.output(id)))
        .map(|output| output.node())
        .collect::<Vec<_>>();

    for source in sources {
        let source_node = node_ref(graph, source)?;
        if !source_node.kind().is_pure() {
            continue;
        }
        if expanding.contains(&source) {
            return Err(CompileError::LoopDetected {
                node: source_node.name().to_string(),
            });
        }
        if ctx.is_visited(source) {
            continue;
        }

        expanding.insert(source);
        collect_pure_dependencies(ctx, source, expanding, order)?;
        expanding.remove(&source);
        ctx.mark_visited(source);
        order.push(source);
    }
    Ok(())
}

/// `Var = value;` for each data output of `node` wired into a member variable.
pub fn member_variable_assignments(
    ctx: &CodeGenContext<'_>,
    node: &Node,
) -> Result<CodeLines, CompileError> {
    let graph = ctx.graph();
    let mut lines = CodeLines::new();

    let outputs = node
        .outputs()
        .iter()
        .filter_map(|id| graph.output(*id))
        .filter(|output| !output.connector_type().is_execution());

    for output in outputs {
        for input in output.fan_out().iter().filter_map(|id| graph.input(*id)) {
            let target = node_ref(graph, input.node())?;
            let NodeKind::MemberVariable(var) = target.kind() else {
                continue;
            };
            if input.name() != pins::SET {
                continue;
            }

            let value = ctx
                .variable_for(output.id())
                .ok_or_else(|| CompileError::UnresolvedValue {
                    output: output.name().to_string(),
                    source_node: node.name().to_string(),
                    consumer: target.name().to_string(),
                })?;
            lines.push(format!("{} = {};", var.name, value));
        }
    }
    Ok(lines)
}
