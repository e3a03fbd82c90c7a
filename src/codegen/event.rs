use super::{lower_successor, node_ref, CodeGenContext, CodeLines, LoopBlame};
use crate::error::CompileError;
use crate::graph::{pins, Connector, NodeId, NodeKind};
use itertools::Itertools;

/// Lowers an event into `event Name(params) { locals; body }`.
pub fn lower_event(ctx: &mut CodeGenContext<'_>, node: NodeId) -> Result<CodeLines, CompileError> {
    let graph = ctx.graph();
    let event_node = node_ref(graph, node)?;
    let event = match event_node.kind() {
        NodeKind::Event(event) if event.function.is_some() => event,
        NodeKind::Event(_) => {
            return Err(CompileError::MissingFunction {
                node: event_node.name().to_string(),
            });
        }
        _ => return Err(CompileError::NotAnEvent(event_node.name().to_string())),
    };
    ctx.mark_visited(node);

    let params = event_node
        .outputs()
        .iter()
        .filter_map(|id| graph.output(*id))
        .filter(|output| !output.connector_type().is_execution())
        .collect::<Vec<_>>();
    for param in &params {
        ctx.bind(param.id(), param.name().to_string());
    }
    let signature = params
        .iter()
        .map(|param| format!("{} {}", param.type_code(), param.name()))
        .join(", ");

    let mut lines = CodeLines::new();
    lines.push(format!("event {}({})", event.name, signature));
    lines.push("{");

    if graph.successor(node, pins::DONE).is_some() {
        let body = lower_successor(ctx, node, pins::DONE, LoopBlame::Source)?;

        let mut locals = CodeLines::new();
        for (output, name) in ctx.bindings() {
            let Some(output) = graph.output(output) else {
                continue;
            };
            let owner = node_ref(graph, output.node())?;
            if owner.kind().is_event() {
                continue;
            }
            locals.push(format!("local {} {};", output.type_code(), name));
        }

        lines.append(locals.indented());
        lines.push("");
        lines.append(body.indented());
    }

    lines.push("}");
    Ok(lines)
}
