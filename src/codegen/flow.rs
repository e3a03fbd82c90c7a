use super::resolve::{lower_pure_dependencies, member_variable_assignments, resolve_input};
use super::{lower_successor, node_ref, CodeGenContext, CodeLines, LoopBlame};
use crate::error::CompileError;
use crate::graph::{pins, Node, NodeId};

/// `if( cond == TRUE) { ... } else { ... }`
pub fn lower_if_else(ctx: &mut CodeGenContext<'_>, node: NodeId) -> Result<CodeLines, CompileError> {
    let mut lines = lower_pure_dependencies(ctx, node)?;
    let condition = input_value(ctx, node_ref(ctx.graph(), node)?, pins::BOOL)?;

    lines.push(format!("if( {} == TRUE)", condition));
    lines.push("{");
    lines.append(lower_successor(ctx, node, pins::TRUE, LoopBlame::Target)?.indented());
    lines.push("}");
    lines.push("else");
    lines.push("{");
    lines.append(lower_successor(ctx, node, pins::FALSE, LoopBlame::Target)?.indented());
    lines.push("}");
    Ok(lines)
}

/// Counts a fresh `ForCount` variable up to `Count`, then continues with `Then`.
pub fn lower_for_loop(ctx: &mut CodeGenContext<'_>, node: NodeId) -> Result<CodeLines, CompileError> {
    let mut lines = lower_pure_dependencies(ctx, node)?;
    let graph = ctx.graph();
    let for_node = node_ref(graph, node)?;
    let count = input_value(ctx, for_node, pins::COUNT)?;

    let counter = ctx.allocate("ForCount");
    if let Some(loop_count) = graph.output_named(node, pins::LOOP_COUNT) {
        ctx.bind(loop_count.id(), counter.clone());
    }

    let mut body = member_variable_assignments(ctx, for_node)?;
    body.append(lower_successor(ctx, node, pins::LOOP, LoopBlame::Target)?);

    lines.push(format!("for( {c}=0; {c}<{}; {c}++ )", count, c = counter));
    lines.push("{");
    lines.append(body.indented());
    lines.push("}");
    lines.push("");
    lines.append(lower_successor(ctx, node, pins::THEN, LoopBlame::Target)?);
    Ok(lines)
}

fn input_value(ctx: &CodeGenContext<'_>, node: &Node, name: &str) -> Result<String, CompileError> {
    match ctx.graph().input_named(node.id(), name) {
        Some(input) => resolve_input(ctx, node, input),
        None => Ok(String::new()),
    }
}
