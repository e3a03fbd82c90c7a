//! Lowers a graph, one event at a time, into indented script lines.
//!
//! Lowering follows execution connectors from the event's `Done` output.
//! Pure calls have no execution connectors and are hoisted in front of the
//! first statement that consumes them. Each event compiles in its own
//! [`CodeGenContext`], so names and bindings never leak between events.

pub mod call;
pub mod context;
pub mod event;
pub mod flow;
pub mod lines;
pub mod resolve;

pub use context::*;
pub use lines::*;

use crate::error::CompileError;
use crate::graph::{Graph, Node, NodeId, NodeKind};
use tracing::{debug, warn};

/// Generates the source lines for one event node.
pub fn generate_event(graph: &Graph, event: NodeId) -> Result<CodeLines, CompileError> {
    let node = node_ref(graph, event)?;
    if !node.kind().is_event() {
        return Err(CompileError::NotAnEvent(node.name().to_string()));
    }

    let mut ctx = CodeGenContext::new(graph);
    event::lower_event(&mut ctx, event)
}

pub(crate) fn node_ref(graph: &Graph, id: NodeId) -> Result<&Node, CompileError> {
    graph.node(id).ok_or(CompileError::NodeNotFound(id))
}

/// Lowers a node reached through an execution connector.
pub(crate) fn lower_node(ctx: &mut CodeGenContext<'_>, id: NodeId) -> Result<CodeLines, CompileError> {
    ctx.mark_visited(id);
    let node = node_ref(ctx.graph(), id)?;
    debug!(node = %node.name(), kind = node.kind().label(), "lowering node");

    match node.kind() {
        NodeKind::FunctionCall(_) => call::lower_call(ctx, id),
        NodeKind::IfElse => flow::lower_if_else(ctx, id),
        NodeKind::ForLoop => flow::lower_for_loop(ctx, id),
        NodeKind::Event(_) | NodeKind::PureFunctionCall(_) | NodeKind::MemberVariable(_) => {
            Err(CompileError::NotExecutable(node.name().to_string()))
        }
    }
}

/// Which node a loop diagnostic names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopBlame {
    /// The node whose output closes the loop.
    Source,
    /// The already visited node the output leads back to.
    Target,
}

/// Lowers whatever the named execution output of `node` leads to.
///
/// Only the first downstream input is followed.
pub(crate) fn lower_successor(
    ctx: &mut CodeGenContext<'_>,
    node: NodeId,
    output: &str,
    blame: LoopBlame,
) -> Result<CodeLines, CompileError> {
    let graph = ctx.graph();
    if let Some(fan_out) = graph.output_named(node, output).map(|o| o.fan_out().len()) {
        if fan_out > 1 {
            warn!(
                node = %node_ref(graph, node)?.name(),
                output,
                fan_out,
                "execution output drives several inputs, following the first"
            );
        }
    }

    let Some(next) = graph.successor(node, output) else {
        return Ok(CodeLines::new());
    };
    if ctx.is_visited(next) {
        let culprit = match blame {
            LoopBlame::Source => node,
            LoopBlame::Target => next,
        };
        return Err(CompileError::LoopDetected {
            node: node_ref(graph, culprit)?.name().to_string(),
        });
    }
    lower_node(ctx, next)
}
