use super::resolve::{lower_pure_dependencies, member_variable_assignments, resolve_connected, resolve_input};
use super::{lower_successor, node_ref, CodeGenContext, CodeLines, LoopBlame};
use crate::error::CompileError;
use crate::graph::{pins, Connector, NodeId};
use crate::types::{classify, operator_symbol, ConnectorType};
use itertools::Itertools;

/// Builds the single statement for a call node, binding its return value
/// and out parameters to freshly allocated variables.
pub fn call_expression(
    ctx: &mut CodeGenContext<'_>,
    node: NodeId,
) -> Result<CodeLines, CompileError> {
    let graph = ctx.graph();
    let node = node_ref(graph, node)?;
    let call = node.kind().as_call();
    let function = call
        .and_then(|call| call.function.as_ref())
        .ok_or_else(|| CompileError::MissingFunction {
            node: node.name().to_string(),
        })?;
    let template = call.and_then(|call| call.template.as_ref());

    let mut assign = String::new();
    let mut cast = None;
    if let Some(ret) = graph
        .output_named(node.id(), pins::RETURN)
        .filter(|ret| ret.is_connected())
    {
        let var = ctx.allocate(&format!("{}Ret", function.name));
        assign = format!("{} = ", var);
        ctx.bind(ret.id(), var);

        if ret.connector_type() == ConnectorType::Object {
            let formal = function
                .return_param()
                .and_then(|param| classify(&param.ty).1);
            if ret.class() != formal.as_ref() {
                cast = ret.class();
            }
        }
    }

    // One slot per formal parameter; a parameter without a connector
    // keeps its position with an empty argument.
    let mut args = Vec::new();
    for param in function.arguments() {
        if let Some(template) = template.filter(|_| param.name == pins::TEMPLATE) {
            args.push(template.code_string());
            continue;
        }

        let arg = if !classify(&param.ty).0.is_supported() {
            String::new()
        } else if param.out {
            match graph.output_named(node.id(), &param.name) {
                Some(output) => {
                    let var = ctx.allocate(&param.name);
                    ctx.bind(output.id(), var.clone());
                    var
                }
                None => String::new(),
            }
        } else {
            match graph.input_named(node.id(), &param.name) {
                Some(input) => resolve_input(ctx, node, input)?,
                None => String::new(),
            }
        };
        args.push(arg);
    }

    let expression = if function.flags.operator {
        let [lhs, rhs] = <[String; 2]>::try_from(args).map_err(|args| {
            CompileError::ArityMismatch {
                node: node.name().to_string(),
                found: args.len(),
            }
        })?;
        format!("{} {} {}", lhs, operator_symbol(&function.name), rhs)
    } else {
        let target = resolve_connected(ctx, node, pins::TARGET)?
            .map(|target| format!("{}.", target))
            .unwrap_or_default();
        if args.is_empty() {
            format!("{}{}()", target, function.name)
        } else {
            format!("{}{}( {} )", target, function.name, args.iter().join(", "))
        }
    };

    let expression = match cast {
        Some(class) => format!("{}( {} )", class, expression),
        None => expression,
    };

    let mut lines = CodeLines::new();
    lines.push(format!("{}{};", assign, expression));
    Ok(lines)
}

/// Lowers an impure call and everything executed after it.
pub fn lower_call(ctx: &mut CodeGenContext<'_>, node: NodeId) -> Result<CodeLines, CompileError> {
    let mut lines = lower_pure_dependencies(ctx, node)?;
    lines.append(call_expression(ctx, node)?);
    lines.append(member_variable_assignments(ctx, node_ref(ctx.graph(), node)?)?);
    lines.append(lower_successor(ctx, node, pins::DONE, LoopBlame::Source)?);
    Ok(lines)
}
