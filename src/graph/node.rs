use super::{InputId, NodeId, OutputId};
use crate::reflect::{ClassName, FunctionDescriptor};
use crate::types::{operator_symbol, ConnectorType};
use serde::{Deserialize, Serialize};

/// A component archetype passed to a new-component call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentTemplate {
    pub class: ClassName,
    pub path: String,
}

impl ComponentTemplate {
    pub fn new(class: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            class: ClassName::new(class),
            path: path.into(),
        }
    }

    /// Object reference literal, `Class'Path'`.
    pub fn code_string(&self) -> String {
        format!("{}'{}'", self.class, self.path)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallNode {
    pub function: Option<FunctionDescriptor>,
    /// Set only for new-component calls.
    pub template: Option<ComponentTemplate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventNode {
    pub name: String,
    pub function: Option<FunctionDescriptor>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberVariableNode {
    pub name: String,
    pub var_type: ConnectorType,
    pub class: Option<ClassName>,
    pub read_only: bool,
}

/// The closed set of node variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Event(EventNode),
    FunctionCall(CallNode),
    PureFunctionCall(CallNode),
    IfElse,
    ForLoop,
    MemberVariable(MemberVariableNode),
}

impl NodeKind {
    /// Prefix of generated node names.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Event(_) => "Event",
            NodeKind::FunctionCall(_) => "Func",
            NodeKind::PureFunctionCall(_) => "FuncPure",
            NodeKind::IfElse => "IfElse",
            NodeKind::ForLoop => "ForLoop",
            NodeKind::MemberVariable(_) => "MemberVar",
        }
    }

    /// The call payload of either call variant.
    pub fn as_call(&self) -> Option<&CallNode> {
        match self {
            NodeKind::FunctionCall(call) | NodeKind::PureFunctionCall(call) => Some(call),
            _ => None,
        }
    }

    pub fn is_pure(&self) -> bool {
        matches!(self, NodeKind::PureFunctionCall(_))
    }

    pub fn is_event(&self) -> bool {
        matches!(self, NodeKind::Event(_))
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) name: String,
    pub(crate) kind: NodeKind,
    pub(crate) inputs: Vec<InputId>,
    pub(crate) outputs: Vec<OutputId>,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The object name used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The call payload of a call node. The variant itself is fixed at
    /// creation, since it decides the node's connector layout.
    pub fn call_mut(&mut self) -> Option<&mut CallNode> {
        match &mut self.kind {
            NodeKind::FunctionCall(call) | NodeKind::PureFunctionCall(call) => Some(call),
            _ => None,
        }
    }

    pub fn inputs(&self) -> &[InputId] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[OutputId] {
        &self.outputs
    }

    /// The title an editor shows for this node.
    pub fn display_name(&self) -> String {
        match &self.kind {
            NodeKind::FunctionCall(call) | NodeKind::PureFunctionCall(call) => {
                match &call.function {
                    Some(f) if f.flags.operator => operator_symbol(&f.name).to_string(),
                    Some(f) => format!("{}::{}", f.owner, f.name),
                    None => "None".to_string(),
                }
            }
            NodeKind::Event(event) => event.name.clone(),
            NodeKind::IfElse => "IfElse".to_string(),
            NodeKind::ForLoop => "ForLoop".to_string(),
            NodeKind::MemberVariable(var) => match (&var.var_type, &var.class) {
                (ConnectorType::Object, Some(class)) => format!("{} ({})", var.name, class),
                _ => var.name.clone(),
            },
        }
    }

    /// Whether unconnected inputs may be given literal defaults.
    pub fn defaults_editable(&self) -> bool {
        !matches!(self.kind, NodeKind::MemberVariable(_))
    }
}
