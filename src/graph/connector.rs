use super::{InputId, NodeId, OutputId};
use crate::reflect::ClassName;
use crate::types::{ConnectorType, Literal};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of a node a connector sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Input,
    Output,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Input => f.write_str("input"),
            Direction::Output => f.write_str("output"),
        }
    }
}

/// Handle to a connector of either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectorId {
    Input(InputId),
    Output(OutputId),
}

impl ConnectorId {
    pub fn as_input(self) -> Option<InputId> {
        match self {
            ConnectorId::Input(id) => Some(id),
            ConnectorId::Output(_) => None,
        }
    }

    pub fn as_output(self) -> Option<OutputId> {
        match self {
            ConnectorId::Output(id) => Some(id),
            ConnectorId::Input(_) => None,
        }
    }
}

/// Behaviour shared by inputs and outputs.
pub trait Connector {
    fn node(&self) -> NodeId;
    fn name(&self) -> &str;
    fn connector_type(&self) -> ConnectorType;
    fn class(&self) -> Option<&ClassName>;

    /// The type as written in a declaration: the class name for typed
    /// object connectors, the keyword otherwise.
    fn type_code(&self) -> String {
        match (self.connector_type(), self.class()) {
            (ConnectorType::Object, Some(class)) => class.to_string(),
            (ty, _) => ty.keyword().to_string(),
        }
    }
}

/// A connector that receives at most one upstream value.
#[derive(Debug, Clone)]
pub struct Input {
    pub(crate) id: InputId,
    pub(crate) node: NodeId,
    pub(crate) name: String,
    pub(crate) ty: ConnectorType,
    pub(crate) class: Option<ClassName>,
    pub(crate) from: Option<OutputId>,
    pub(crate) default: Literal,
}

impl Input {
    pub fn id(&self) -> InputId {
        self.id
    }

    /// The upstream output, if connected.
    pub fn upstream(&self) -> Option<OutputId> {
        self.from
    }

    pub fn is_connected(&self) -> bool {
        self.from.is_some()
    }

    /// The literal used when nothing is connected.
    pub fn default_value(&self) -> &Literal {
        &self.default
    }
}

impl Connector for Input {
    fn node(&self) -> NodeId {
        self.node
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn connector_type(&self) -> ConnectorType {
        self.ty
    }

    fn class(&self) -> Option<&ClassName> {
        self.class.as_ref()
    }
}

/// A connector that feeds any number of downstream inputs.
#[derive(Debug, Clone)]
pub struct Output {
    pub(crate) id: OutputId,
    pub(crate) node: NodeId,
    pub(crate) name: String,
    pub(crate) ty: ConnectorType,
    pub(crate) class: Option<ClassName>,
    pub(crate) to: Vec<InputId>,
}

impl Output {
    pub fn id(&self) -> OutputId {
        self.id
    }

    /// Downstream inputs in connection order.
    pub fn fan_out(&self) -> &[InputId] {
        &self.to
    }

    pub fn is_connected(&self) -> bool {
        !self.to.is_empty()
    }
}

impl Connector for Output {
    fn node(&self) -> NodeId {
        self.node
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn connector_type(&self) -> ConnectorType {
        self.ty
    }

    fn class(&self) -> Option<&ClassName> {
        self.class.as_ref()
    }
}
