use crate::graph::{Direction, InputId, NodeId, OutputId};
use crate::types::ConnectorType;
use thiserror::Error;

/// Errors that can occur while lowering a graph into script source.
///
/// Every variant is fatal to the compilation that raised it: no partial code is
/// returned and the message is surfaced to the caller unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("Missing function '{node}'")]
    MissingFunction { node: String },

    #[error("Operator needs 2 params '{node}', but it has {found}")]
    ArityMismatch { node: String, found: usize },

    #[error("Output '{output}' on node '{source_node}' used by '{consumer}' before it is executed.")]
    UnresolvedValue {
        output: String,
        source_node: String,
        consumer: String,
    },

    #[error("Loop detected at '{node}'")]
    LoopDetected { node: String },

    #[error("Node {0} not found in the graph")]
    NodeNotFound(NodeId),

    #[error("Node '{0}' cannot be run through an execution connector")]
    NotExecutable(String),

    #[error("Node '{0}' is not an event and cannot be compiled as an entry point")]
    NotAnEvent(String),

    #[error("No event named '{0}' exists in the graph")]
    EventNotFound(String),
}

/// Errors raised by the graph mutation API and the node factories.
///
/// A failed mutation leaves the graph exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Cannot connect a {from} output to a {to} input")]
    TypeMismatch {
        from: ConnectorType,
        to: ConnectorType,
    },

    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("Input {0} not found")]
    InputNotFound(InputId),

    #[error("Output {0} not found")]
    OutputNotFound(OutputId),

    #[error("Node '{node}' already has an {direction} named '{name}'")]
    DuplicateConnector {
        node: String,
        direction: Direction,
        name: String,
    },

    #[error("Connector '{name}' has an unsupported type")]
    UnsupportedType { name: String },

    #[error(transparent)]
    InvalidLiteral(#[from] LiteralError),
}

/// Errors produced when parsing a literal default from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("'{text}' is not a valid {ty} literal")]
    Invalid { ty: ConnectorType, text: String },

    #[error("{0} connectors cannot hold a literal value")]
    Unsupported(ConnectorType),
}

/// Errors that can occur when loading a library or converting a graph definition.
#[derive(Error, Debug)]
pub enum DefinitionError {
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Node id '{0}' is defined more than once")]
    DuplicateNode(String),

    #[error("Node '{0}' is referenced by a link but never defined")]
    UnknownNode(String),

    #[error("Function '{class}.{function}' not found in the library")]
    UnknownFunction { class: String, function: String },

    #[error("Property '{class}.{property}' not found in the library")]
    UnknownProperty { class: String, property: String },

    #[error("Node '{node}' has no {direction} named '{name}'")]
    UnknownConnector {
        node: String,
        direction: Direction,
        name: String,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),
}
