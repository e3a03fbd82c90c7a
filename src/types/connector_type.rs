use crate::reflect::{ClassName, TypeDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Struct names that map onto dedicated connector types.
const VECTOR_STRUCT: &str = "Vector";
const ROTATOR_STRUCT: &str = "Rotator";

/// The type of value flowing through a connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectorType {
    Bool,
    Int,
    Float,
    Vector,
    Rotator,
    String,
    Object,
    /// Control flow sequencing rather than a data value.
    Execution,
    Unsupported,
}

impl ConnectorType {
    /// The keyword used when declaring a variable of this type.
    pub fn keyword(self) -> &'static str {
        match self {
            ConnectorType::Bool => "bool",
            ConnectorType::Int => "int",
            ConnectorType::Float => "float",
            ConnectorType::Vector => "vector",
            ConnectorType::Rotator => "rotator",
            ConnectorType::String => "string",
            ConnectorType::Object => "object",
            ConnectorType::Execution => "execution",
            ConnectorType::Unsupported => "UNKNOWN",
        }
    }

    pub fn is_execution(self) -> bool {
        self == ConnectorType::Execution
    }

    pub fn is_supported(self) -> bool {
        self != ConnectorType::Unsupported
    }
}

impl fmt::Display for ConnectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Maps an external type descriptor onto a connector type.
///
/// Object references also yield the referenced class. Anything without a
/// dedicated connector type comes back as `Unsupported`, which callers skip
/// silently when building connectors from a signature.
pub fn classify(descriptor: &TypeDescriptor) -> (ConnectorType, Option<ClassName>) {
    match descriptor {
        TypeDescriptor::Bool => (ConnectorType::Bool, None),
        TypeDescriptor::Int => (ConnectorType::Int, None),
        TypeDescriptor::Float => (ConnectorType::Float, None),
        TypeDescriptor::String => (ConnectorType::String, None),
        TypeDescriptor::Object { class } => (ConnectorType::Object, Some(class.clone())),
        TypeDescriptor::Struct { name } if name == VECTOR_STRUCT => (ConnectorType::Vector, None),
        TypeDescriptor::Struct { name } if name == ROTATOR_STRUCT => {
            (ConnectorType::Rotator, None)
        }
        TypeDescriptor::Struct { .. }
        | TypeDescriptor::Byte
        | TypeDescriptor::Name
        | TypeDescriptor::Interface { .. }
        | TypeDescriptor::Array { .. }
        | TypeDescriptor::Map
        | TypeDescriptor::Delegate => (ConnectorType::Unsupported, None),
    }
}
