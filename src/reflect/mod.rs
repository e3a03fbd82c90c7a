//! Descriptors for the functions, properties and classes a graph can reference.
//!
//! These are supplied by the host's reflection layer; this crate only consumes them.

pub mod library;

pub use library::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the root class every object derives from.
pub const ROOT_CLASS: &str = "Object";

/// Identity of a class or interface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassName(String);

impl ClassName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The root `Object` class.
    pub fn root() -> Self {
        Self::new(ROOT_CLASS)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// The declared type of a parameter or property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDescriptor {
    Bool,
    Int,
    Float,
    Byte,
    Name,
    String,
    Object { class: ClassName },
    Interface { class: ClassName },
    Struct { name: String },
    Array { inner: Box<TypeDescriptor> },
    Map,
    Delegate,
}

impl TypeDescriptor {
    pub fn object(class: impl Into<String>) -> Self {
        TypeDescriptor::Object {
            class: ClassName::new(class),
        }
    }

    pub fn structure(name: impl Into<String>) -> Self {
        TypeDescriptor::Struct { name: name.into() }
    }
}

/// One formal parameter of a function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    #[serde(default)]
    pub out: bool,
    #[serde(default, rename = "return")]
    pub is_return: bool,
}

impl ParamDescriptor {
    pub fn input(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
            out: false,
            is_return: false,
        }
    }

    pub fn output(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            out: true,
            ..Self::input(name, ty)
        }
    }

    pub fn returns(ty: TypeDescriptor) -> Self {
        Self {
            out: true,
            is_return: true,
            ..Self::input("ReturnValue", ty)
        }
    }
}

/// Flags that decide how a function shows up in a graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionFlags {
    /// Rendered as an infix operator instead of a call.
    pub operator: bool,
    /// May be placed in a graph as a call node.
    pub callable: bool,
    /// An override point, compiled as an event.
    pub event: bool,
    /// Has no side effects and therefore no execution connectors.
    pub pure: bool,
}

/// A function signature as reported by reflection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    pub name: String,
    #[serde(default)]
    pub owner: ClassName,
    #[serde(default)]
    pub params: Vec<ParamDescriptor>,
    #[serde(default)]
    pub flags: FunctionFlags,
}

impl FunctionDescriptor {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: ClassName::new(owner),
            params: Vec::new(),
            flags: FunctionFlags {
                callable: true,
                ..FunctionFlags::default()
            },
        }
    }

    pub fn with_param(mut self, param: ParamDescriptor) -> Self {
        self.params.push(param);
        self
    }

    pub fn as_pure(mut self) -> Self {
        self.flags.pure = true;
        self
    }

    pub fn as_operator(mut self) -> Self {
        self.flags.operator = true;
        self
    }

    pub fn as_event(mut self) -> Self {
        self.flags.event = true;
        self.flags.callable = false;
        self
    }

    pub fn return_param(&self) -> Option<&ParamDescriptor> {
        self.params.iter().find(|p| p.is_return)
    }

    /// Every parameter except the return value, in declaration order.
    pub fn arguments(&self) -> impl Iterator<Item = &ParamDescriptor> {
        self.params.iter().filter(|p| !p.is_return)
    }
}

/// A member variable as reported by reflection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default = "default_editable")]
    pub editable: bool,
}

fn default_editable() -> bool {
    true
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
            read_only: false,
            editable: true,
        }
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

/// A class together with the members a graph may use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub name: ClassName,
    #[serde(default)]
    pub functions: Vec<FunctionDescriptor>,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
}
