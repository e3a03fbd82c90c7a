//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the kairo crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use kairo::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let library = Library::from_json(&std::fs::read_to_string("path/to/library.json")?)?;
//! let definition = GraphDefinition::from_json(&std::fs::read_to_string("path/to/graph.json")?)?;
//!
//! let graph = definition.into_graph(&library)?;
//! let source = ScriptCompiler::new(&graph).compile_all()?;
//! println!("{}", source);
//! # Ok(())
//! # }
//! ```

// Compilation
pub use crate::codegen::{generate_event, CodeLines, IndentStyle};
pub use crate::compiler::{ScriptCompiler, ScriptCompilerBuilder};

// Graph model and mutation
pub use crate::graph::{
    pins, AllowFanOut, ComponentTemplate, Connector, Direction, FanOutPolicy, Graph, InputId,
    Node, NodeId, NodeKind, OutputId, SingleExecution,
};

// Reflection
pub use crate::reflect::{
    ClassName, FunctionDescriptor, Library, ParamDescriptor, PropertyDescriptor, Reflection,
    TypeDescriptor,
};
pub use crate::types::{ConnectorType, Literal};

// Definitions
pub use crate::definition::{GraphDefinition, IntoGraph};

// Error types
pub use crate::error::{CompileError, DefinitionError, GraphError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
