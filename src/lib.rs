//! # Kairo - Node Graph to Script Compiler
//!
//! **Kairo** turns visual node graphs (events, function calls, branches, loops and
//! member variables wired together through typed connectors) into readable procedural
//! script source.
//!
//! ## Core Workflow
//!
//! 1.  **Describe the API**: Load a [`reflect::Library`] (or implement [`reflect::Reflection`])
//!     listing the classes, functions and properties a graph may use.
//! 2.  **Build a Graph**: Use the node factories and the mutation API on [`graph::Graph`], or
//!     convert a [`definition::GraphDefinition`] through the `IntoGraph` trait.
//! 3.  **Compile**: Use `ScriptCompiler::builder` to configure the output and compile one event
//!     or all of them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kairo::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let tick = FunctionDescriptor::new("Actor", "Tick")
//!         .as_event()
//!         .with_param(ParamDescriptor::input("DeltaTime", TypeDescriptor::Float));
//!     let log = FunctionDescriptor::new("Actor", "Log")
//!         .with_param(ParamDescriptor::input("Message", TypeDescriptor::String));
//!
//!     let mut graph = Graph::new("Example");
//!     let event = graph.add_event(tick)?;
//!     let call = graph.add_function_call(log, None)?;
//!
//!     let done = graph.find_output(event, pins::DONE).ok_or("missing Done")?;
//!     let run = graph.find_input(call, pins::RUN).ok_or("missing Run")?;
//!     graph.connect(done, run)?;
//!
//!     let message = graph.find_input(call, "Message").ok_or("missing Message")?;
//!     graph.set_input_default(message, "Hello")?;
//!
//!     let source = ScriptCompiler::new(&graph).compile_event(event)?;
//!     assert_eq!(source, "event Tick(float DeltaTime)\n{\n\n\tLog( \"Hello\" );\n}\n");
//!     Ok(())
//! }
//! ```

pub mod codegen;
pub mod compiler;
pub mod definition;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod reflect;
pub mod types;
