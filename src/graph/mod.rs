//! The node graph: typed connectors, node variants and the mutation API.
//!
//! Edges are stored on both ends. For every output `o` and input `i`,
//! `i` is in `o`'s fan-out exactly when `i`'s upstream is `o`. Every
//! mutation in [`mutation`] keeps that true.

pub mod connector;
pub mod factory;
pub mod graph;
pub mod ids;
pub mod mutation;
pub mod node;

pub use connector::*;
pub use graph::*;
pub use ids::*;
pub use mutation::*;
pub use node::*;

/// Names of the connectors the factories create.
pub mod pins {
    pub const RUN: &str = "Run";
    pub const TARGET: &str = "Target";
    pub const DONE: &str = "Done";
    pub const RETURN: &str = "Return";
    pub const BOOL: &str = "Bool";
    pub const TRUE: &str = "True";
    pub const FALSE: &str = "False";
    pub const COUNT: &str = "Count";
    pub const LOOP: &str = "Loop";
    pub const LOOP_COUNT: &str = "LoopCount";
    pub const THEN: &str = "Then";
    pub const SET: &str = "Set";
    pub const GET: &str = "Get";
    /// Parameter of a new-component call that receives the template.
    pub const TEMPLATE: &str = "Template";
}
