use crate::error::DefinitionError;
use crate::graph::ComponentTemplate;
use crate::reflect::ClassName;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A graph described by node ids and named links, ready to be built
/// against a reflection source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDefinition {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<NodeDefinition>,
    #[serde(default)]
    pub links: Vec<LinkDefinition>,
}

impl GraphDefinition {
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One node. The id becomes the node's name in the built graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDefinition {
    pub id: String,
    #[serde(flatten)]
    pub kind: NodeKindDefinition,
    /// Literal defaults keyed by input name, in their textual form.
    #[serde(default)]
    pub defaults: AHashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKindDefinition {
    Event {
        class: ClassName,
        function: String,
    },
    Call {
        class: ClassName,
        function: String,
        #[serde(default)]
        return_class: Option<ClassName>,
    },
    NewComponent {
        class: ClassName,
        function: String,
        template: ComponentTemplate,
    },
    IfElse,
    ForLoop,
    Variable {
        class: ClassName,
        property: String,
    },
}

/// An edge from a named output to a named input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDefinition {
    pub from: String,
    pub output: String,
    pub to: String,
    pub input: String,
}
