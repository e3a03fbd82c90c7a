use crate::codegen::{generate_event, IndentStyle};
use crate::error::CompileError;
use crate::graph::{Graph, NodeId, NodeKind};
use tracing::info;

/// Compiles the events of a graph into script source.
pub struct ScriptCompiler<'g> {
    graph: &'g Graph,
    indent: IndentStyle,
    event_separator: String,
}

pub struct ScriptCompilerBuilder<'g> {
    graph: &'g Graph,
    indent: IndentStyle,
    event_separator: String,
}

impl<'g> ScriptCompilerBuilder<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            indent: IndentStyle::Tabs,
            event_separator: "\n".to_string(),
        }
    }

    pub fn with_indent(mut self, indent: IndentStyle) -> Self {
        self.indent = indent;
        self
    }

    /// Text placed between two compiled events. Defaults to one blank line.
    pub fn with_event_separator(mut self, separator: &str) -> Self {
        self.event_separator = separator.to_string();
        self
    }

    pub fn build(self) -> ScriptCompiler<'g> {
        ScriptCompiler {
            graph: self.graph,
            indent: self.indent,
            event_separator: self.event_separator,
        }
    }
}

impl<'g> ScriptCompiler<'g> {
    pub fn builder(graph: &'g Graph) -> ScriptCompilerBuilder<'g> {
        ScriptCompilerBuilder::new(graph)
    }

    /// A compiler with default settings.
    pub fn new(graph: &'g Graph) -> Self {
        Self::builder(graph).build()
    }

    pub fn compile_event(&self, event: NodeId) -> Result<String, CompileError> {
        let lines = generate_event(self.graph, event)?;
        if let Some(node) = self.graph.node(event) {
            info!(event = %node.name(), lines = lines.len(), "compiled event");
        }
        Ok(lines.render_with(self.indent))
    }

    /// Compiles the event whose event name or node name is `name`.
    pub fn compile_event_named(&self, name: &str) -> Result<String, CompileError> {
        let event = self
            .graph
            .events()
            .find(|node| {
                node.name() == name
                    || matches!(node.kind(), NodeKind::Event(e) if e.name == name)
            })
            .ok_or_else(|| CompileError::EventNotFound(name.to_string()))?;
        self.compile_event(event.id())
    }

    /// Compiles every event in graph order into one source unit.
    pub fn compile_all(&self) -> Result<String, CompileError> {
        let events = self.graph.events().map(|node| node.id()).collect::<Vec<_>>();
        let mut sources = Vec::with_capacity(events.len());
        for event in &events {
            sources.push(self.compile_event(*event)?);
        }

        info!(graph = %self.graph.name(), events = events.len(), "compiled graph");
        Ok(sources.join(&self.event_separator))
    }
}
