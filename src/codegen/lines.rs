use std::fmt;

/// The unit used for one level of indentation when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentStyle {
    #[default]
    Tabs,
    Spaces(usize),
}

impl IndentStyle {
    fn unit(self) -> String {
        match self {
            IndentStyle::Tabs => "\t".to_string(),
            IndentStyle::Spaces(n) => " ".repeat(n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeLine {
    pub indent: usize,
    pub text: String,
}

impl CodeLine {
    pub fn new(indent: usize, text: impl Into<String>) -> Self {
        Self {
            indent,
            text: text.into(),
        }
    }
}

/// An ordered buffer of indented source lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeLines {
    lines: Vec<CodeLine>,
}

impl CodeLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line at indent 0.
    pub fn push(&mut self, text: impl Into<String>) {
        self.push_indented(0, text);
    }

    pub fn push_indented(&mut self, indent: usize, text: impl Into<String>) {
        self.lines.push(CodeLine::new(indent, text));
    }

    /// Appends another buffer, keeping each line's own indent.
    pub fn append(&mut self, other: CodeLines) {
        self.lines.extend(other.lines);
    }

    pub fn indent_all(&mut self) {
        for line in &mut self.lines {
            line.indent += 1;
        }
    }

    pub fn indented(mut self) -> Self {
        self.indent_all();
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CodeLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Renders with tab indentation, one trailing newline per line.
    pub fn render(&self) -> String {
        self.render_with(IndentStyle::Tabs)
    }

    /// Empty lines are rendered without indentation.
    pub fn render_with(&self, style: IndentStyle) -> String {
        let unit = style.unit();
        let mut out = String::new();
        for line in &self.lines {
            if !line.text.is_empty() {
                out.push_str(&unit.repeat(line.indent));
                out.push_str(&line.text);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for CodeLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromIterator<CodeLine> for CodeLines {
    fn from_iter<I: IntoIterator<Item = CodeLine>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CodeLines {
    type Item = CodeLine;
    type IntoIter = std::vec::IntoIter<CodeLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a CodeLines {
    type Item = &'a CodeLine;
    type IntoIter = std::slice::Iter<'a, CodeLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
