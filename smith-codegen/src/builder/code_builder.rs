//! Code builder utility for generating properly indented code.

use super::Indent;

/// Builds code as an ordered sequence of indented lines.
///
/// Lines are joined with `\n` by [`CodeBuilder::build`]; the result has no
/// trailing newline.
///
/// # Example
///
/// ```
/// use typesmith_codegen::builder::{CodeBuilder, Indent};
///
/// let mut builder = CodeBuilder::new(Indent::FOUR);
/// builder.push_block("struct Root {", "}", |b| {
///     b.push_line("var id: Int?");
/// });
/// assert_eq!(builder.build(), "struct Root {\n    var id: Int?\n}");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    lines: Vec<String>,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            lines: Vec::new(),
        }
    }

    /// Add a line of code with current indentation.
    ///
    /// An empty string adds a blank line without indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if s.is_empty() {
            return self.push_blank();
        }
        let mut line = self.indent.repeat(self.indent_level);
        line.push_str(s);
        self.lines.push(line);
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Add every line of an already rendered block at the current indentation.
    pub fn push_lines(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            self.push_line(line);
        }
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block: `header`, the indented body written by `f`, then `close`.
    pub fn push_block<F>(&mut self, header: &str, close: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header).push_indent();
        f(self);
        self.push_dedent().push_line(close)
    }

    /// Whether no line has been added yet.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}
