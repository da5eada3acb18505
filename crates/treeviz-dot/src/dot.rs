//! DOT format utilities for graph rendering.

use std::fmt::Write;

/// Escape special characters for DOT labels.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Write indentation to output.
pub fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// Write `id [key="value", ...]`, escaping every value.
pub fn write_statement(output: &mut String, id: &str, attrs: &[(&str, &str)]) {
    let _ = write!(output, "{id} [");
    for (i, (key, value)) in attrs.iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        let _ = write!(output, "{}=\"{}\"", key, escape_label(value));
    }
    output.push(']');
}

/// A DOT graph builder for constructing valid DOT output.
pub struct DotBuilder {
    output: String,
    indent: usize,
}

impl DotBuilder {
    /// Create a new DOT digraph with the given name.
    pub fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "digraph {name} {{");
        Self { output, indent: 1 }
    }

    /// Add a node style default.
    pub fn node_style(&mut self, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        write_statement(&mut self.output, "node", attrs);
        self.output.push_str(";\n");
        self
    }

    /// Add a blank line for readability.
    pub fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    /// Add a node with full attributes.
    pub fn node_full(&mut self, id: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        write_statement(&mut self.output, id, attrs);
        self.output.push_str(";\n");
        self
    }

    /// Add an edge with attributes.
    pub fn edge_with_attrs(&mut self, from: &str, to: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        write_statement(&mut self.output, &format!("{from} -> {to}"), attrs);
        self.output.push_str(";\n");
        self
    }

    /// Start a (non-cluster) subgraph.
    pub fn start_subgraph(&mut self, name: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "subgraph {name} {{");
        self.indent += 1;
        self
    }

    /// End the current subgraph.
    pub fn end_subgraph(&mut self) -> &mut Self {
        self.indent -= 1;
        write_indent(&mut self.output, self.indent);
        self.output.push_str("}\n");
        self
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_label() {
        assert_eq!(escape_label("a\nb"), "a\\nb");
        assert_eq!(escape_label("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_label("C:\\tmp"), "C:\\\\tmp");
    }

    #[test]
    fn test_builder_layout() {
        let mut builder = DotBuilder::new("Tree");
        builder
            .node_style(&[("shape", "box")])
            .start_subgraph("body")
            .edge_with_attrs("0", "1", &[("headlabel", "True")])
            .blank()
            .node_full("1", &[("label", "Node ID 1\nx")])
            .end_subgraph();

        assert_eq!(
            builder.build(),
            "digraph Tree {\n\
             \x20 node [shape=\"box\"];\n\
             \x20 subgraph body {\n\
             \x20   0 -> 1 [headlabel=\"True\"];\n\
             \n\
             \x20   1 [label=\"Node ID 1\\nx\"];\n\
             \x20 }\n\
             }\n"
        );
    }

    #[test]
    fn test_statement_without_attrs() {
        let mut out = String::new();
        write_statement(&mut out, "3", &[]);
        assert_eq!(out, "3 []");
    }
}
