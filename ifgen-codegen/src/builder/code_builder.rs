//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Renderable};

/// One indentation level of generated C++.
pub const INDENT: &str = "    ";

/// Incremental builder for indented code.
///
/// Indentation applies per physical line: text containing `\n` is indented
/// line by line. Empty lines are never indented, so blank separators inside
/// an indented block stay truly empty.
///
/// # Example
///
/// ```
/// use ifgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::cpp();
/// builder
///     .push_line("enum Color")
///     .push_line("{")
///     .push_indent()
///     .push_line("Red,")
///     .push_blank()
///     .push_line("Green")
///     .push_dedent()
///     .push_line("};");
///
/// assert_eq!(builder.build(), "enum Color\n{\n    Red,\n\n    Green\n};\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with 4-space indentation (C++ default).
    pub fn cpp() -> Self {
        Self {
            indent_level: 0,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    ///
    /// Each physical line of `s` is indented on its own.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for line in s.split('\n') {
            if !line.is_empty() {
                self.write_indent();
                self.buffer.push_str(line);
            }
            self.buffer.push('\n');
        }
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
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

    /// Add a `/** ... */` block, one ` * ` line per physical line of each entry.
    pub fn push_doc_block<S: AsRef<str>>(&mut self, lines: &[S]) -> &mut Self {
        self.push_line("/**");
        for line in lines.iter().flat_map(|entry| entry.as_ref().split('\n')) {
            match line {
                "" => self.push_line(" *"),
                text => self.push_line(&format!(" * {text}")),
            };
        }
        self.push_line(" */")
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::DocBlock(lines) => {
                self.push_doc_block(&lines);
            }
        }
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Consume the builder and return the code without its final line terminator.
    ///
    /// Used for text that is spliced into a larger output by the caller.
    pub fn build_fragment(mut self) -> String {
        if self.buffer.ends_with('\n') {
            self.buffer.pop();
        }
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::cpp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::cpp();
        builder.push_line("int x = 1;");
        assert_eq!(builder.build(), "int x = 1;\n");
    }

    #[test]
    fn test_empty_line_is_not_indented() {
        let mut builder = CodeBuilder::cpp();
        builder
            .push_indent()
            .push_line("a,")
            .push_line("")
            .push_line("b");

        assert_eq!(builder.build(), "    a,\n\n    b\n");
    }

    #[test]
    fn test_multiline_text_is_indented_per_line() {
        let mut builder = CodeBuilder::cpp();
        builder.push_indent().push_line("first\nsecond\n\nthird");

        assert_eq!(builder.build(), "    first\n    second\n\n    third\n");
    }

    #[test]
    fn test_doc_block_prefixes_every_physical_line() {
        let mut builder = CodeBuilder::cpp();
        builder
            .push_indent()
            .push_doc_block(&["@brief a.", "", "first\nsecond", "x\n\ny"]);

        assert_eq!(
            builder.build(),
            "    /**\n     * @brief a.\n     *\n     * first\n     * second\n     \
             * x\n     *\n     * y\n     */\n"
        );
    }

    #[test]
    fn test_raw_is_not_indented() {
        let mut builder = CodeBuilder::cpp();
        builder.push_indent().push_raw("enum E\n{\n};\n").push_line("x");

        assert_eq!(builder.build(), "enum E\n{\n};\n    x\n");
    }

    #[test]
    fn test_doc_block() {
        let mut builder = CodeBuilder::cpp();
        builder.push_doc_block(&["@brief name.", "", "Line"]);

        assert_eq!(builder.build(), "/**\n * @brief name.\n *\n * Line\n */\n");
    }

    #[test]
    fn test_emit_fragments() {
        struct Decl;

        impl Renderable for Decl {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::doc_block(vec!["@brief E.".to_string()]),
                    CodeFragment::line("enum E"),
                    CodeFragment::line("{"),
                    CodeFragment::indent(vec![
                        CodeFragment::line("a,"),
                        CodeFragment::blank(),
                        CodeFragment::line("b"),
                    ]),
                    CodeFragment::line("};"),
                ]
            }
        }

        let mut builder = CodeBuilder::cpp();
        builder.emit(&Decl);

        assert_eq!(builder.current_indent(), 0);
        assert_eq!(
            builder.build(),
            "/**\n * @brief E.\n */\nenum E\n{\n    a,\n\n    b\n};\n"
        );
    }

    #[test]
    fn test_build_fragment_strips_one_terminator() {
        let mut builder = CodeBuilder::cpp();
        builder.push_line("x");
        assert_eq!(builder.build_fragment(), "x");

        let mut builder = CodeBuilder::cpp();
        builder.push_line("x").push_blank();
        assert_eq!(builder.build_fragment(), "x\n");

        assert_eq!(CodeBuilder::cpp().build_fragment(), "");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::cpp();
        builder.push_dedent().push_dedent();
        assert_eq!(builder.current_indent(), 0);
    }
}
