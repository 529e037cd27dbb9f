//! C++ enum builder.

use ifgen_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::DocComment;

/// A member of a C++ enum.
#[derive(Debug, Clone)]
pub struct Enumerator {
    pub name: String,
    pub value: Option<String>,
    pub doc: DocComment,
}

impl Enumerator {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            doc: DocComment::brief(None, &name),
            name,
            value: None,
        }
    }

    pub fn doc(mut self, doc: DocComment) -> Self {
        self.doc = doc;
        self
    }

    /// Set the initializer literal, e.g. `Foo = 10`.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// The declarator line without separator, e.g. `Foo = 10` or `Foo`.
    pub fn declarator(&self) -> String {
        match &self.value {
            Some(value) => format!("{} = {}", self.name, value),
            None => self.name.clone(),
        }
    }

    /// Build the enumerator as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::cpp();
        builder.emit(self);
        builder.build_fragment()
    }
}

impl Renderable for Enumerator {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.doc.to_fragments();
        fragments.push(CodeFragment::line(self.declarator()));
        fragments
    }
}

/// Builder for C++ enum declarations.
#[derive(Debug, Clone)]
pub struct EnumDecl {
    name: String,
    doc: DocComment,
    enumerators: Vec<Enumerator>,
}

impl EnumDecl {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            doc: DocComment::brief(Some("Enumeration"), &name),
            name,
            enumerators: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: DocComment) -> Self {
        self.doc = doc;
        self
    }

    pub fn enumerator(mut self, enumerator: Enumerator) -> Self {
        self.enumerators.push(enumerator);
        self
    }

    /// Enumerators separated by `,` and a blank line, the last one bare.
    pub fn body_fragments(&self) -> Vec<CodeFragment> {
        let last = self.enumerators.len().saturating_sub(1);
        self.enumerators
            .iter()
            .enumerate()
            .flat_map(|(i, enumerator)| {
                let mut fragments = enumerator.doc.to_fragments();
                if i < last {
                    fragments.push(CodeFragment::line(format!("{},", enumerator.declarator())));
                    fragments.push(CodeFragment::blank());
                } else {
                    fragments.push(CodeFragment::line(enumerator.declarator()));
                }
                fragments
            })
            .collect()
    }

    /// Render only the enum body, unindented and without a final newline.
    pub fn build_body(&self) -> String {
        let mut builder = CodeBuilder::cpp();
        for fragment in self.body_fragments() {
            builder.apply_fragment(fragment);
        }
        builder.build_fragment()
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::cpp();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for EnumDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.doc.to_fragments();
        fragments.push(CodeFragment::line(format!("enum {}", self.name)));
        fragments.push(CodeFragment::line("{"));
        if self.enumerators.is_empty() {
            // The body slot still occupies one (empty) line.
            fragments.push(CodeFragment::blank());
        } else {
            fragments.push(CodeFragment::indent(self.body_fragments()));
        }
        fragments.push(CodeFragment::line("};"));
        fragments
    }
}
