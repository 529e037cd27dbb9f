//! Doxygen comment blocks.

use ifgen_codegen::{CodeFragment, Renderable};
use ifgen_ir::Documented;

/// A `/** ... */` comment made of a `@brief` line and optional paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocComment {
    brief: String,
    paragraphs: Vec<Vec<String>>,
}

impl DocComment {
    /// Start a comment whose brief line reads `@brief [label ]name.`.
    pub fn brief(label: Option<&str>, name: &str) -> Self {
        let brief = match label.filter(|label| !label.is_empty()) {
            Some(label) => format!("@brief {label} {name}."),
            None => format!("@brief {name}."),
        };
        Self {
            brief,
            paragraphs: Vec::new(),
        }
    }

    /// Build the full comment for a documented entity.
    ///
    /// Sections appear in a fixed order: description, design description,
    /// issues as `@note`, todos as `@todo`. Entries spanning several lines
    /// are split so every physical line gets its own ` * ` line and tag.
    pub fn for_entity(
        entity: &(impl Documented + ?Sized),
        label: Option<&str>,
        name: &str,
    ) -> Self {
        let docs = entity.docs();

        Self::brief(label, name)
            .paragraph(docs.description().map(physical_lines))
            .paragraph(docs.design_description().map(physical_lines))
            .paragraph(docs.issues().map(|lines| tagged("@note", lines)))
            .paragraph(docs.todos().map(|lines| tagged("@todo", lines)))
    }

    /// Append a paragraph; `None` or an empty paragraph adds nothing.
    pub fn paragraph(mut self, lines: Option<Vec<String>>) -> Self {
        if let Some(lines) = lines.filter(|lines| !lines.is_empty()) {
            self.paragraphs.push(lines);
        }
        self
    }

    /// Content lines between `/**` and `*/`, with `""` marking a separator.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.brief.clone()];
        for paragraph in &self.paragraphs {
            lines.push(String::new());
            lines.extend(paragraph.iter().cloned());
        }
        lines
    }
}

fn physical_lines(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|entry| entry.split('\n'))
        .map(str::to_string)
        .collect()
}

fn tagged(tag: &str, entries: &[String]) -> Vec<String> {
    physical_lines(entries)
        .into_iter()
        .map(|line| format!("{tag} {line}"))
        .collect()
}

impl Renderable for DocComment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::doc_block(self.lines())]
    }
}
