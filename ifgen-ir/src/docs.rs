//! Documentation metadata shared by every documented entity.

use serde::Serialize;

/// Optional human-authored documentation attached to an entity.
///
/// Each section is `None` when the source omits it. An empty sequence is
/// kept as written, but renders exactly like an absent section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Docs {
    /// Free-form description, one entry per line.
    pub description: Option<Vec<String>>,
    /// Design notes, one entry per line.
    pub design_description: Option<Vec<String>>,
    /// Known issues, rendered as `@note` lines.
    pub issues: Option<Vec<String>>,
    /// Pending work, rendered as `@todo` lines.
    pub todos: Option<Vec<String>>,
}

impl Docs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.description = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_design_description<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.design_description = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_issues<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.issues = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_todos<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.todos = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    /// Description lines, or `None` when absent or empty.
    pub fn description(&self) -> Option<&[String]> {
        present(&self.description)
    }

    /// Design description lines, or `None` when absent or empty.
    pub fn design_description(&self) -> Option<&[String]> {
        present(&self.design_description)
    }

    /// Issue lines, or `None` when absent or empty.
    pub fn issues(&self) -> Option<&[String]> {
        present(&self.issues)
    }

    /// Todo lines, or `None` when absent or empty.
    pub fn todos(&self) -> Option<&[String]> {
        present(&self.todos)
    }

    /// Returns true if no section would render.
    pub fn is_empty(&self) -> bool {
        self.description().is_none()
            && self.design_description().is_none()
            && self.issues().is_none()
            && self.todos().is_none()
    }
}

fn present(section: &Option<Vec<String>>) -> Option<&[String]> {
    section.as_deref().filter(|lines| !lines.is_empty())
}

/// An entity that carries a display name and documentation metadata.
pub trait Documented {
    /// Display name from the source document.
    fn name(&self) -> &str;

    /// Identifier preferred over the display name in generated code.
    fn internal_name(&self) -> Option<&str> {
        None
    }

    fn docs(&self) -> &Docs;

    /// Name used in the `@brief` line and as the emitted identifier.
    fn brief_name(&self) -> &str {
        self.internal_name().unwrap_or_else(|| self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sections_count_as_absent() {
        let docs = Docs {
            description: Some(Vec::new()),
            issues: Some(Vec::new()),
            ..Docs::default()
        };
        assert!(docs.is_empty());
        assert_eq!(docs.description(), None);
        // The distinction survives in the field itself.
        assert_eq!(docs.description, Some(Vec::new()));
    }

    #[test]
    fn test_builders_keep_line_order() {
        let docs = Docs::new().with_todos(["Do1", "Do2"]);
        assert!(!docs.is_empty());
        assert_eq!(docs.todos().unwrap(), ["Do1", "Do2"]);
        assert_eq!(docs.issues(), None);
    }
}
