//! Structural properties of the renderers over generated models.

use ifgen_codegen_cpp::{
    number_elements, render_comment, render_elements, render_enum, render_enums,
};
use ifgen_ir::{Docs, Enum, EnumElement};
use proptest::prelude::*;

fn ident() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,12}"
}

/// Entries may be empty or span several lines.
fn section() -> impl Strategy<Value = Option<Vec<String>>> {
    prop::option::of(prop::collection::vec("[A-Za-z0-9 .\n]{0,20}", 0..4))
}

fn docs() -> impl Strategy<Value = Docs> {
    (section(), section(), section(), section()).prop_map(
        |(description, design_description, issues, todos)| Docs {
            description,
            design_description,
            issues,
            todos,
        },
    )
}

fn element() -> impl Strategy<Value = EnumElement> {
    (
        ident(),
        prop::option::of(ident()),
        prop::option::of(-1000i64..1000),
        docs(),
    )
        .prop_map(|(name, internal_name, value, docs)| EnumElement {
            name,
            internal_name,
            value: value.map(|v| v.to_string()),
            docs,
        })
}

fn enum_model() -> impl Strategy<Value = Enum> {
    (ident(), docs(), prop::collection::vec(element(), 0..6)).prop_map(|(name, docs, elements)| {
        elements
            .into_iter()
            .enumerate()
            .fold(Enum::new(name).with_docs(docs), |e, (i, element)| {
                e.element(format!("key{i}"), element)
            })
    })
}

fn sections(docs: &Docs) -> Vec<&[String]> {
    [
        docs.description(),
        docs.design_description(),
        docs.issues(),
        docs.todos(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Bare ` *` lines: one separator per section plus one per empty physical
/// line in an untagged section.
fn bare_lines(docs: &Docs) -> usize {
    let empty_lines = |section: Option<&[String]>| {
        section.map_or(0, |entries| {
            entries
                .iter()
                .flat_map(|entry| entry.split('\n'))
                .filter(|line| line.is_empty())
                .count()
        })
    };
    sections(docs).len() + empty_lines(docs.description()) + empty_lines(docs.design_description())
}

proptest! {
    #[test]
    fn comment_has_one_separator_per_present_section(docs in docs()) {
        let element = EnumElement::new("x").with_docs(docs.clone());
        let comment = render_comment(&element, None, "x");

        let lines: Vec<&str> = comment.split('\n').collect();
        let bare = lines.iter().filter(|line| **line == " *").count();
        prop_assert_eq!(bare, bare_lines(&docs));

        prop_assert_eq!(lines.first().copied(), Some("/**"));
        prop_assert_eq!(lines.last().copied(), Some(" */"));
        for line in &lines[1..lines.len() - 1] {
            prop_assert!(*line == " *" || line.starts_with(" * "), "unprefixed line {:?}", line);
        }
        if docs.is_empty() {
            prop_assert_eq!(comment, "/**\n * @brief x.\n */");
        }
    }

    #[test]
    fn body_has_one_separator_between_elements(e in enum_model()) {
        let body = render_elements(e.elements.values()).unwrap();
        let n = e.elements.len();

        prop_assert_eq!(body.matches(",\n\n").count(), n.saturating_sub(1));
        prop_assert_eq!(body.lines().filter(|line| line.ends_with(',')).count(), n.saturating_sub(1));
        prop_assert!(!body.ends_with('\n'));
        prop_assert!(!body.ends_with(','));
    }

    #[test]
    fn literal_emitted_only_when_explicit(element in element()) {
        let elements = [element.clone()];
        let body = render_elements(&elements).unwrap();
        let last = body.lines().last().unwrap_or_default().to_string();

        match &element.value {
            Some(value) => prop_assert_eq!(last, format!("{} = {}", element_name(&element), value)),
            None => prop_assert_eq!(last, element_name(&element)),
        }
    }

    #[test]
    fn counter_advances_once_per_element(e in enum_model()) {
        let numbered = number_elements(e.elements.values()).unwrap();
        let mut expected_next = 1i128;

        for n in &numbered {
            match &n.element.value {
                Some(literal) => prop_assert_eq!(n.value, literal.parse::<i128>().unwrap()),
                None => prop_assert_eq!(n.value, expected_next),
            }
            expected_next = n.value + 1;
        }
        prop_assert_eq!(numbered.len(), e.elements.len());
    }

    #[test]
    fn enum_body_is_indented_by_four_spaces(e in enum_model()) {
        let decl = render_enum(&e).unwrap();
        let body = render_elements(e.elements.values()).unwrap();

        let open = decl.find("\n{\n").unwrap() + 3;
        let close = decl.rfind("\n};\n").unwrap();
        let inner = &decl[open..close];

        let expected: Vec<String> = body
            .split('\n')
            .map(|line| if line.is_empty() { String::new() } else { format!("    {line}") })
            .collect();
        prop_assert_eq!(inner, expected.join("\n"));
        for line in inner.split('\n') {
            prop_assert!(line.is_empty() || line.starts_with("    "), "unindented body line {:?}", line);
        }
        prop_assert!(decl.ends_with("};\n"), "declaration does not end with closing brace: {:?}", decl);
    }

    #[test]
    fn batch_preserves_order(enums in prop::collection::vec(enum_model(), 0..4)) {
        let batch = render_enums(&enums).unwrap();
        let expected: Vec<String> = enums.iter().map(|e| render_enum(e).unwrap()).collect();

        prop_assert_eq!(batch, expected.join("\n"));
    }

    #[test]
    fn rendering_is_deterministic(e in enum_model()) {
        prop_assert_eq!(render_enum(&e).unwrap(), render_enum(&e).unwrap());
    }
}

fn element_name(element: &EnumElement) -> String {
    element
        .internal_name
        .clone()
        .unwrap_or_else(|| element.name.clone())
}
