//! Rendering of documented model entities into C++ declarations.
//!
//! Every function here is pure: the same model always yields byte-identical
//! text, and no state survives between calls. The only running state is the
//! element counter inside [`number_elements`], local to one call.

use ifgen_codegen::CodeBuilder;
use ifgen_ir::{Documented, Enum, EnumElement};

use crate::{
    DocComment, EnumDecl, Enumerator, MalformedValue, RenderError, literal::parse_literal,
};

/// Label printed in the `@brief` line of enum comments.
pub const ENUM_LABEL: &str = "Enumeration";

/// Render the Doxygen comment of `entity`, without a trailing newline.
///
/// The `@brief` line is always present. Description, design description,
/// issues and todos follow as separate paragraphs when non-empty.
pub fn render_comment(
    entity: &(impl Documented + ?Sized),
    brief_label: Option<&str>,
    brief_name: &str,
) -> String {
    let mut builder = CodeBuilder::cpp();
    builder.emit(&DocComment::for_entity(entity, brief_label, brief_name));
    builder.build_fragment()
}

/// Render one enum element: its comment, then `name` or `name = value`.
///
/// The literal is printed only when the model supplies one.
pub fn render_element(element: &EnumElement) -> String {
    enumerator(element).build()
}

/// An element paired with its effective numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numbered<'a> {
    pub element: &'a EnumElement,
    pub value: i128,
}

/// Assign every element its effective value.
///
/// The counter starts at 1. An explicit literal sets the element's value and
/// restarts the counter after it; any other element takes the counter. The
/// counter advances once per element either way.
///
/// Values without a literal are bookkeeping only: the generated code leaves
/// them to the compiler's default numbering.
pub fn number_elements<'a, I>(elements: I) -> Result<Vec<Numbered<'a>>, MalformedValue>
where
    I: IntoIterator<Item = &'a EnumElement>,
{
    let mut next: i128 = 1;
    elements
        .into_iter()
        .map(|element| {
            let value = match &element.value {
                Some(literal) => parse_literal(literal).map_err(|source| MalformedValue {
                    element: element.brief_name().to_string(),
                    value: literal.clone(),
                    source,
                })?,
                None => next,
            };
            next = value + 1;
            Ok(Numbered { element, value })
        })
        .collect()
}

/// Render the body of an enum: elements separated by `,` and a blank line.
///
/// The output is unindented and has no trailing separator.
pub fn render_elements<'a, I>(elements: I) -> Result<String, MalformedValue>
where
    I: IntoIterator<Item = &'a EnumElement>,
{
    Ok(enum_decl(EnumDecl::new(""), elements)?.build_body())
}

/// Render a full `enum Name { ... };` declaration, ending in a newline.
pub fn render_enum(e: &Enum) -> Result<String, RenderError> {
    let name = e.brief_name();
    let decl = EnumDecl::new(name).doc(DocComment::for_entity(e, Some(ENUM_LABEL), name));
    let decl = enum_decl(decl, e.elements.values())
        .map_err(|err| RenderError::in_enum(name, err))?;

    tracing::debug!(name, elements = e.elements.len(), "rendered enum");
    Ok(decl.build())
}

/// Render enums in the given order, one newline between declarations.
///
/// Stops at the first enum that fails to render.
pub fn render_enums<'a, I>(enums: I) -> Result<String, RenderError>
where
    I: IntoIterator<Item = &'a Enum>,
{
    let rendered = enums
        .into_iter()
        .map(render_enum)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rendered.join("\n"))
}

fn enumerator(element: &EnumElement) -> Enumerator {
    let name = element.brief_name();
    let enumerator = Enumerator::new(name).doc(DocComment::for_entity(element, None, name));
    match &element.value {
        Some(value) => enumerator.value(value.as_str()),
        None => enumerator,
    }
}

fn enum_decl<'a, I>(decl: EnumDecl, elements: I) -> Result<EnumDecl, MalformedValue>
where
    I: IntoIterator<Item = &'a EnumElement>,
{
    // Numbering first so a malformed literal fails before any text is built.
    let numbered = number_elements(elements)?;
    Ok(numbered
        .iter()
        .fold(decl, |decl, n| decl.enumerator(enumerator(n.element))))
}
