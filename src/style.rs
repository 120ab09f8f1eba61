//! Inline style support.
//!
//! A `style` attribute is split into a [`DeclarationMap`] and then mapped
//! onto a [`StyleProperties`] record.  Only a fixed set of declarations is
//! consulted; everything else is kept in the map and ignored.

use std::collections::HashMap;

use crate::properties::{ContainerKind, StyleProperties, TextAlignment};

mod parser;

pub use parser::parse_colour;

/// Declarations from an inline style, keyed by (case-sensitive) name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeclarationMap {
    decls: HashMap<String, String>,
}

impl DeclarationMap {
    /// Parse an optional style attribute.  A missing attribute gives an
    /// empty map.
    pub fn parse(style: Option<&str>) -> DeclarationMap {
        style.map(parse_declarations).unwrap_or_default()
    }

    /// Look up the value of a declaration.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.decls.get(name).map(String::as_str)
    }

    /// Returns true if there are no declarations.
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

/// Split an inline style into declarations.
///
/// The text is split on `;`, and each piece on its first `:`; both halves
/// are trimmed.  Pieces without a `:` are dropped, and a repeated name
/// keeps its last value.
pub fn parse_declarations(style: &str) -> DeclarationMap {
    let pairs = parser::declaration_list(style)
        .map(|(_, pairs)| pairs)
        .unwrap_or_default();
    let mut decls = HashMap::new();
    for (name, value) in pairs {
        decls.insert(name.to_string(), value.to_string());
    }
    DeclarationMap { decls }
}

/// Build the formatting properties for a container of kind `kind`.
///
/// Returns `None` when `map` is empty.  Otherwise every flag in the result
/// is assigned from the declarations, independently of any earlier call.
pub fn resolve(map: &DeclarationMap, kind: ContainerKind) -> Option<StyleProperties> {
    if map.is_empty() {
        return None;
    }
    let mut props = StyleProperties::new(kind);

    props.page_break_before = map.get("page-break-before") == Some("always");
    props.page_break_after = map.get("page-break-after") == Some("always");

    props.bold = matches!(map.get("font-weight"), Some("bold") | Some("700"));
    props.italic = map.get("font-style") == Some("italic");

    // Decorations are a space separated set.
    let decoration = map.get("text-decoration").unwrap_or("");
    props.underline = decoration.contains("underline");
    props.strike = decoration.contains("line-through");

    match map.get("vertical-align") {
        Some("sub") => props.subscript = true,
        Some("super") => props.superscript = true,
        _ => (),
    }

    if let Some(align) = map.get("text-align") {
        match TextAlignment::from_css(align) {
            Some(alignment) => props.text_alignment = alignment,
            None => {
                html_trace!("Ignoring text-align value {:?}", align);
            }
        }
    }

    if let Some(colour) = map.get("color") {
        props.colour = parse_colour(colour);
        if props.colour.is_none() {
            html_trace!("Unparseable color {:?}", colour);
        }
    }

    props.style_name = map.get("name").map(str::to_string);

    Some(props)
}

/// Parse and resolve an optional `style` attribute in one go.
pub fn resolve_style(style: Option<&str>, kind: ContainerKind) -> Option<StyleProperties> {
    resolve(&DeclarationMap::parse(style), kind)
}

#[cfg(test)]
mod tests {
    use super::{parse_declarations, resolve, resolve_style, DeclarationMap};
    use crate::properties::{Colour, ContainerKind, StyleProperties, TextAlignment};

    fn span(style: &str) -> StyleProperties {
        resolve_style(Some(style), ContainerKind::Span).unwrap()
    }

    #[test]
    fn test_parse_declarations() {
        let map = parse_declarations(" color : red;font-weight:bold ;nonsense");
        assert_eq!(map.decls.len(), 2);
        assert_eq!(map.get("color"), Some("red"));
        assert_eq!(map.get("font-weight"), Some("bold"));
        assert_eq!(map.get("nonsense"), None);
    }

    #[test]
    fn test_parse_declarations_last_wins() {
        let map = parse_declarations("color: red; color: blue");
        assert_eq!(map.decls.len(), 1);
        assert_eq!(map.get("color"), Some("blue"));
    }

    #[test]
    fn test_parse_declarations_case_sensitive() {
        let map = parse_declarations("Color: red");
        assert_eq!(map.get("color"), None);
        assert_eq!(map.get("Color"), Some("red"));
    }

    #[test]
    fn test_parse_empty_and_missing() {
        assert!(parse_declarations("").is_empty());
        assert!(DeclarationMap::parse(None).is_empty());
        assert!(parse_declarations(";;  ;").is_empty());
    }

    #[test]
    fn test_resolve_empty_is_none() {
        for kind in [ContainerKind::Paragraph, ContainerKind::Span, ContainerKind::TableCell] {
            assert_eq!(resolve(&DeclarationMap::default(), kind), None);
        }
        assert_eq!(resolve_style(None, ContainerKind::List), None);
        assert_eq!(resolve_style(Some("no separator"), ContainerKind::List), None);
    }

    #[test]
    fn test_resolve_unrelated_declaration_gives_defaults() {
        let props = resolve_style(Some("margin: 0"), ContainerKind::Paragraph).unwrap();
        assert_eq!(props, StyleProperties::new(ContainerKind::Paragraph));
    }

    #[test]
    fn test_font_weight() {
        assert!(span("font-weight: bold").bold);
        assert!(span("font-weight: 700").bold);
        assert!(!span("font-weight: normal").bold);
        assert!(!span("font-weight: BOLD").bold);
    }

    #[test]
    fn test_font_style() {
        assert!(span("font-style: italic").italic);
        assert!(!span("font-style: oblique").italic);
    }

    #[test]
    fn test_text_decoration_set() {
        let props = span("text-decoration: underline line-through");
        assert!(props.underline);
        assert!(props.strike);
        let props = span("text-decoration: line-through");
        assert!(!props.underline);
        assert!(props.strike);
        let props = span("text-decoration: none");
        assert!(!props.underline);
        assert!(!props.strike);
    }

    #[test]
    fn test_vertical_align() {
        let props = span("vertical-align: sub");
        assert!(props.subscript && !props.superscript);
        let props = span("vertical-align: super");
        assert!(!props.subscript && props.superscript);
        let props = span("vertical-align: middle");
        assert!(!props.subscript && !props.superscript);
    }

    #[test]
    fn test_text_align() {
        let para = |s| resolve_style(Some(s), ContainerKind::Paragraph).unwrap();
        assert_eq!(para("text-align:center").text_alignment, TextAlignment::Center);
        assert_eq!(para("text-align: inherit").text_alignment, TextAlignment::Inherit);
        assert_eq!(para("text-align: start").text_alignment, TextAlignment::Unset);
    }

    #[test]
    fn test_page_breaks() {
        let props = resolve_style(
            Some("page-break-before: always; page-break-after: auto"),
            ContainerKind::Paragraph,
        )
        .unwrap();
        assert!(props.page_break_before);
        assert!(!props.page_break_after);
    }

    #[test]
    fn test_colour_and_name() {
        let props = span("color: #ff0000; name: Heading Accent");
        assert_eq!(props.colour, Some(Colour { r: 0xff, g: 0, b: 0 }));
        assert_eq!(props.style_name.as_deref(), Some("Heading Accent"));

        let props = span("color: not-a-colour");
        assert_eq!(props.colour, None);
        assert_eq!(props.style_name, None);
    }

    #[test]
    fn test_resolve_keeps_kind() {
        let props = resolve_style(Some("font-style: italic"), ContainerKind::Heading).unwrap();
        assert_eq!(props.kind, ContainerKind::Heading);
    }
}
