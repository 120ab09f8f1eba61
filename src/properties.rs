//! Typed formatting properties attached to structural start events.

use std::fmt;

/// The structural role played by a styled block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// `<p>`
    Paragraph,
    /// `<h1>` to `<h6>`
    Heading,
    /// `<ul>` or `<ol>`
    List,
    /// `<li>`
    ListItem,
    /// `<span>` and the inline formatting tags
    Span,
    /// `<table>`
    Table,
    /// `<tr>`
    TableRow,
    /// `<td>`
    TableCell,
}

/// Horizontal alignment of a block.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    /// `text-align: left`
    Left,
    /// `text-align: center`
    Center,
    /// `text-align: right`
    Right,
    /// `text-align: justify`
    Justify,
    /// `text-align: inherit`
    Inherit,
    /// No alignment was declared.
    #[default]
    Unset,
}

impl TextAlignment {
    /// Match a `text-align` value exactly.  Returns `None` for anything
    /// outside the supported keywords.
    pub fn from_css(value: &str) -> Option<TextAlignment> {
        match value {
            "left" => Some(TextAlignment::Left),
            "center" => Some(TextAlignment::Center),
            "right" => Some(TextAlignment::Right),
            "justify" => Some(TextAlignment::Justify),
            "inherit" => Some(TextAlignment::Inherit),
            _ => None,
        }
    }

    /// The CSS keyword for this alignment, or `None` when unset.
    pub fn as_css(self) -> Option<&'static str> {
        match self {
            TextAlignment::Left => Some("left"),
            TextAlignment::Center => Some("center"),
            TextAlignment::Right => Some("right"),
            TextAlignment::Justify => Some("justify"),
            TextAlignment::Inherit => Some("inherit"),
            TextAlignment::Unset => None,
        }
    }
}

/// An RGB colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Colour {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Formatting resolved from an inline `style` attribute.
///
/// Every flag is always assigned by the resolver; a block with no style
/// declarations at all gets no `StyleProperties`, and backends should then
/// fall back to their structural defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleProperties {
    /// Which kind of container these properties belong to.
    pub kind: ContainerKind,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
    /// Struck-out text
    pub strike: bool,
    /// Subscript
    pub subscript: bool,
    /// Superscript
    pub superscript: bool,
    /// Force a page break before the block.
    pub page_break_before: bool,
    /// Force a page break after the block.
    pub page_break_after: bool,
    /// Horizontal alignment.
    pub text_alignment: TextAlignment,
    /// Foreground colour, if one was declared and understood.
    pub colour: Option<Colour>,
    /// Name of a predefined style the backend should apply.
    pub style_name: Option<String>,
}

impl StyleProperties {
    /// A record for `kind` with every field at its default.
    pub fn new(kind: ContainerKind) -> StyleProperties {
        StyleProperties {
            kind,
            bold: false,
            italic: false,
            underline: false,
            strike: false,
            subscript: false,
            superscript: false,
            page_break_before: false,
            page_break_after: false,
            text_alignment: TextAlignment::Unset,
            colour: None,
            style_name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Colour, ContainerKind, StyleProperties, TextAlignment};

    #[test]
    fn test_alignment_keywords() {
        assert_eq!(TextAlignment::from_css("justify"), Some(TextAlignment::Justify));
        assert_eq!(TextAlignment::from_css("Center"), None);
        assert_eq!(TextAlignment::Unset.as_css(), None);
        assert_eq!(TextAlignment::Right.as_css(), Some("right"));
    }

    #[test]
    fn test_colour_display() {
        assert_eq!(Colour { r: 0xff, g: 0x0a, b: 0 }.to_string(), "#ff0a00");
    }

    #[test]
    fn test_new_is_all_defaults() {
        let props = StyleProperties::new(ContainerKind::TableCell);
        assert_eq!(props.kind, ContainerKind::TableCell);
        assert!(!props.bold && !props.subscript && !props.page_break_after);
        assert_eq!(props.text_alignment, TextAlignment::Unset);
        assert_eq!(props.colour, None);
        assert_eq!(props.style_name, None);
    }
}
