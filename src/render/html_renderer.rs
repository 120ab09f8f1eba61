//! A [`DocumentHandler`] which writes the events back out as an HTML
//! fragment.  Useful for tests and for checking what a backend will see.

use std::io::{self, Write};

use super::DocumentHandler;
use crate::properties::StyleProperties;

/// Writes an HTML fragment to `W`.
///
/// Styled start tags carry a `style` attribute re-serialised from their
/// [`StyleProperties`], so `<b>` comes out as
/// `<span style="font-weight: bold">`.
#[derive(Debug)]
pub struct HtmlFragmentRenderer<W: Write> {
    out: W,
}

impl<W: Write> HtmlFragmentRenderer<W> {
    /// Create a renderer writing to `out`.
    pub fn new(out: W) -> HtmlFragmentRenderer<W> {
        HtmlFragmentRenderer { out }
    }

    /// Return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn start_tag(&mut self, name: &str, properties: Option<StyleProperties>) -> io::Result<()> {
        match properties.as_ref().map(style_attribute) {
            Some(style) if !style.is_empty() => {
                write!(self.out, "<{} style=\"{}\">", name, escape(&style, true))
            }
            _ => write!(self.out, "<{}>", name),
        }
    }

    fn end_tag(&mut self, name: &str) -> io::Result<()> {
        write!(self.out, "</{}>", name)
    }
}

impl HtmlFragmentRenderer<Vec<u8>> {
    /// Convert the written fragment into a `String`.
    pub fn into_string(self) -> String {
        match String::from_utf8(self.out) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }
}

impl Default for HtmlFragmentRenderer<Vec<u8>> {
    fn default() -> Self {
        HtmlFragmentRenderer::new(Vec::new())
    }
}

/// Serialise properties back into CSS declarations, in a fixed order.
pub fn style_attribute(props: &StyleProperties) -> String {
    let mut decls: Vec<String> = Vec::new();
    if props.bold {
        decls.push("font-weight: bold".into());
    }
    if props.italic {
        decls.push("font-style: italic".into());
    }
    let decoration: Vec<&str> = [(props.underline, "underline"), (props.strike, "line-through")]
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, name)| *name)
        .collect();
    if !decoration.is_empty() {
        decls.push(format!("text-decoration: {}", decoration.join(" ")));
    }
    if props.subscript {
        decls.push("vertical-align: sub".into());
    } else if props.superscript {
        decls.push("vertical-align: super".into());
    }
    if let Some(align) = props.text_alignment.as_css() {
        decls.push(format!("text-align: {}", align));
    }
    if props.page_break_before {
        decls.push("page-break-before: always".into());
    }
    if props.page_break_after {
        decls.push("page-break-after: always".into());
    }
    if let Some(colour) = props.colour {
        decls.push(format!("color: {}", colour));
    }
    if let Some(name) = &props.style_name {
        decls.push(format!("name: {}", name));
    }
    decls.join("; ")
}

fn escape(text: &str, attribute: bool) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' if attribute => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}

impl<W: Write> DocumentHandler for HtmlFragmentRenderer<W> {
    fn end_document(&mut self) -> io::Result<()> {
        self.out.flush()
    }
    fn start_paragraph(&mut self, properties: Option<StyleProperties>) -> io::Result<()> {
        self.start_tag("p", properties)
    }
    fn end_paragraph(&mut self) -> io::Result<()> {
        self.end_tag("p")
    }
    fn start_heading(
        &mut self,
        level: usize,
        properties: Option<StyleProperties>,
    ) -> io::Result<()> {
        self.start_tag(&format!("h{}", level), properties)
    }
    fn end_heading(&mut self, level: usize) -> io::Result<()> {
        self.end_tag(&format!("h{}", level))
    }
    fn start_list(&mut self, ordered: bool, properties: Option<StyleProperties>) -> io::Result<()> {
        self.start_tag(if ordered { "ol" } else { "ul" }, properties)
    }
    fn end_list(&mut self, ordered: bool) -> io::Result<()> {
        self.end_tag(if ordered { "ol" } else { "ul" })
    }
    fn start_list_item(&mut self, properties: Option<StyleProperties>) -> io::Result<()> {
        self.start_tag("li", properties)
    }
    fn end_list_item(&mut self) -> io::Result<()> {
        self.end_tag("li")
    }
    fn start_span(&mut self, properties: Option<StyleProperties>) -> io::Result<()> {
        self.start_tag("span", properties)
    }
    fn end_span(&mut self) -> io::Result<()> {
        self.end_tag("span")
    }
    fn start_table(&mut self, properties: Option<StyleProperties>) -> io::Result<()> {
        self.start_tag("table", properties)
    }
    fn end_table(&mut self) -> io::Result<()> {
        self.end_tag("table")
    }
    fn start_table_row(&mut self, properties: Option<StyleProperties>) -> io::Result<()> {
        self.start_tag("tr", properties)
    }
    fn end_table_row(&mut self) -> io::Result<()> {
        self.end_tag("tr")
    }
    fn start_table_cell(&mut self, properties: Option<StyleProperties>) -> io::Result<()> {
        self.start_tag("td", properties)
    }
    fn end_table_cell(&mut self) -> io::Result<()> {
        self.end_tag("td")
    }
    fn handle_reference(&mut self, href: &str, label: &str) -> io::Result<()> {
        write!(
            self.out,
            "<a href=\"{}\">{}</a>",
            escape(href, true),
            escape(label, false)
        )
    }
    fn handle_image(&mut self, src: &str, alt: &str) -> io::Result<()> {
        write!(
            self.out,
            "<img src=\"{}\" alt=\"{}\"/>",
            escape(src, true),
            escape(alt, true)
        )
    }
    fn handle_line_break(&mut self) -> io::Result<()> {
        self.out.write_all(b"<br/>")
    }
    fn handle_text(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(escape(text, false).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::{style_attribute, HtmlFragmentRenderer};
    use crate::properties::{Colour, ContainerKind, StyleProperties, TextAlignment};
    use crate::render::DocumentHandler;

    #[test]
    fn test_style_attribute_order() {
        let mut props = StyleProperties::new(ContainerKind::Span);
        props.bold = true;
        props.underline = true;
        props.strike = true;
        props.text_alignment = TextAlignment::Right;
        props.colour = Some(Colour { r: 0, g: 0x80, b: 0 });
        assert_eq!(
            style_attribute(&props),
            "font-weight: bold; text-decoration: underline line-through; \
             text-align: right; color: #008000"
        );
        assert_eq!(style_attribute(&StyleProperties::new(ContainerKind::Span)), "");
    }

    #[test]
    fn test_writes_fragment() {
        let mut r = HtmlFragmentRenderer::default();
        let mut bold = StyleProperties::new(ContainerKind::Span);
        bold.bold = true;
        r.start_paragraph(None).unwrap();
        r.start_span(Some(bold)).unwrap();
        r.handle_text("a < b & \"c\"").unwrap();
        r.end_span().unwrap();
        r.handle_line_break().unwrap();
        r.handle_reference("x?a=1&b=2", "link").unwrap();
        r.end_paragraph().unwrap();
        assert_eq!(
            r.into_string(),
            "<p><span style=\"font-weight: bold\">a &lt; b &amp; \"c\"</span><br/>\
             <a href=\"x?a=1&amp;b=2\">link</a></p>"
        );
    }

    #[test]
    fn test_unstyled_properties_write_plain_tag() {
        let mut r = HtmlFragmentRenderer::default();
        r.start_table_cell(Some(StyleProperties::new(ContainerKind::TableCell)))
            .unwrap();
        r.end_table_cell().unwrap();
        assert_eq!(r.into_string(), "<td></td>");
    }
}
