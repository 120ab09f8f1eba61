//! Module containing the `DocumentHandler` interface for constructing a
//! particular document output.

pub mod events;
pub mod html_renderer;

use std::io;

use crate::properties::StyleProperties;

/// A type which is a backend for markup to document rendering.
///
/// The translator calls these in document order, and always pairs each
/// `start_*` with exactly one matching `end_*` in properly nested order.
/// References, images and line breaks are single calls with no pairing.
/// Properties are only ever passed to the `start_*` methods; `None` means
/// "use the structural defaults".
///
/// Any error returned stops the translation of the current document and
/// no further methods are called for it.
pub trait DocumentHandler {
    /// Called once before anything else.
    fn start_document(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Called once after everything else.
    fn end_document(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Start a paragraph.
    fn start_paragraph(&mut self, properties: Option<StyleProperties>) -> io::Result<()>;

    /// Finish a paragraph.
    fn end_paragraph(&mut self) -> io::Result<()>;

    /// Start a heading of `level` (1 to 6).
    fn start_heading(&mut self, level: usize, properties: Option<StyleProperties>)
        -> io::Result<()>;

    /// Finish a heading of `level`.
    fn end_heading(&mut self, level: usize) -> io::Result<()>;

    /// Start an ordered or unordered list.
    fn start_list(&mut self, ordered: bool, properties: Option<StyleProperties>) -> io::Result<()>;

    /// Finish a list started with the same `ordered` flag.
    fn end_list(&mut self, ordered: bool) -> io::Result<()>;

    /// Start a list item.
    fn start_list_item(&mut self, properties: Option<StyleProperties>) -> io::Result<()>;

    /// Finish a list item.
    fn end_list_item(&mut self) -> io::Result<()>;

    /// Start an inline span.
    fn start_span(&mut self, properties: Option<StyleProperties>) -> io::Result<()>;

    /// Finish an inline span.
    fn end_span(&mut self) -> io::Result<()>;

    /// Start a table.
    fn start_table(&mut self, properties: Option<StyleProperties>) -> io::Result<()>;

    /// Finish a table.
    fn end_table(&mut self) -> io::Result<()>;

    /// Start a table row.
    fn start_table_row(&mut self, properties: Option<StyleProperties>) -> io::Result<()>;

    /// Finish a table row.
    fn end_table_row(&mut self) -> io::Result<()>;

    /// Start a table cell.
    fn start_table_cell(&mut self, properties: Option<StyleProperties>) -> io::Result<()>;

    /// Finish a table cell.
    fn end_table_cell(&mut self) -> io::Result<()>;

    /// Add a hyperlink with its label text.
    fn handle_reference(&mut self, href: &str, label: &str) -> io::Result<()>;

    /// Add an image
    fn handle_image(&mut self, src: &str, alt: &str) -> io::Result<()>;

    /// Add a line break.
    fn handle_line_break(&mut self) -> io::Result<()>;

    /// Add some text to the current container.
    fn handle_text(&mut self, text: &str) -> io::Result<()>;
}

impl<H: DocumentHandler + ?Sized> DocumentHandler for &mut H {
    fn start_document(&mut self) -> io::Result<()> {
        (**self).start_document()
    }
    fn end_document(&mut self) -> io::Result<()> {
        (**self).end_document()
    }
    fn start_paragraph(&mut self, properties: Option<StyleProperties>) -> io::Result<()> {
        (**self).start_paragraph(properties)
    }
    fn end_paragraph(&mut self) -> io::Result<()> {
        (**self).end_paragraph()
    }
    fn start_heading(
        &mut self,
        level: usize,
        properties: Option<StyleProperties>,
    ) -> io::Result<()> {
        (**self).start_heading(level, properties)
    }
    fn end_heading(&mut self, level: usize) -> io::Result<()> {
        (**self).end_heading(level)
    }
    fn start_list(&mut self, ordered: bool, properties: Option<StyleProperties>) -> io::Result<()> {
        (**self).start_list(ordered, properties)
    }
    fn end_list(&mut self, ordered: bool) -> io::Result<()> {
        (**self).end_list(ordered)
    }
    fn start_list_item(&mut self, properties: Option<StyleProperties>) -> io::Result<()> {
        (**self).start_list_item(properties)
    }
    fn end_list_item(&mut self) -> io::Result<()> {
        (**self).end_list_item()
    }
    fn start_span(&mut self, properties: Option<StyleProperties>) -> io::Result<()> {
        (**self).start_span(properties)
    }
    fn end_span(&mut self) -> io::Result<()> {
        (**self).end_span()
    }
    fn start_table(&mut self, properties: Option<StyleProperties>) -> io::Result<()> {
        (**self).start_table(properties)
    }
    fn end_table(&mut self) -> io::Result<()> {
        (**self).end_table()
    }
    fn start_table_row(&mut self, properties: Option<StyleProperties>) -> io::Result<()> {
        (**self).start_table_row(properties)
    }
    fn end_table_row(&mut self) -> io::Result<()> {
        (**self).end_table_row()
    }
    fn start_table_cell(&mut self, properties: Option<StyleProperties>) -> io::Result<()> {
        (**self).start_table_cell(properties)
    }
    fn end_table_cell(&mut self) -> io::Result<()> {
        (**self).end_table_cell()
    }
    fn handle_reference(&mut self, href: &str, label: &str) -> io::Result<()> {
        (**self).handle_reference(href, label)
    }
    fn handle_image(&mut self, src: &str, alt: &str) -> io::Result<()> {
        (**self).handle_image(src, alt)
    }
    fn handle_line_break(&mut self) -> io::Result<()> {
        (**self).handle_line_break()
    }
    fn handle_text(&mut self, text: &str) -> io::Result<()> {
        (**self).handle_text(text)
    }
}
