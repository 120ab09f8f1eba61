//! Structural events as values, and a backend which records them.

use std::io;

use super::DocumentHandler;
use crate::properties::StyleProperties;

/// A single notification sent to a [`DocumentHandler`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StructuralEvent {
    /// Beginning of the document.
    StartDocument,
    /// End of the document.
    EndDocument,
    /// `<p>`
    StartParagraph(Option<StyleProperties>),
    /// `</p>`
    EndParagraph,
    /// `<hN>`
    StartHeading {
        /// Heading level, 1 to 6.
        level: usize,
        /// Resolved style.
        properties: Option<StyleProperties>,
    },
    /// `</hN>`
    EndHeading {
        /// Heading level, 1 to 6.
        level: usize,
    },
    /// `<ul>` or `<ol>`
    StartList {
        /// True for `<ol>`.
        ordered: bool,
        /// Resolved style.
        properties: Option<StyleProperties>,
    },
    /// `</ul>` or `</ol>`
    EndList {
        /// True for `</ol>`.
        ordered: bool,
    },
    /// `<li>`
    StartListItem(Option<StyleProperties>),
    /// `</li>`
    EndListItem,
    /// `<span>` or an inline formatting tag.
    StartSpan(Option<StyleProperties>),
    /// End of a span.
    EndSpan,
    /// `<table>`
    StartTable(Option<StyleProperties>),
    /// `</table>`
    EndTable,
    /// `<tr>`
    StartTableRow(Option<StyleProperties>),
    /// `</tr>`
    EndTableRow,
    /// `<td>`
    StartTableCell(Option<StyleProperties>),
    /// `</td>`
    EndTableCell,
    /// A complete hyperlink.
    Reference {
        /// Link target.
        href: String,
        /// Text collected between `<a>` and `</a>`.
        label: String,
    },
    /// An image.
    Image {
        /// Image source.
        src: String,
        /// Alternative text (may be empty).
        alt: String,
    },
    /// `<br>`
    LineBreak,
    /// A run of character data.
    Text(String),
}

impl StructuralEvent {
    /// Deliver this event to the matching method of `handler`.
    pub fn dispatch<H: DocumentHandler + ?Sized>(self, handler: &mut H) -> io::Result<()> {
        use StructuralEvent::*;
        match self {
            StartDocument => handler.start_document(),
            EndDocument => handler.end_document(),
            StartParagraph(props) => handler.start_paragraph(props),
            EndParagraph => handler.end_paragraph(),
            StartHeading { level, properties } => handler.start_heading(level, properties),
            EndHeading { level } => handler.end_heading(level),
            StartList {
                ordered,
                properties,
            } => handler.start_list(ordered, properties),
            EndList { ordered } => handler.end_list(ordered),
            StartListItem(props) => handler.start_list_item(props),
            EndListItem => handler.end_list_item(),
            StartSpan(props) => handler.start_span(props),
            EndSpan => handler.end_span(),
            StartTable(props) => handler.start_table(props),
            EndTable => handler.end_table(),
            StartTableRow(props) => handler.start_table_row(props),
            EndTableRow => handler.end_table_row(),
            StartTableCell(props) => handler.start_table_cell(props),
            EndTableCell => handler.end_table_cell(),
            Reference { href, label } => handler.handle_reference(&href, &label),
            Image { src, alt } => handler.handle_image(&src, &alt),
            LineBreak => handler.handle_line_break(),
            Text(text) => handler.handle_text(&text),
        }
    }

    /// Returns true for events which open a container.
    pub fn is_start(&self) -> bool {
        use StructuralEvent::*;
        matches!(
            self,
            StartDocument
                | StartParagraph(_)
                | StartHeading { .. }
                | StartList { .. }
                | StartListItem(_)
                | StartSpan(_)
                | StartTable(_)
                | StartTableRow(_)
                | StartTableCell(_)
        )
    }

    /// Returns true for events which close a container.
    pub fn is_end(&self) -> bool {
        use StructuralEvent::*;
        matches!(
            self,
            EndDocument
                | EndParagraph
                | EndHeading { .. }
                | EndList { .. }
                | EndListItem
                | EndSpan
                | EndTable
                | EndTableRow
                | EndTableCell
        )
    }
}

/// A [`DocumentHandler`] which records every call as a [`StructuralEvent`].
#[derive(Clone, Debug, Default)]
pub struct EventCollector {
    events: Vec<StructuralEvent>,
}

impl EventCollector {
    /// Create an empty collector.
    pub fn new() -> EventCollector {
        Default::default()
    }

    /// The events recorded so far.
    pub fn events(&self) -> &[StructuralEvent] {
        &self.events
    }

    /// Consume the collector and return the recorded events.
    pub fn into_events(self) -> Vec<StructuralEvent> {
        self.events
    }

    fn push(&mut self, event: StructuralEvent) -> io::Result<()> {
        self.events.push(event);
        Ok(())
    }
}

impl DocumentHandler for EventCollector {
    fn start_document(&mut self) -> io::Result<()> {
        self.push(StructuralEvent::StartDocument)
    }
    fn end_document(&mut self) -> io::Result<()> {
        self.push(StructuralEvent::EndDocument)
    }
    fn start_paragraph(&mut self, properties: Option<StyleProperties>) -> io::Result<()> {
        self.push(StructuralEvent::StartParagraph(properties))
    }
    fn end_paragraph(&mut self) -> io::Result<()> {
        self.push(StructuralEvent::EndParagraph)
    }
    fn start_heading(
        &mut self,
        level: usize,
        properties: Option<StyleProperties>,
    ) -> io::Result<()> {
        self.push(StructuralEvent::StartHeading { level, properties })
    }
    fn end_heading(&mut self, level: usize) -> io::Result<()> {
        self.push(StructuralEvent::EndHeading { level })
    }
    fn start_list(&mut self, ordered: bool, properties: Option<StyleProperties>) -> io::Result<()> {
        self.push(StructuralEvent::StartList {
            ordered,
            properties,
        })
    }
    fn end_list(&mut self, ordered: bool) -> io::Result<()> {
        self.push(StructuralEvent::EndList { ordered })
    }
    fn start_list_item(&mut self, properties: Option<StyleProperties>) -> io::Result<()> {
        self.push(StructuralEvent::StartListItem(properties))
    }
    fn end_list_item(&mut self) -> io::Result<()> {
        self.push(StructuralEvent::EndListItem)
    }
    fn start_span(&mut self, properties: Option<StyleProperties>) -> io::Result<()> {
        self.push(StructuralEvent::StartSpan(properties))
    }
    fn end_span(&mut self) -> io::Result<()> {
        self.push(StructuralEvent::EndSpan)
    }
    fn start_table(&mut self, properties: Option<StyleProperties>) -> io::Result<()> {
        self.push(StructuralEvent::StartTable(properties))
    }
    fn end_table(&mut self) -> io::Result<()> {
        self.push(StructuralEvent::EndTable)
    }
    fn start_table_row(&mut self, properties: Option<StyleProperties>) -> io::Result<()> {
        self.push(StructuralEvent::StartTableRow(properties))
    }
    fn end_table_row(&mut self) -> io::Result<()> {
        self.push(StructuralEvent::EndTableRow)
    }
    fn start_table_cell(&mut self, properties: Option<StyleProperties>) -> io::Result<()> {
        self.push(StructuralEvent::StartTableCell(properties))
    }
    fn end_table_cell(&mut self) -> io::Result<()> {
        self.push(StructuralEvent::EndTableCell)
    }
    fn handle_reference(&mut self, href: &str, label: &str) -> io::Result<()> {
        self.push(StructuralEvent::Reference {
            href: href.into(),
            label: label.into(),
        })
    }
    fn handle_image(&mut self, src: &str, alt: &str) -> io::Result<()> {
        self.push(StructuralEvent::Image {
            src: src.into(),
            alt: alt.into(),
        })
    }
    fn handle_line_break(&mut self) -> io::Result<()> {
        self.push(StructuralEvent::LineBreak)
    }
    fn handle_text(&mut self, text: &str) -> io::Result<()> {
        self.push(StructuralEvent::Text(text.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::{EventCollector, StructuralEvent};

    #[test]
    fn test_dispatch_round_trips_through_collector() {
        let events = vec![
            StructuralEvent::StartDocument,
            StructuralEvent::StartHeading {
                level: 2,
                properties: None,
            },
            StructuralEvent::Text("x".into()),
            StructuralEvent::EndHeading { level: 2 },
            StructuralEvent::Image {
                src: "a.png".into(),
                alt: String::new(),
            },
            StructuralEvent::EndDocument,
        ];
        let mut collector = EventCollector::new();
        for event in events.clone() {
            event.dispatch(&mut collector).unwrap();
        }
        assert_eq!(collector.into_events(), events);
    }

    #[test]
    fn test_start_end_classification() {
        assert!(StructuralEvent::StartSpan(None).is_start());
        assert!(StructuralEvent::EndList { ordered: true }.is_end());
        assert!(!StructuralEvent::LineBreak.is_start());
        assert!(!StructuralEvent::LineBreak.is_end());
        assert!(!StructuralEvent::Text("t".into()).is_end());
    }
}
