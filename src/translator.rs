//! Translation of tag and character notifications into structural events.
//!
//! The [`Translator`] is driven by a tokenizer (see [`crate::from_read`] for
//! the html5ever-based driver) and pushes [`StructuralEvent`]s into a
//! [`DocumentHandler`] as it goes.  Apart from the stack of open containers
//! the only state it keeps is a [`CaptureState`]: either normal, collecting
//! the label of an open anchor, or dropping the whitespace which follows a
//! list item.

use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;
use std::mem;

use crate::properties::{ContainerKind, StyleProperties};
use crate::render::events::StructuralEvent;
use crate::render::DocumentHandler;
use crate::style::resolve_style;
use crate::{Error, Result};

/// Lookup of attribute values by name.
pub trait Attributes {
    /// The value of the attribute `name`, if present.
    fn get_attr(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> Attributes for HashMap<String, String, S> {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl Attributes for [(&str, &str)] {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }
}

impl<const N: usize> Attributes for [(&str, &str); N] {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self[..].get_attr(name)
    }
}

impl Attributes for [html5ever::Attribute] {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|attr| &*attr.name.local == name)
            .map(|attr| &*attr.value)
    }
}

/// An open structural container, as tracked on the nesting stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Container {
    /// `<p>`
    Paragraph,
    /// `<hN>`
    Heading(usize),
    /// `<ul>` / `<ol>`
    List {
        /// True for `<ol>`
        ordered: bool,
    },
    /// `<li>`
    ListItem,
    /// `<span>` or one of the inline formatting tags.
    Span,
    /// `<table>`
    Table,
    /// `<tr>`
    TableRow,
    /// `<td>`
    TableCell,
}

impl Container {
    /// The kind of properties resolved for this container.
    pub fn kind(self) -> ContainerKind {
        match self {
            Container::Paragraph => ContainerKind::Paragraph,
            Container::Heading(_) => ContainerKind::Heading,
            Container::List { .. } => ContainerKind::List,
            Container::ListItem => ContainerKind::ListItem,
            Container::Span => ContainerKind::Span,
            Container::Table => ContainerKind::Table,
            Container::TableRow => ContainerKind::TableRow,
            Container::TableCell => ContainerKind::TableCell,
        }
    }

    fn start_event(self, properties: Option<StyleProperties>) -> StructuralEvent {
        match self {
            Container::Paragraph => StructuralEvent::StartParagraph(properties),
            Container::Heading(level) => StructuralEvent::StartHeading { level, properties },
            Container::List { ordered } => StructuralEvent::StartList {
                ordered,
                properties,
            },
            Container::ListItem => StructuralEvent::StartListItem(properties),
            Container::Span => StructuralEvent::StartSpan(properties),
            Container::Table => StructuralEvent::StartTable(properties),
            Container::TableRow => StructuralEvent::StartTableRow(properties),
            Container::TableCell => StructuralEvent::StartTableCell(properties),
        }
    }

    fn end_event(self) -> StructuralEvent {
        match self {
            Container::Paragraph => StructuralEvent::EndParagraph,
            Container::Heading(level) => StructuralEvent::EndHeading { level },
            Container::List { ordered } => StructuralEvent::EndList { ordered },
            Container::ListItem => StructuralEvent::EndListItem,
            Container::Span => StructuralEvent::EndSpan,
            Container::Table => StructuralEvent::EndTable,
            Container::TableRow => StructuralEvent::EndTableRow,
            Container::TableCell => StructuralEvent::EndTableCell,
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Paragraph => f.write_str("p"),
            Container::Heading(level) => write!(f, "h{}", level),
            Container::List { ordered: true } => f.write_str("ol"),
            Container::List { ordered: false } => f.write_str("ul"),
            Container::ListItem => f.write_str("li"),
            Container::Span => f.write_str("span"),
            Container::Table => f.write_str("table"),
            Container::TableRow => f.write_str("tr"),
            Container::TableCell => f.write_str("td"),
        }
    }
}

/// Formatting forced on by an inline tag, whatever its style says.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Flag {
    Bold,
    Italic,
    Underline,
    Strike,
    Subscript,
    Superscript,
}

impl Flag {
    fn force(self, props: &mut StyleProperties) {
        match self {
            Flag::Bold => props.bold = true,
            Flag::Italic => props.italic = true,
            Flag::Underline => props.underline = true,
            Flag::Strike => props.strike = true,
            Flag::Subscript => props.subscript = true,
            Flag::Superscript => props.superscript = true,
        }
    }
}

/// The recognised tag vocabulary.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Element {
    Container(Container, Option<Flag>),
    Anchor,
    Image,
    LineBreak,
}

impl Element {
    fn from_name(name: &str) -> Option<Element> {
        use Container::*;
        let elt = match name {
            "strong" | "b" => Element::Container(Span, Some(Flag::Bold)),
            "em" | "i" => Element::Container(Span, Some(Flag::Italic)),
            "u" => Element::Container(Span, Some(Flag::Underline)),
            "strike" | "s" => Element::Container(Span, Some(Flag::Strike)),
            "sub" => Element::Container(Span, Some(Flag::Subscript)),
            "sup" => Element::Container(Span, Some(Flag::Superscript)),
            "span" => Element::Container(Span, None),
            "ul" => Element::Container(List { ordered: false }, None),
            "ol" => Element::Container(List { ordered: true }, None),
            "li" => Element::Container(ListItem, None),
            "p" => Element::Container(Paragraph, None),
            "h1" => Element::Container(Heading(1), None),
            "h2" => Element::Container(Heading(2), None),
            "h3" => Element::Container(Heading(3), None),
            "h4" => Element::Container(Heading(4), None),
            "h5" => Element::Container(Heading(5), None),
            "h6" => Element::Container(Heading(6), None),
            "table" => Element::Container(Table, None),
            "tr" => Element::Container(TableRow, None),
            "td" => Element::Container(TableCell, None),
            "a" => Element::Anchor,
            "img" => Element::Image,
            "br" => Element::LineBreak,
            _ => return None,
        };
        Some(elt)
    }
}

/// What happens to character data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CaptureState {
    /// Characters are emitted as text.
    #[default]
    Normal,
    /// Inside `<a href=...>`; characters become the link label.
    InAnchor {
        /// Target of the open anchor.
        href: String,
        /// Label collected so far.
        label: String,
    },
    /// After `</li>` (or `<ul>`/`<ol>`); characters are dropped until the
    /// next tag.
    Suppressing,
}

/// An entry on the nesting stack: the container and the tag which opened
/// it, so that `<b>` is only closed by `</b>` under strict nesting.
#[derive(Clone, Debug, PartialEq, Eq)]
struct OpenTag {
    container: Container,
    tag: String,
}

/// Converts a stream of tag/character notifications for one document into
/// calls on a [`DocumentHandler`].
pub struct Translator<H: DocumentHandler> {
    handler: H,
    state: CaptureState,
    open: Vec<OpenTag>,
    strict_nesting: bool,
    failed: bool,
}

impl<H: DocumentHandler> Translator<H> {
    /// Create a translator with strict nesting checks.
    pub fn new(handler: H) -> Translator<H> {
        Translator {
            handler,
            state: CaptureState::Normal,
            open: Vec::new(),
            strict_nesting: true,
            failed: false,
        }
    }

    /// Choose whether an unmatched close is an error (the default) or
    /// silently ignored, with unclosed containers closed at the end.
    pub fn with_strict_nesting(mut self, strict: bool) -> Translator<H> {
        self.strict_nesting = strict;
        self
    }

    /// The backend.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// The backend, mutably.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Consume the translator and return the backend.
    pub fn into_handler(self) -> H {
        self.handler
    }

    /// The current character capture state.
    pub fn state(&self) -> &CaptureState {
        &self.state
    }

    /// The containers currently open, outermost first.
    pub fn open_containers(&self) -> impl Iterator<Item = Container> + '_ {
        self.open.iter().map(|open| open.container)
    }

    /// Returns true once any operation has failed.
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Forget all per-document state, including a previous failure.
    pub fn reset(&mut self) {
        self.state = CaptureState::Normal;
        self.open.clear();
        self.failed = false;
    }

    fn check_live(&self) -> Result<()> {
        if self.failed {
            Err(Error::Aborted)
        } else {
            Ok(())
        }
    }

    fn fail<T>(&mut self, err: Error) -> Result<T> {
        self.failed = true;
        Err(err)
    }

    fn emit(&mut self, event: StructuralEvent) -> Result<()> {
        html_trace!("emit {:?}", event);
        match event.dispatch(&mut self.handler) {
            Ok(()) => Ok(()),
            Err(e) => self.fail(Error::Backend(e)),
        }
    }

    /// Begin a document.
    pub fn start_document(&mut self) -> Result<()> {
        self.check_live()?;
        self.emit(StructuralEvent::StartDocument)
    }

    /// Finish a document.
    ///
    /// With strict nesting any container or anchor still open is an error;
    /// otherwise they are closed here, innermost first.
    pub fn end_document(&mut self) -> Result<()> {
        self.check_live()?;
        let anchor = matches!(self.state, CaptureState::InAnchor { .. });
        if self.strict_nesting && (anchor || !self.open.is_empty()) {
            let containers = self.open.len();
            return self.fail(Error::Unclosed { containers, anchor });
        }
        if let CaptureState::InAnchor { href, label } = mem::take(&mut self.state) {
            html_trace!("Flushing unterminated anchor {:?}", href);
            self.emit(StructuralEvent::Reference { href, label })?;
        }
        while let Some(OpenTag { container, tag: _tag }) = self.open.pop() {
            html_trace!("Closing unterminated {} opened by <{}>", container, _tag);
            self.emit(container.end_event())?;
        }
        self.state = CaptureState::Normal;
        self.emit(StructuralEvent::EndDocument)
    }

    /// Enter suppression unless an anchor is collecting text.
    fn suppress_characters(&mut self) {
        if self.state == CaptureState::Normal {
            self.state = CaptureState::Suppressing;
        }
    }

    fn clear_suppression(&mut self) {
        if self.state == CaptureState::Suppressing {
            self.state = CaptureState::Normal;
        }
    }

    /// Handle an opening tag.
    pub fn tag_open<A: Attributes + ?Sized>(&mut self, name: &str, attrs: &A) -> Result<()> {
        self.check_live()?;
        self.clear_suppression();

        let element = match Element::from_name(name) {
            Some(elt) => elt,
            None => {
                html_trace!("Ignoring unknown tag <{}>", name);
                return Ok(());
            }
        };

        match element {
            Element::Container(container, flag) => {
                let mut props = resolve_style(attrs.get_attr("style"), container.kind());
                if let Some(flag) = flag {
                    let props = props.get_or_insert_with(|| StyleProperties::new(container.kind()));
                    flag.force(props);
                }
                self.open.push(OpenTag {
                    container,
                    tag: name.to_string(),
                });
                self.emit(container.start_event(props))?;
                if let Container::List { .. } = container {
                    self.suppress_characters();
                }
                Ok(())
            }
            Element::Anchor => {
                let new_href = match attrs.get_attr("href") {
                    Some(href) => href.to_string(),
                    None => {
                        html_trace!("Anchor without href treated as plain text");
                        return Ok(());
                    }
                };
                if let CaptureState::InAnchor { href, .. } = &mut self.state {
                    html_trace!("Nested anchor replaces {:?}", href);
                    *href = new_href;
                } else {
                    self.state = CaptureState::InAnchor {
                        href: new_href,
                        label: String::new(),
                    };
                }
                Ok(())
            }
            Element::Image => {
                let src = attrs.get_attr("src").unwrap_or_default().to_string();
                let alt = attrs.get_attr("alt").unwrap_or_default().to_string();
                self.emit(StructuralEvent::Image { src, alt })
            }
            // Line breaks are emitted on close.
            Element::LineBreak => Ok(()),
        }
    }

    /// Handle a closing tag.
    pub fn tag_close(&mut self, name: &str) -> Result<()> {
        self.check_live()?;
        self.clear_suppression();

        let element = match Element::from_name(name) {
            Some(elt) => elt,
            None => {
                html_trace!("Ignoring unknown close </{}>", name);
                return Ok(());
            }
        };

        match element {
            Element::Container(container, _) => {
                let matched = match self.open.last() {
                    // Lenient nesting only needs the same kind of container.
                    Some(top) if !self.strict_nesting => top.container == container,
                    Some(top) => top.container == container && top.tag == name,
                    None => false,
                };
                if !matched {
                    let open = self.open.last().map(|top| top.container);
                    if self.strict_nesting {
                        return self.fail(Error::UnbalancedClose {
                            tag: name.to_string(),
                            open,
                        });
                    }
                    html_trace!("Ignoring </{}> with {:?} open", name, open);
                    return Ok(());
                }
                self.open.pop();
                self.emit(container.end_event())?;
                if container == Container::ListItem {
                    self.suppress_characters();
                }
                Ok(())
            }
            Element::Anchor => match mem::take(&mut self.state) {
                CaptureState::InAnchor { href, label } => {
                    self.emit(StructuralEvent::Reference { href, label })
                }
                other => {
                    self.state = other;
                    Ok(())
                }
            },
            Element::LineBreak => self.emit(StructuralEvent::LineBreak),
            Element::Image => Ok(()),
        }
    }

    /// Handle a run of character data.
    pub fn characters(&mut self, text: &str) -> Result<()> {
        self.check_live()?;
        match &mut self.state {
            CaptureState::InAnchor { label, .. } => {
                label.push_str(text);
                Ok(())
            }
            CaptureState::Suppressing => {
                html_trace!("Dropping characters {:?}", text);
                Ok(())
            }
            CaptureState::Normal => self.emit(StructuralEvent::Text(text.to_string())),
        }
    }
}

impl<H: DocumentHandler + fmt::Debug> fmt::Debug for Translator<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("handler", &self.handler)
            .field("state", &self.state)
            .field("open", &self.open)
            .field("strict_nesting", &self.strict_nesting)
            .field("failed", &self.failed)
            .finish()
    }
}
