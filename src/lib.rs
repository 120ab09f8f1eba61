//! Convert simple styled HTML into structural document events.
//!
//! This crate reads a constrained subset of HTML (emphasis, lists,
//! paragraphs, headings, links, images, spans and tables, with inline
//! `style` attributes) and turns it into a well-nested stream of calls on a
//! [`DocumentHandler`].  A handler is a backend for some document format;
//! it only ever sees typed events and resolved [`StyleProperties`], never
//! raw tags or CSS text.
//!
//! # Examples
//!
//! ```rust
//! # use html2doc::html_from_str;
//! let html = r#"<p style="text-align:center"><b>Hi</b> there</p>"#;
//! assert_eq!(
//!     html_from_str(html).unwrap(),
//!     r#"<p style="text-align: center"><span style="font-weight: bold">Hi</span> there</p>"#
//! );
//! ```
//!
//! The events themselves can be collected with [`events_from_str`]:
//!
//! ```rust
//! # use html2doc::events_from_str;
//! # use html2doc::render::events::StructuralEvent;
//! let events = events_from_str("<h3>Title</h3>").unwrap();
//! assert_eq!(events[1], StructuralEvent::StartHeading { level: 3, properties: None });
//! ```
//!
//! A demonstration program is included as `html2doc`:
//!
//! ```sh
//! $ cargo run --example html2doc -- --events foo.html
//! [...]
//! ```

#![deny(missing_docs)]

#[macro_use]
extern crate html5ever;

#[macro_use]
mod macros;

pub mod properties;
pub mod render;
pub mod style;
mod tokenizer;
pub mod translator;

pub use properties::{Colour, ContainerKind, StyleProperties, TextAlignment};
pub use render::events::{EventCollector, StructuralEvent};
pub use render::html_renderer::HtmlFragmentRenderer;
pub use render::DocumentHandler;
pub use translator::{Attributes, Container, Translator};

use std::io;

/// Errors from translating a document.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The document handler failed; the rest of the document was abandoned.
    #[error("Rendering backend failed: {0}")]
    Backend(#[source] io::Error),
    /// A closing tag did not match the innermost open container.
    #[error("Unbalanced </{tag}> (innermost open container: {open:?})")]
    UnbalancedClose {
        /// The closing tag name.
        tag: String,
        /// The container which was open, if any.
        open: Option<Container>,
    },
    /// The document ended with containers or a link still open.
    #[error("Document ended with {containers} unclosed container(s){}", open_link_note(.anchor))]
    Unclosed {
        /// Number of containers still open.
        containers: usize,
        /// Whether an anchor was still collecting its label.
        anchor: bool,
    },
    /// The translator had already failed on this document.
    #[error("Translation already aborted")]
    Aborted,
    /// Reading the input failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn open_link_note(anchor: &bool) -> &'static str {
    if *anchor {
        " and an open link"
    } else {
        ""
    }
}

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

pub mod config {
    //! Configure the translation using the `Config` type, which can be
    //! constructed using one of the functions in this module.

    use std::io;

    use crate::render::DocumentHandler;
    use crate::translator::Translator;
    use crate::{tokenizer, Result};

    /// Configure the markup processing.
    #[derive(Clone, Debug)]
    pub struct Config {
        strict_nesting: bool,
    }

    impl Config {
        /// Choose whether mismatched or missing closing tags are errors.
        ///
        /// When false, an unmatched close is ignored and anything still
        /// open at the end of the document is closed automatically, so the
        /// handler still sees balanced events.
        pub fn strict_nesting(mut self, strict: bool) -> Self {
            self.strict_nesting = strict;
            self
        }

        /// Create a translator for `handler` with this configuration, for
        /// driving from a tokenizer of your own.
        pub fn translator<H: DocumentHandler>(&self, handler: H) -> Translator<H> {
            Translator::new(handler).with_strict_nesting(self.strict_nesting)
        }

        /// Translate the markup in `html` into calls on `handler`, and
        /// return the handler.
        pub fn translate_str<H: DocumentHandler>(&self, html: &str, handler: H) -> Result<H> {
            tokenizer::translate(self.translator(handler), html).map(Translator::into_handler)
        }

        /// Reads markup from `input` and translates it into calls on
        /// `handler`, returning the handler.
        pub fn translate_read<R: io::Read, H: DocumentHandler>(
            &self,
            mut input: R,
            handler: H,
        ) -> Result<H> {
            let mut html = String::new();
            input.read_to_string(&mut html)?;
            self.translate_str(&html, handler)
        }
    }

    impl Default for Config {
        fn default() -> Self {
            strict()
        }
    }

    /// Return a Config which rejects badly nested markup.
    pub fn strict() -> Config {
        Config {
            strict_nesting: true,
        }
    }

    /// Return a Config which repairs badly nested markup.
    pub fn lenient() -> Config {
        Config {
            strict_nesting: false,
        }
    }
}

/// Reads markup from `input` and translates it into calls on `handler`,
/// using the default (strict) configuration.
pub fn from_read<R, H>(input: R, handler: H) -> Result<H>
where
    R: io::Read,
    H: DocumentHandler,
{
    config::strict().translate_read(input, handler)
}

/// Translates the markup in `html` into calls on `handler`, using the
/// default (strict) configuration.
pub fn from_str<H: DocumentHandler>(html: &str, handler: H) -> Result<H> {
    config::strict().translate_str(html, handler)
}

/// Translates `html` and returns the events as a `Vec`.
pub fn events_from_str(html: &str) -> Result<Vec<StructuralEvent>> {
    from_str(html, EventCollector::new()).map(EventCollector::into_events)
}

/// Translates `html` and writes it back out as a normalised HTML fragment.
pub fn html_from_str(html: &str) -> Result<String> {
    from_str(html, HtmlFragmentRenderer::default()).map(HtmlFragmentRenderer::into_string)
}
