//! Drive a [`Translator`] from html5ever's streaming tokenizer.

use std::cell::RefCell;

use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use tendril::StrTendril;

use crate::render::DocumentHandler;
use crate::translator::Translator;
use crate::{Error, Result};

/// Token sink forwarding to a translator.  `TokenSink` only hands out
/// `&self`, so the translator and the first error live in `RefCell`s
/// owned by the caller.
struct TranslatorSink<'a, H: DocumentHandler> {
    translator: &'a RefCell<Translator<H>>,
    error: &'a RefCell<Option<Error>>,
}

/// Elements in the vocabulary which never have an end tag in HTML.
fn is_void(tag: &Tag) -> bool {
    tag.name == local_name!("br") || tag.name == local_name!("img")
}

impl<'a, H: DocumentHandler> TranslatorSink<'a, H> {
    fn process(&self, token: Token) -> Result<()> {
        let mut translator = self.translator.borrow_mut();
        match token {
            Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag => {
                    translator.tag_open(&tag.name, &tag.attrs[..])?;
                    if tag.self_closing || is_void(&tag) {
                        translator.tag_close(&tag.name)?;
                    }
                    Ok(())
                }
                TagKind::EndTag => translator.tag_close(&tag.name),
            },
            Token::CharacterTokens(text) => translator.characters(&text),
            Token::ParseError(_err) => {
                html_trace!("Tokenizer error: {}", _err);
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl<'a, H: DocumentHandler> TokenSink for TranslatorSink<'a, H> {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        if self.error.borrow().is_none() {
            if let Err(err) = self.process(token) {
                *self.error.borrow_mut() = Some(err);
            }
        }
        TokenSinkResult::Continue
    }
}

/// Tokenize `html` as one document and feed it through `translator`.
///
/// The translator gets `start_document`, every tag and character token,
/// then `end_document`.  The first error stops any further calls and is
/// returned.
pub(crate) fn translate<H: DocumentHandler>(
    translator: Translator<H>,
    html: &str,
) -> Result<Translator<H>> {
    let translator = RefCell::new(translator);
    let error = RefCell::new(None);

    translator.borrow_mut().start_document()?;
    {
        let sink = TranslatorSink {
            translator: &translator,
            error: &error,
        };
        let tokenizer = Tokenizer::new(sink, TokenizerOpts::default());
        let queue = BufferQueue::default();
        queue.push_back(StrTendril::from_slice(html));
        let _ = tokenizer.feed(&queue);
        tokenizer.end();
    }
    if let Some(err) = error.into_inner() {
        return Err(err);
    }

    let mut translator = translator.into_inner();
    translator.end_document()?;
    Ok(translator)
}
