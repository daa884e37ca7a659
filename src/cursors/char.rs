use crate::cursors::AtomicCursor;
use crate::parser::{ParseResult, Parser};
use std::io::{self, Read};

/// Cursor over Unicode scalar values
pub type CharCursor<'code> = AtomicCursor<'code, char>;

/// Owned, rewindable buffer of characters that cursors borrow from
///
/// Cursors are cheap copies pointing into this buffer, so backtracking never
/// needs to re-read the underlying text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSource {
    units: Vec<char>,
}

impl CharSource {
    pub fn new(text: &str) -> Self {
        Self {
            units: text.chars().collect(),
        }
    }

    /// Read all of `reader` as UTF-8 text
    pub fn read_from(mut reader: impl Read) -> io::Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::new(&text))
    }

    pub fn cursor(&self) -> CharCursor<'_> {
        AtomicCursor::new(&self.units)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Run `parser` from the start of this source
    pub fn parse<'code, P>(&'code self, parser: P) -> ParseResult<'code, P::Output, CharCursor<'code>>
    where
        P: Parser<'code, Cursor = CharCursor<'code>>,
    {
        parser.parse(self.cursor())
    }
}

impl From<&str> for CharSource {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
