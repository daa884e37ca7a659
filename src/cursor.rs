use crate::atomic::Atomic;
use crate::error::{CodeLoc, ParseError};

/// Generic cursor trait for parser combinators
///
/// A cursor represents a position in a sequence of elements that can be advanced
/// and queried. Cursors are `Copy`: a combinator that needs to backtrack keeps the
/// cursor it was handed and simply parses from it again.
pub trait Cursor<'code>: Copy + Clone + Sized {
    /// The type of elements this cursor iterates over
    type Element: Atomic + 'code;

    /// Get the element at the current cursor position
    ///
    /// Returns an error if the cursor is positioned at the end of the sequence
    fn value(&self) -> Result<Self::Element, ParseError<'code, Self::Element>>;

    /// Advance the cursor to the next element
    ///
    /// If already at the end, returns a cursor still positioned at the end
    fn next(self) -> Self;

    /// Consume exactly one element
    ///
    /// Returns the element together with the advanced cursor, or `EndOfSource`
    /// if nothing remains. `self` is untouched either way.
    fn read(self) -> Result<(Self::Element, Self), ParseError<'code, Self::Element>> {
        let value = self.value()?;
        Ok((value, self.next()))
    }

    /// Look at the element `offset` positions ahead without consuming anything
    fn peek(&self, offset: usize) -> Option<Self::Element> {
        self.position()
            .checked_add(offset)
            .and_then(|index| self.source().get(index))
            .copied()
    }

    /// Get the current position in the sequence
    ///
    /// For end-of-sequence cursors, this returns the length of the sequence
    fn position(&self) -> usize;

    /// Check if the cursor is at the end of the sequence
    fn eos(&self) -> bool {
        self.value().is_err()
    }

    /// Get the source data without consuming the cursor
    fn source(&self) -> &'code [Self::Element];

    /// Consume the cursor and return its inner data and position
    fn inner(self) -> (&'code [Self::Element], usize);

    /// Location of this cursor, for error reporting
    fn loc(&self) -> CodeLoc<'code, Self::Element> {
        CodeLoc::new(self.source(), self.position())
    }
}
