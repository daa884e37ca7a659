use crate::cursor::Cursor;
use crate::error::ParseError;

/// Outcome of running a parser: the output and the remaining cursor, or the
/// failure together with the location it happened at
pub type ParseResult<'code, O, C> =
    Result<(O, C), ParseError<'code, <C as Cursor<'code>>::Element>>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Cursor: Cursor<'code>;
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and updated cursor on success,
    /// or Err if the parse fails. Callers backtrack by reusing the cursor
    /// they passed in.
    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor> {
        (**self).parse(cursor)
    }
}
