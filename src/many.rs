use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Stops at the first failure, or at the first success that did not advance
/// the cursor. A zero-width success is dropped, so repeating a parser that
/// can match nothing still terminates.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor> {
        let mut results = Vec::new();
        let mut cursor = cursor;

        while let Ok((value, next_cursor)) = self.parser.parse(cursor) {
            if next_cursor.position() == cursor.position() {
                break;
            }
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser
#[doc(alias = "zero_or_more")]
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}
