use crate::many::Many;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches one or more occurrences of the given parser
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<'code, P> Parser<'code> for Some<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor> {
        // First parse must succeed
        let (first_value, cursor) = self.parser.parse(cursor)?;
        let (rest, cursor) = Many::new(&self.parser).parse(cursor)?;

        let mut results = Vec::with_capacity(rest.len() + 1);
        results.push(first_value);
        results.extend(rest);
        Ok((results, cursor))
    }
}

/// Convenience function to create a Some parser
#[doc(alias = "one_or_more")]
pub fn some<'code, P>(parser: P) -> Some<P>
where
    P: Parser<'code>,
{
    Some::new(parser)
}
