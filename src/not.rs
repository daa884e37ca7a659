use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'code, P> Parser<'code> for Not<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = ();

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor> {
        match self.parser.parse(cursor) {
            Ok(_) => Err(ParseError::unsatisfied(
                "negative lookahead failed: unexpected match",
                cursor.loc(),
            )),
            Err(_) => Ok(((), cursor)),
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<'code, P>(parser: P) -> Not<P>
where
    P: Parser<'code>,
{
    Not::new(parser)
}

/// Parser combinator that performs positive lookahead
///
/// Runs the given parser and returns its output, but hands back the cursor
/// it started from.
pub struct Peek<P> {
    parser: P,
}

impl<'code, P> Parser<'code> for Peek<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor> {
        let (value, _) = self.parser.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Convenience function to create a Peek parser for positive lookahead
pub fn peek<'code, P>(parser: P) -> Peek<P>
where
    P: Parser<'code>,
{
    Peek { parser }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::cursors::CharSource;
    use crate::many::many;
    use crate::map::MapExt;
    use crate::string::is_string;
    use crate::unit::{is_unit, unit};

    #[test]
    fn test_not_fails_on_match() {
        let source = CharSource::new("கை");
        let result = not(is_string("கை")).parse(source.cursor());
        assert!(result.is_err());
    }

    #[test]
    fn test_not_succeeds_on_no_match() {
        let source = CharSource::new("கா");
        let ((), cursor) = not(is_string("கை")).parse(source.cursor()).unwrap();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_not_at_end_of_input() {
        let source = CharSource::new("");
        let ((), cursor) = not(unit()).parse(source.cursor()).unwrap();
        assert!(cursor.eos());
    }

    #[test]
    fn test_many_until_pulli() {
        // Consume units as long as the next one is not a pulli
        let source = CharSource::new("அம்மா");
        let parser = many(not(is_unit('்')).and(unit()).map(|(_, c)| c));

        let (units, cursor) = parser.parse(source.cursor()).unwrap();
        assert_eq!(units, vec!['அ', 'ம']);
        assert_eq!(cursor.value().unwrap(), '்');
    }

    #[test]
    fn test_peek_does_not_consume() {
        let source = CharSource::new("கை");
        let (found, cursor) = peek(is_unit('க')).parse(source.cursor()).unwrap();
        assert_eq!(found, 'க');
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_peek_propagates_failure() {
        let source = CharSource::new("ம");
        let error = peek(is_unit('க')).parse(source.cursor()).unwrap_err();
        assert_eq!(error.position(), 0);
    }
}
