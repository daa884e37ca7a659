use crate::atomic::Atomic;
use crate::cursors::{AtomicCursor, CharCursor};
use crate::many::many;
use crate::map::MapExt;
use crate::parser::{ParseResult, Parser};
use crate::string::is_string;
use crate::unit::satisfy;
use std::borrow::Cow;

/// Parser that matches a single whitespace unit
pub fn whitespace<'code, T>() -> impl Parser<'code, Cursor = AtomicCursor<'code, T>, Output = T>
where
    T: Atomic + 'code,
{
    satisfy(|unit: T| unit.is_whitespace(), "expected whitespace")
}

/// Parser that consumes zero or more whitespace units. Always succeeds.
pub fn skip_whitespace<'code, T>() -> impl Parser<'code, Cursor = AtomicCursor<'code, T>, Output = ()>
where
    T: Atomic + 'code,
{
    many(whitespace()).map(|_| ())
}

/// Parser combinator that runs a parser and then discards trailing whitespace
pub struct Token<P> {
    parser: P,
}

impl<'code, P, T> Parser<'code> for Token<P>
where
    P: Parser<'code, Cursor = AtomicCursor<'code, T>>,
    T: Atomic + 'code,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor> {
        let (value, cursor) = self.parser.parse(cursor)?;
        let ((), cursor) = skip_whitespace().parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Extension trait to add .token() method support for parsers
pub trait TokenExt<'code>: Parser<'code> + Sized {
    fn token(self) -> Token<Self> {
        Token { parser: self }
    }
}

impl<'code, P> TokenExt<'code> for P where P: Parser<'code> {}

/// Parser for a literal word followed by optional whitespace
pub fn token<'code>(
    expected: impl Into<Cow<'static, str>>,
) -> impl Parser<'code, Cursor = CharCursor<'code>, Output = Cow<'static, str>> {
    is_string(expected).token()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::CharSource;
    use crate::some::some;
    use crate::unit::is_unit;

    #[test]
    fn test_whitespace_kinds() {
        for input in [" ", "\t", "\n", "\r", "\u{00A0}", "\u{3000}"] {
            let source = CharSource::new(input);
            let result = whitespace().parse(source.cursor());
            assert!(result.is_ok(), "Expected whitespace for U+{:04X}", input.chars().next().unwrap() as u32);
        }
    }

    #[test]
    fn test_whitespace_rejects_letters_and_signs() {
        for input in ["க", "்", "ா"] {
            let source = CharSource::new(input);
            assert!(whitespace().parse(source.cursor()).is_err());
        }
    }

    #[test]
    fn test_skip_whitespace() {
        let source = CharSource::new(" \t\nக");
        let ((), cursor) = skip_whitespace().parse(source.cursor()).unwrap();
        assert_eq!(cursor.value().unwrap(), 'க');

        let ((), cursor) = skip_whitespace().parse(cursor).unwrap();
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_token_discards_trailing_whitespace() {
        let source = CharSource::new("ப   ம");
        let (found, cursor) = is_unit('ப').token().parse(source.cursor()).unwrap();
        assert_eq!(found, 'ப');
        assert_eq!(cursor.value().unwrap(), 'ம');
    }

    #[test]
    fn test_words_as_tokens() {
        let source = CharSource::new("யாது  யாது யாது");
        let (words, cursor) = some(token("யாது")).parse(source.cursor()).unwrap();
        assert_eq!(words.len(), 3);
        assert!(cursor.eos());
    }
}
