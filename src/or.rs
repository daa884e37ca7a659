use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser always starts from the cursor the first one was given,
/// no matter how far the first one got before failing. If both fail, the
/// second failure is reported as `AlternativesExhausted`.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor, Output = P1::Output>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => self.parser2.parse(cursor).map_err(ParseError::exhausted),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::cursor::Cursor;
    use crate::cursors::CharSource;
    use crate::unit::is_unit;
    use proptest::prelude::*;

    #[test]
    fn test_or_first_succeeds() {
        let source = CharSource::new("அஆ");
        let parser = or(is_unit('அ'), is_unit('ஆ'));

        let (found, cursor) = parser.parse(source.cursor()).unwrap();
        assert_eq!(found, 'அ');
        assert_eq!(cursor.value().unwrap(), 'ஆ');
    }

    #[test]
    fn test_or_second_succeeds() {
        let source = CharSource::new("ஆஇ");
        let parser = or(is_unit('அ'), is_unit('ஆ'));

        let (found, cursor) = parser.parse(source.cursor()).unwrap();
        assert_eq!(found, 'ஆ');
        assert_eq!(cursor.value().unwrap(), 'இ');
    }

    #[test]
    fn test_or_both_fail() {
        let source = CharSource::new("xyz");
        let parser = is_unit('அ').or(is_unit('ஆ'));

        let error = parser.parse(source.cursor()).unwrap_err();
        assert!(matches!(error, ParseError::AlternativesExhausted { .. }));
        assert!(error.to_string().contains("expected 'ஆ'"));
    }

    #[test]
    fn test_or_second_starts_from_original_position() {
        // First branch reads க, then fails on the vowel sign
        let source = CharSource::new("கி");
        let parser = is_unit('க')
            .and(is_unit('ா'))
            .or(is_unit('க').and(is_unit('ி')));

        let ((consonant, sign), cursor) = parser.parse(source.cursor()).unwrap();
        assert_eq!((consonant, sign), ('க', 'ி'));
        assert!(cursor.eos());
    }

    #[test]
    fn test_or_method_chain_stays_flat() {
        let source = CharSource::new("q");
        let parser = is_unit('a').or(is_unit('b')).or(is_unit('c'));

        let error = parser.parse(source.cursor()).unwrap_err();
        let cause = error.cause().unwrap();
        assert!(cause.cause().is_none());
        assert!(cause.to_string().contains("expected 'c'"));
    }

    proptest! {
        #[test]
        fn prop_failed_branch_never_moves_cursor(prefix in "[a-c]{0,4}", last in "[a-c]") {
            // First branch matches the prefix and then insists on 'z', so it
            // always fails after consuming some input
            let text = format!("{}{}", prefix, last);
            let source = CharSource::new(&text);
            let first = crate::string::is_string(format!("{}z", prefix));
            let second = crate::string::is_string(text.clone());

            let (matched, cursor) = first.or(second).parse(source.cursor()).unwrap();
            prop_assert_eq!(matched.as_ref(), text.as_str());
            prop_assert_eq!(cursor.position(), source.len());
        }
    }
}
