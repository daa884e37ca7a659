use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::AtomicCursor;
use crate::error::ParseError;
use crate::filter::FilterExt;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that consumes and returns a single unit
pub struct UnitParser<'code, T> {
    _phantom: PhantomData<&'code [T]>,
}

impl<'code, T> UnitParser<'code, T> {
    pub fn new() -> Self {
        UnitParser {
            _phantom: PhantomData,
        }
    }
}

impl<'code, T> Default for UnitParser<'code, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, T: Atomic + 'code> Parser<'code> for UnitParser<'code, T> {
    type Cursor = AtomicCursor<'code, T>;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor> {
        cursor.read()
    }
}

/// Convenience function to create a UnitParser
pub fn unit<'code, T>() -> UnitParser<'code, T> {
    UnitParser::new()
}

/// Parser that matches a specific unit
pub struct IsUnit<'code, T> {
    expected: T,
    _phantom: PhantomData<&'code [T]>,
}

impl<'code, T: Atomic + 'code> Parser<'code> for IsUnit<'code, T> {
    type Cursor = AtomicCursor<'code, T>;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor> {
        let (found, next_cursor) = cursor.read()?;
        if found == self.expected {
            Ok((found, next_cursor))
        } else {
            Err(ParseError::unsatisfied(
                format!("expected '{}', found '{}'", self.expected, found),
                cursor.loc(),
            ))
        }
    }
}

/// Convenience function to create a parser that matches a specific unit
pub fn is_unit<'code, T>(expected: T) -> IsUnit<'code, T> {
    IsUnit {
        expected,
        _phantom: PhantomData,
    }
}

/// Parser that matches any unit of a fixed set
pub struct UnitIn<'code, T: 'static> {
    set: &'static [T],
    _phantom: PhantomData<&'code [T]>,
}

impl<'code, T: Atomic + 'static> Parser<'code> for UnitIn<'code, T> {
    type Cursor = AtomicCursor<'code, T>;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor> {
        let (found, next_cursor) = cursor.read()?;
        if self.set.contains(&found) {
            Ok((found, next_cursor))
        } else {
            Err(ParseError::unsatisfied(
                format!("'{}' is not one of {}", found, T::format_slice(self.set)),
                cursor.loc(),
            ))
        }
    }
}

/// Convenience function to create a parser that matches a unit from `set`
pub fn unit_in<'code, T: 'static>(set: &'static [T]) -> UnitIn<'code, T> {
    UnitIn {
        set,
        _phantom: PhantomData,
    }
}

/// Parser for a single unit satisfying `predicate`
pub fn satisfy<'code, T, F>(
    predicate: F,
    error_message: impl Into<Cow<'static, str>>,
) -> impl Parser<'code, Cursor = AtomicCursor<'code, T>, Output = T>
where
    T: Atomic + 'code,
    F: Fn(T) -> bool,
{
    unit().filter(move |found: &T| predicate(*found), error_message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::CharSource;

    #[test]
    fn test_unit_parser_success() {
        let source = CharSource::new("அம்");
        let (first, cursor) = unit().parse(source.cursor()).unwrap();
        assert_eq!(first, 'அ');
        assert_eq!(cursor.value().unwrap(), 'ம');
    }

    #[test]
    fn test_unit_parser_at_end() {
        let source = CharSource::new("");
        let result = unit().parse(source.cursor());
        assert!(matches!(result, Err(ParseError::EndOfSource(_))));
    }

    #[test]
    fn test_is_unit() {
        let source = CharSource::new("ப்");
        let (pa, cursor) = is_unit('ப').parse(source.cursor()).unwrap();
        assert_eq!(pa, 'ப');
        let (pulli, cursor) = is_unit('்').parse(cursor).unwrap();
        assert_eq!(pulli, '்');
        assert!(cursor.eos());
    }

    #[test]
    fn test_is_unit_mismatch_reports_start() {
        let source = CharSource::new("மா");
        let error = is_unit('க').parse(source.cursor()).unwrap_err();
        assert_eq!(error.position(), 0);
        assert!(error.to_string().contains("expected 'க', found 'ம'"));
    }

    #[test]
    fn test_unit_in() {
        const VOWELS: [char; 2] = ['அ', 'இ'];
        let parser = unit_in(&VOWELS);

        let source = CharSource::new("இ");
        let (found, _) = parser.parse(source.cursor()).unwrap();
        assert_eq!(found, 'இ');

        let source = CharSource::new("உ");
        let error = parser.parse(source.cursor()).unwrap_err();
        assert!(error.to_string().contains("'உ' is not one of அஇ"));
    }

    #[test]
    fn test_satisfy() {
        let source = CharSource::new("7x");
        let parser = satisfy(|c: char| c.is_ascii_digit(), "expected digit");

        let (digit, cursor) = parser.parse(source.cursor()).unwrap();
        assert_eq!(digit, '7');

        let error = parser.parse(cursor).unwrap_err();
        assert!(matches!(error, ParseError::PredicateNotSatisfied { .. }));
        assert_eq!(error.position(), 1);
    }
}
