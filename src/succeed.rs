use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always succeeds with a clone of `value` without consuming input
pub struct Succeed<C, T> {
    value: T,
    _phantom: PhantomData<C>,
}

impl<'code, C, T> Parser<'code> for Succeed<C, T>
where
    C: Cursor<'code>,
    T: Clone,
{
    type Cursor = C;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor> {
        Ok((self.value.clone(), cursor))
    }
}

pub fn succeed<C, T: Clone>(value: T) -> Succeed<C, T> {
    Succeed {
        value,
        _phantom: PhantomData,
    }
}

/// Parser that always fails with `message` at the current position
pub struct Fail<C, T> {
    message: Cow<'static, str>,
    _phantom: PhantomData<(C, T)>,
}

impl<'code, C, T> Parser<'code> for Fail<C, T>
where
    C: Cursor<'code>,
{
    type Cursor = C;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor> {
        Err(ParseError::unsatisfied(self.message.clone(), cursor.loc()))
    }
}

pub fn fail<C, T>(message: impl Into<Cow<'static, str>>) -> Fail<C, T> {
    Fail {
        message: message.into(),
        _phantom: PhantomData,
    }
}

/// Placeholder for a named rule that has no implementation yet
///
/// Always fails with `NotImplemented`, so any choice or predicate built on it
/// treats the rule as "no match".
pub struct NotImplemented<C, T> {
    rule: &'static str,
    _phantom: PhantomData<(C, T)>,
}

impl<'code, C, T> Parser<'code> for NotImplemented<C, T>
where
    C: Cursor<'code>,
{
    type Cursor = C;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor> {
        Err(ParseError::NotImplemented {
            rule: self.rule,
            loc: cursor.loc(),
        })
    }
}

pub fn not_implemented<C, T>(rule: &'static str) -> NotImplemented<C, T> {
    NotImplemented {
        rule,
        _phantom: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{CharCursor, CharSource};

    #[test]
    fn test_succeed_does_not_consume() {
        let source = CharSource::new("மா");
        let parser = succeed::<CharCursor, _>(42);

        let (value, cursor) = parser.parse(source.cursor()).unwrap();
        assert_eq!(value, 42);
        assert_eq!(cursor.value().unwrap(), 'ம');
    }

    #[test]
    fn test_succeed_on_empty_input() {
        let source = CharSource::new("");
        let (value, cursor) = succeed::<CharCursor, _>(String::new())
            .parse(source.cursor())
            .unwrap();
        assert_eq!(value, "");
        assert!(cursor.eos());
    }

    #[test]
    fn test_fail() {
        let source = CharSource::new("மா");
        let parser = fail::<CharCursor, ()>("nothing matches here");

        let error = parser.parse(source.cursor().next()).unwrap_err();
        assert!(error.to_string().contains("nothing matches here"));
        assert_eq!(error.position(), 1);
    }

    #[test]
    fn test_not_implemented() {
        let source = CharSource::new("கு");
        let parser = not_implemented::<CharCursor, String>("kuttrialukaram");

        let error = parser.parse(source.cursor()).unwrap_err();
        assert!(matches!(
            error,
            ParseError::NotImplemented {
                rule: "kuttrialukaram",
                ..
            }
        ));
    }
}
