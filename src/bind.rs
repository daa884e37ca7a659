use crate::parser::{ParseResult, Parser};

/// Parser combinator for sequential composition
///
/// Runs the first parser, hands its output to `binder` to obtain the next
/// parser, and runs that one from where the first stopped. A failure of the
/// first parser is returned unchanged.
pub struct Bind<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Bind { parser, binder }
    }
}

impl<'code, P, F, Q> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code, Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = Q::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.binder)(value).parse(cursor)
    }
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn bind<F, Q>(self, binder: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code, Cursor = Self::Cursor>,
    {
        Bind::new(self, binder)
    }
}

/// Implement BindExt for all parsers
impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, Q>(parser: P, binder: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code, Cursor = P::Cursor>,
{
    Bind::new(parser, binder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::{CharCursor, CharSource};
    use crate::error::ParseError;
    use crate::succeed::succeed;
    use crate::unit::{is_unit, unit};

    #[test]
    fn test_bind_feeds_value_forward() {
        // Read a unit, then require the same unit again
        let source = CharSource::new("ககா");
        let parser = unit().bind(is_unit);

        let (doubled, cursor) = parser.parse(source.cursor()).unwrap();
        assert_eq!(doubled, 'க');
        assert_eq!(cursor.value().unwrap(), 'ா');
    }

    #[test]
    fn test_bind_second_fails() {
        let source = CharSource::new("கம");
        let parser = unit().bind(is_unit);

        let error = parser.parse(source.cursor()).unwrap_err();
        assert_eq!(error.position(), 1);
    }

    #[test]
    fn test_bind_first_error_unchanged() {
        let source = CharSource::new("");
        let parser = bind(unit(), |c: char| succeed::<CharCursor, _>(c));

        let error = parser.parse(source.cursor()).unwrap_err();
        assert!(matches!(error, ParseError::EndOfSource(_)));
    }

    #[test]
    fn test_bind_expresses_pairing() {
        let source = CharSource::new("மீ");
        let second = unit();
        let parser = unit().bind(|a: char| (&second).bind(move |b: char| succeed((a, b))));

        let ((a, b), cursor) = parser.parse(source.cursor()).unwrap();
        assert_eq!((a, b), ('ம', 'ீ'));
        assert!(cursor.eos());
    }
}
