use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser combinator that names what a parser was looking for
///
/// On failure the inner error is replaced by "expected <what>" reported at
/// the position the inner parser started from. End of source is kept as is
/// so callers can still tell truncated input apart from wrong input.
pub struct Label<P> {
    parser: P,
    what: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, what: Cow<'static, str>) -> Self {
        Label { parser, what }
    }
}

impl<'code, P> Parser<'code> for Label<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor> {
        self.parser.parse(cursor).map_err(|error| match error {
            ParseError::EndOfSource(loc) => ParseError::EndOfSource(loc),
            ParseError::NotImplemented { rule, loc } => ParseError::NotImplemented { rule, loc },
            _ => ParseError::unsatisfied(format!("expected {}", self.what), cursor.loc()),
        })
    }
}

/// Extension trait to add .label() method support for parsers
pub trait LabelExt<'code>: Parser<'code> + Sized {
    fn label(self, what: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, what.into())
    }
}

impl<'code, P> LabelExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::cursors::CharSource;
    use crate::unit::is_unit;

    #[test]
    fn test_label_success_is_transparent() {
        let source = CharSource::new("க்");
        let parser = is_unit('க').and(is_unit('்')).label("mei");
        let ((_, _), cursor) = parser.parse(source.cursor()).unwrap();
        assert!(cursor.eos());
    }

    #[test]
    fn test_label_replaces_message_at_start() {
        let source = CharSource::new("கா");
        let parser = is_unit('க').and(is_unit('்')).label("mei");

        let error = parser.parse(source.cursor()).unwrap_err();
        assert_eq!(error.position(), 0);
        assert!(error.to_string().starts_with("expected mei"));
    }

    #[test]
    fn test_label_keeps_end_of_source() {
        let source = CharSource::new("க");
        let parser = is_unit('க').and(is_unit('்')).label("mei");

        let error = parser.parse(source.cursor()).unwrap_err();
        assert!(matches!(error, ParseError::EndOfSource(_)));
    }
}
