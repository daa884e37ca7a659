use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::map::MapExt;
use crate::parser::{ParseResult, Parser};

/// Represents a span in the source code with start and end positions
/// and a reference to the source code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'code, T: Atomic = char> {
    /// Reference to the source code
    pub source: &'code [T],
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl<'code, T: Atomic> Span<'code, T> {
    /// Create a new span
    pub fn new(source: &'code [T], start: usize, end: usize) -> Self {
        Span { source, start, end }
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Get the slice of code that this span represents
    pub fn slice(&self) -> &'code [T] {
        &self.source[self.start..self.end]
    }

    /// Format the spanned content as a string
    pub fn as_string(&self) -> String {
        T::format_slice(self.slice())
    }
}

/// A parser combinator that captures the position span of a successful parse
pub struct Position<P> {
    parser: P,
}

impl<P> Position<P> {
    pub fn new(parser: P) -> Self {
        Position { parser }
    }
}

impl<'code, P> Parser<'code> for Position<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = (
        P::Output,
        Span<'code, <P::Cursor as Cursor<'code>>::Element>,
    );

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor> {
        let start_pos = cursor.position();
        let source = cursor.source();
        let (output, new_cursor) = self.parser.parse(cursor)?;
        let end_pos = new_cursor.position();

        let span = Span::new(source, start_pos, end_pos);
        Ok(((output, span), new_cursor))
    }
}

/// Extension trait to add position tracking to any parser
pub trait PositionExt<'code>: Parser<'code> + Sized {
    /// Wrap this parser to capture its position span
    fn with_position(self) -> Position<Self> {
        Position::new(self)
    }

    /// Discard the output and return the consumed text instead
    fn recognize(self) -> impl Parser<'code, Cursor = Self::Cursor, Output = String> {
        self.with_position().map(|(_, span)| span.as_string())
    }
}

impl<'code, P> PositionExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Position combinator
pub fn position<P>(parser: P) -> Position<P> {
    Position::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::cursors::CharSource;
    use crate::many::many;
    use crate::unit::is_unit;

    #[test]
    fn test_span_of_cluster() {
        let source = CharSource::new("கால்");
        let parser = position(is_unit('க').and(is_unit('ா')));

        let ((_, span), cursor) = parser.parse(source.cursor()).unwrap();
        assert_eq!(span.start, 0);
        assert_eq!(span.end, 2);
        assert_eq!(span.len(), 2);
        assert_eq!(span.as_string(), "கா");
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_empty_span() {
        let source = CharSource::new("x");
        let ((_, span), _) = many(is_unit('அ')).with_position().parse(source.cursor()).unwrap();
        assert!(span.is_empty());
        assert_eq!(span.slice(), &[] as &[char]);
    }

    #[test]
    fn test_recognize_returns_consumed_text() {
        let source = CharSource::new("மெய் எழுத்து");
        let (text, cursor) = is_unit('ம')
            .and(is_unit('ெ'))
            .recognize()
            .parse(source.cursor())
            .unwrap();
        assert_eq!(text, "மெ");
        assert_eq!(cursor.value().unwrap(), 'ய');
    }
}
