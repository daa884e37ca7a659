use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Ordered choice over a tuple of parsers
///
/// Alternatives are tried left to right, each from the same starting cursor.
/// The first success wins. If every alternative fails, the last failure is
/// reported as `AlternativesExhausted`.
pub struct Choice<T> {
    alternatives: T,
}

/// Convenience function to create a Choice parser from a tuple of 2 to 8 parsers
pub fn choice<T>(alternatives: T) -> Choice<T> {
    Choice { alternatives }
}

macro_rules! impl_choice {
    ($first:ident $(, $rest:ident)+) => {
        impl<'code, $first, $($rest),+> Parser<'code> for Choice<($first, $($rest),+)>
        where
            $first: Parser<'code>,
            $($rest: Parser<'code, Cursor = $first::Cursor, Output = $first::Output>,)+
        {
            type Cursor = $first::Cursor;
            type Output = $first::Output;

            #[allow(non_snake_case)]
            fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor> {
                let ($first, $($rest),+) = &self.alternatives;
                let result = $first.parse(cursor);
                $(
                    let result = match result {
                        Ok(found) => Ok(found),
                        Err(_) => $rest.parse(cursor),
                    };
                )+
                result.map_err(ParseError::exhausted)
            }
        }
    };
}

impl_choice!(P1, P2);
impl_choice!(P1, P2, P3);
impl_choice!(P1, P2, P3, P4);
impl_choice!(P1, P2, P3, P4, P5);
impl_choice!(P1, P2, P3, P4, P5, P6);
impl_choice!(P1, P2, P3, P4, P5, P6, P7);
impl_choice!(P1, P2, P3, P4, P5, P6, P7, P8);
