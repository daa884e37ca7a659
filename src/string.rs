use crate::cursor::Cursor;
use crate::cursors::CharCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that matches an exact string character by character
pub struct IsStringParser {
    expected: Cow<'static, str>,
}

impl IsStringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for IsStringParser {
    type Cursor = CharCursor<'code>;
    type Output = Cow<'static, str>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor> {
        let mut current_cursor = cursor;

        for expected_char in self.expected.chars() {
            match current_cursor.read() {
                Ok((parsed_char, new_cursor)) if parsed_char == expected_char => {
                    current_cursor = new_cursor;
                }
                Ok((parsed_char, _)) => {
                    return Err(ParseError::unsatisfied(
                        format!(
                            "expected '{}', found '{}' while matching '{}'",
                            expected_char, parsed_char, self.expected
                        ),
                        current_cursor.loc(),
                    ));
                }
                Err(_) => return Err(ParseError::EndOfSource(current_cursor.loc())),
            }
        }

        Ok((self.expected.clone(), current_cursor))
    }
}

/// Convenience function to create an IsStringParser
pub fn is_string(expected: impl Into<Cow<'static, str>>) -> IsStringParser {
    IsStringParser::new(expected)
}
