use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::AtomicCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::marker::PhantomData;

/// Parser that succeeds only when no input remains. Never consumes.
pub struct Eos<'code, T> {
    _phantom: PhantomData<&'code [T]>,
}

impl<'code, T: Atomic + 'code> Parser<'code> for Eos<'code, T> {
    type Cursor = AtomicCursor<'code, T>;
    type Output = ();

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Output, Self::Cursor> {
        match cursor.value() {
            Err(_) => Ok(((), cursor)),
            Ok(found) => Err(ParseError::unsatisfied(
                format!("expected end of source, found '{}'", found),
                cursor.loc(),
            )),
        }
    }
}

/// Convenience function to create an end-of-source parser
pub fn eos<'code, T>() -> Eos<'code, T> {
    Eos {
        _phantom: PhantomData,
    }
}
