//! # Ezhuthu - Tamil letter analysis on parser combinators
//!
//! Ezhuthu classifies clusters of Tamil script (vowels, consonants, consonant
//! plus vowel sign) and counts their duration in matras (`nodi`), applying the
//! kurukkam shortening rules in a fixed priority order.
//!
//! The classification is built from a small parser combinator library that
//! lives in the same crate:
//!
//! - **Zero panics**: All parsing errors are handled through `Result` types
//! - **Free backtracking**: Cursors are `Copy`, so alternation simply retries
//!   from the cursor it was given
//! - **Rich error reporting**: Failures carry the location and the remaining
//!   source, and can render a context view
//!
//! ```
//! use ezhuthu::tamil::{Nodi, nodi};
//!
//! assert_eq!(nodi("கா"), Some(Nodi::Two));
//! assert_eq!(nodi("கை"), Some(Nodi::One));
//! assert_eq!(nodi("க்"), None);
//! ```

pub mod and;
pub mod atomic;
pub mod bind;
pub mod choice;
pub mod cursor;
pub mod cursors;
pub mod eos;
pub mod error;
pub mod filter;
pub mod label;
pub mod many;
pub mod map;
pub mod not;
pub mod optional;
pub mod or;
pub mod parser;
pub mod position;
pub mod some;
pub mod string;
pub mod succeed;
pub mod tamil;
pub mod unit;
pub mod whitespace;

pub use and::{AndExt, and};
pub use atomic::Atomic;
pub use bind::{BindExt, bind};
pub use choice::choice;
pub use cursor::Cursor;
pub use cursors::{AtomicCursor, CharCursor, CharSource};
pub use eos::eos;
pub use error::{CodeLoc, ParseError};
pub use filter::{FilterExt, filter};
pub use label::LabelExt;
pub use many::many;
pub use map::{MapExt, map};
pub use not::{not, peek};
pub use optional::{OptionalExt, optional};
pub use or::{OrExt, or};
pub use parser::{ParseResult, Parser};
pub use position::{Position, PositionExt, Span, position};
pub use some::some;
pub use string::is_string;
pub use succeed::{fail, not_implemented, succeed};
pub use tamil::{MeiClass, Nodi, nodi};
pub use unit::{is_unit, satisfy, unit, unit_in};
pub use whitespace::{TokenExt, skip_whitespace, token, whitespace};
