pub mod atomic;
pub mod char;

pub use atomic::AtomicCursor;
pub use char::{CharCursor, CharSource};
