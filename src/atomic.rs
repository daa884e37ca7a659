/// Trait for atomic elements that can be used in parsing
/// This enables generic error formatting and position calculation
pub trait Atomic: Copy + Clone + PartialEq + std::fmt::Debug + std::fmt::Display {
    /// The newline character/element for this atomic type
    const NEWLINE: Self;

    fn is_newline(&self) -> bool {
        *self == Self::NEWLINE
    }

    /// Whether this element separates words
    fn is_whitespace(&self) -> bool;

    /// Convert a slice of elements to a displayable string for error reporting
    fn format_slice(slice: &[Self]) -> String;
}

/// Units are Unicode scalar values. Every Tamil letter, pulli and vowel sign
/// is a single scalar in the BMP, so one read yields one glyph.
impl Atomic for char {
    const NEWLINE: Self = '\n';

    fn is_whitespace(&self) -> bool {
        char::is_whitespace(*self)
    }

    fn format_slice(slice: &[Self]) -> String {
        slice.iter().collect()
    }
}
