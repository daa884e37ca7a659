use crate::atomic::Atomic;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

#[derive(Debug)]
pub struct ReadablePosition {
    pub line: usize,
    pub offset: usize,
}

/// A position inside the source being parsed
///
/// This is the "rest" of a failed parse: everything from `loc` onwards is
/// what the failing parser had not consumed.
#[derive(Debug, Copy, Clone)]
pub struct CodeLoc<'code, T: Atomic = char> {
    code: &'code [T],
    /// The position in `code` where the cursor encountered an error
    loc: usize,
}

impl<'code, T: Atomic> CodeLoc<'code, T> {
    pub fn new(code: &'code [T], loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    /// The unconsumed tail of the source
    pub fn remaining(&self) -> &'code [T] {
        &self.code[self.loc.min(self.code.len())..]
    }

    /// Calculate line number and element offset within that line
    ///
    /// Note: We return element offset instead of column number because column
    /// calculation depends on rendering. For Tamil text a vowel sign occupies a
    /// unit of its own but no column of its own.
    fn readable_position(&self) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, element) in self.code.iter().enumerate() {
            if i >= self.loc {
                break;
            }
            if element.is_newline() {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            offset: self.loc - line_start,
        }
    }

    /// Get lines of context around the error position
    /// Returns up to 2 lines before and after the error line
    fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2);
        let last = pos.line + 2;

        let mut lines = Vec::new();
        for (index, line) in self.code.split(|element| element.is_newline()).enumerate() {
            let number = index + 1;
            if number < first || number > last {
                continue;
            }

            let prefix = if number == pos.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, T::format_slice(line)));

            if number == pos.line {
                let pointer_offset = prefix.chars().count() + pos.offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

impl<'code, T: Atomic> fmt::Display for CodeLoc<'code, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.readable_position();
        write!(f, "line {}, offset {}", pos.line, pos.offset)
    }
}

/// Failure outcome of every parser
#[derive(Debug, Error)]
pub enum ParseError<'code, T: Atomic = char> {
    /// Fewer units remain than the parser required
    #[error("unexpected end of source at {0}")]
    EndOfSource(CodeLoc<'code, T>),

    /// A unit or cluster was present but failed a required condition
    #[error("{message} at {loc}")]
    PredicateNotSatisfied {
        message: Cow<'static, str>,
        loc: CodeLoc<'code, T>,
    },

    /// Every branch of a choice failed; carries the last branch's failure
    #[error("no alternative matched: {}", .last.as_ref())]
    AlternativesExhausted { last: Box<ParseError<'code, T>> },

    /// A rule that exists by name but has no implementation yet
    #[error("{rule} is not implemented (at {loc})")]
    NotImplemented {
        rule: &'static str,
        loc: CodeLoc<'code, T>,
    },
}

impl<'code, T: Atomic> ParseError<'code, T> {
    pub fn unsatisfied(message: impl Into<Cow<'static, str>>, loc: CodeLoc<'code, T>) -> Self {
        ParseError::PredicateNotSatisfied {
            message: message.into(),
            loc,
        }
    }

    /// Wrap the failure of the last alternative tried
    ///
    /// An already exhausted failure is returned as is, so nested choices
    /// report a single level of exhaustion.
    pub fn exhausted(last: Self) -> Self {
        match last {
            ParseError::AlternativesExhausted { .. } => last,
            other => ParseError::AlternativesExhausted {
                last: Box::new(other),
            },
        }
    }

    /// The failure underneath an exhausted choice, if any
    pub fn cause(&self) -> Option<&ParseError<'code, T>> {
        match self {
            ParseError::AlternativesExhausted { last } => Some(last),
            _ => None,
        }
    }

    pub fn loc(&self) -> CodeLoc<'code, T> {
        match self {
            ParseError::EndOfSource(loc) => *loc,
            ParseError::PredicateNotSatisfied { loc, .. } => *loc,
            ParseError::AlternativesExhausted { last } => last.loc(),
            ParseError::NotImplemented { loc, .. } => *loc,
        }
    }

    /// Returns the position where this error occurred
    pub fn position(&self) -> usize {
        self.loc().position()
    }

    /// The unconsumed source at the failure point
    pub fn remaining(&self) -> &'code [T] {
        self.loc().remaining()
    }

    /// Multi-line rendering with the surrounding source and a pointer
    pub fn report(&self) -> String {
        let mut out = format!("{}\n\n", self);
        for line in self.loc().context_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
