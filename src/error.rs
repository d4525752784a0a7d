//! Errors produced while parsing and serializing colors.

use thiserror::Error;

/// A position in the parsed input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    /// Byte offset from the start of the input.
    pub offset: usize,
    /// Line number, starting at 1.
    pub line: u32,
    /// Column number, starting at 1.
    pub column: u32,
}

impl Position {
    /// The position at the very start of the input.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };
}

/// The range of the input an error refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Where the offending input starts.
    pub start: Position,
    /// Where the offending input ends.
    pub end: Position,
}

/// The input could not be parsed as a color.
///
/// Conversions pass this error through untouched, so it always describes the
/// original input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message} at {}:{}", .location.start.line, .location.start.column)]
pub struct ParseError {
    /// Description of what went wrong.
    pub message: String,
    /// The input that was being parsed.
    pub input: String,
    /// Where in the input the error occurred.
    pub location: Span,
}

/// A color could not be written as CSS.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SerializeError {
    /// There is no CSS output for colors in this notation.
    #[error("could not output string for {function} color")]
    Unsupported {
        /// The CSS function name of the color.
        function: &'static str,
    },
    /// The destination refused the output.
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let err = ParseError {
            message: "Unexpected token".to_string(),
            input: "rgb(1, 2)".to_string(),
            location: Span {
                start: Position {
                    offset: 8,
                    line: 1,
                    column: 9,
                },
                end: Position {
                    offset: 9,
                    line: 1,
                    column: 10,
                },
            },
        };
        assert_eq!(err.to_string(), "Unexpected token at 1:9");
    }

    #[test]
    fn serialize_error_display() {
        let err = SerializeError::Unsupported { function: "lab" };
        assert_eq!(err.to_string(), "could not output string for lab color");
    }
}
