use crate::{ImplementationError, LexError, LexFailureReason, ParseError};
use std::fmt::{Debug, Display, Formatter};

impl ImplementationError {
    pub fn new(what: String, message: String) -> Self {
        Self { what, message }
    }
}

impl Display for ImplementationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ImplementationError: {}-{}", self.what, self.message)
    }
}

impl Display for LexFailureReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LexFailureReason::NoPatternMatched => write!(f, "no terminal pattern matched"),
            LexFailureReason::EmptyMatch => write!(f, "winning match had zero length"),
        }
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "LexError: {} at offset {}", self.reason, self.offset)
    }
}

impl<TK: Debug> Display for ParseError<TK> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Lex(err) => write!(f, "{}", err),
            ParseError::Syntax {
                furthest_position,
                expected,
            } => {
                if expected.is_empty() {
                    write!(f, "SyntaxError: unexpected end of input.")
                } else {
                    write!(
                        f,
                        "SyntaxError: unexpected token at position {}, expected one of {:?}.",
                        furthest_position, expected
                    )
                }
            }
            ParseError::AmbiguityOverflow { position, limit } => write!(
                f,
                "AmbiguityOverflow: more than {} live paths at position {}.",
                limit, position
            ),
        }
    }
}
