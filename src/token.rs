//! Token kinds, individual tokens, and the token stream the parser engine
//! walks. Mirrors the teacher's `TokenImpl`/`Lex`/`TokenStream` trio, but
//! the stream here is a single flat `Vec` (no structural/non-structural
//! filtering pass) since the engine consumes every position uniformly and
//! ignored lexemes never make it into the stream at all.
use crate::Position;
use std::fmt::Debug;
use std::hash::Hash;

/// A kind of terminal (or end-of-input sentinel) a grammar can reference.
///
/// `parent` expresses the reserved-word refinement relation: a reserved
/// word kind like `Public` reports `Identifier` as its parent so that a
/// `TerminalRef(Identifier)` in the grammar still accepts a `public`
/// token wherever a bare identifier would do, per the lexer's
/// parent/child classification (see [`crate::lexer`]).
pub trait TokenKind: Copy + Eq + Hash + Ord + Debug {
    /// The sentinel kind the lexer appends after the last real token.
    fn end_of_input() -> Self;

    fn is_end_of_input(&self) -> bool {
        *self == Self::end_of_input()
    }

    fn parent(&self) -> Option<Self> {
        None
    }
}

/// A single lexed token: its kind and its span in both source bytes and
/// the token stream's own numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<TK> {
    pub kind: TK,
    pub start: usize,
    pub end: usize,
    pub position: Position,
}

impl<TK> Token<TK> {
    pub fn new(kind: TK, start: usize, end: usize, position: Position) -> Self {
        Self {
            kind,
            start,
            end,
            position,
        }
    }
}

/// The flat output of lexing: every structural token in order, terminated
/// by a sentinel token of `TK`'s end-of-input kind whose span is empty
/// and sits at the end of the source.
///
/// A `TokenStream` position is simply the index into this vector; the
/// parser engine's `Path`/`PathsSet` machinery (see [`crate::engine`])
/// refers to positions this way rather than through a separate pointer
/// newtype, since (unlike the teacher) there is no separate
/// filtered/unfiltered numbering to reconcile.
#[derive(Debug, Clone)]
pub struct TokenStream<TK> {
    tokens: Vec<Token<TK>>,
}

impl<TK: TokenKind> TokenStream<TK> {
    pub fn new(tokens: Vec<Token<TK>>) -> Self {
        debug_assert!(
            tokens.last().map_or(false, |t| t.kind.is_end_of_input()),
            "token stream must end with an end-of-input sentinel"
        );
        Self { tokens }
    }

    /// Number of positions in the stream, including the trailing sentinel.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token at `position`. Panics if `position` is out of bounds;
    /// the engine never queries past the sentinel.
    pub fn get(&self, position: usize) -> &Token<TK> {
        &self.tokens[position]
    }

    /// Index of the end-of-input sentinel (the last position).
    pub fn end_of_input_position(&self) -> usize {
        self.tokens.len() - 1
    }
}
