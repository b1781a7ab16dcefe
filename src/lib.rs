//! Calcium front-end core: a non-deterministic, path-parallel recursive
//! descent lexer and parser.
//!
//! # Overview
//!
//! Most recursive descent parsers commit to a single path through the
//! grammar, backtracking (or failing) the moment an alternative turns out
//! to be wrong. That is fine for unambiguous grammars, but Calcium's
//! surface grammar has genuine local ambiguity (for example, a type name
//! that could continue as a plain type or as the start of a longer
//! function type). This crate evaluates every live alternative in lock
//! step instead of committing early: at any point during parsing there is
//! a *set* of live paths through the grammar, keyed by the next token
//! expected along each path. Paths that reconverge at the same token
//! position are merged by construction rather than kept as separate
//! copies, which keeps the representation a DAG instead of a tree that
//! grows exponentially with ambiguity.
//!
//! The lexer is a straightforward maximal-munch tokenizer with a
//! reserved-word refinement step layered on top of the generic identifier
//! pattern, grounded in the same [`Log`]/[`Code`]/[`Position`] utilities
//! the parser uses for diagnostics.
//!
//! The `calcium` module is a demonstration grammar instance used to
//! exercise the engine end to end; it is not the crate's load-bearing
//! content and only covers a representative slice of the language.
mod code;
mod error;
mod field_tree;
mod graph;
mod logger;
mod paths;
mod position;
pub mod calcium;
pub mod engine;
pub mod grammar;
pub mod lexer;
pub mod token;

use once_cell::unsync::OnceCell;
use std::fmt::Debug;

/// Line/column location of a byte offset in the source.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// A wrapper over the source bytes with lazily computed line-break
/// offsets, used to translate byte offsets into [`Position`]s for
/// diagnostics.
pub struct Code<'c> {
    pub value: &'c [u8],
    line_breaks: OnceCell<Vec<usize>>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// Tiered debug-trace label attached to a lexer pattern. Ordered so a
/// label at one tier also prints everything a lower tier would.
pub enum Log<T> {
    None,
    Default(T),
    Success(T),
    Result(T),
    Verbose(T),
}

#[derive(Debug, Clone)]
struct FieldTree<T> {
    token: Option<T>,
    children: Vec<(u8, FieldTree<T>)>,
}

/// Failure raised by [`grammar::Grammar::validate`] before parsing ever
/// starts: direct left recursion, a production that may match the empty
/// input, or a reference to an undefined production.
#[derive(Debug)]
pub struct ImplementationError {
    what: String,
    message: String,
}

/// Why the lexer failed to produce a token at some offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexFailureReason {
    /// No terminal pattern matched any prefix of the remaining input.
    NoPatternMatched,
    /// The winning terminal reported a zero-length match, which would
    /// never advance the offset and so is rejected rather than looped
    /// on forever.
    EmptyMatch,
}

/// A lexical analysis failure.
#[derive(Debug, Clone)]
pub struct LexError {
    pub offset: usize,
    pub reason: LexFailureReason,
}

/// Why parsing ultimately failed to accept the input.
#[derive(Debug, Clone)]
pub enum ParseError<TK: Debug> {
    /// The lexer could not tokenize the input.
    Lex(LexError),
    /// No live path reached the end of input; `furthest_position` is the
    /// rightmost token position any path consumed up to, and `expected`
    /// is the union of terminal kinds some path expected there.
    Syntax {
        furthest_position: usize,
        expected: Vec<TK>,
    },
    /// The live-path-count ceiling (see [`engine::ParserConfig`]) was
    /// exceeded at some token position.
    AmbiguityOverflow { position: usize, limit: usize },
}
