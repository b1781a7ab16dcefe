//! Maximal-munch lexer with priority tie-breaking and parent/child
//! terminal classification.
//!
//! Unlike the teacher's `Tokenizer`, which resolves each position with
//! `iter().find_map(...)` (first pattern in declaration order that
//! matches at all, regardless of match length), this engine computes the
//! match length of *every* pattern at the current offset and takes the
//! longest, breaking ties by declaration order. Maximal munch is required
//! here: Calcium's reserved words are literal spellings of the identifier
//! pattern's language, so first-match-wins would make `Pattern` order
//! matter in ways that silently depend on declaration position instead of
//! on which lexeme is actually longest.
mod pattern;
mod punctuation;


use crate::token::TokenKind;
use crate::{Code, LexError, Log};
use once_cell::unsync::OnceCell;
use regex::bytes::Regex;
use std::fmt::Debug;
use std::rc::Rc;

/// A single terminal-matching rule used by the [`Lexer`].
pub trait Terminal<TK: TokenKind> {
    /// Longest match starting exactly at `offset`, if any, returned as
    /// `(length, resolved kind)`. `length` is always greater than zero.
    fn longest_match(&self, code: &Code, offset: usize) -> Option<(usize, TK)>;

    /// Whether a winning match of this terminal should be discarded
    /// rather than emitted as a token (whitespace, comments, ...).
    fn is_ignored(&self) -> bool {
        false
    }
}

/// Debug tracing shared by [`Pattern`], mirroring the teacher's
/// `lexeme::LexemeLogger` (`examples/creative-forest-lang-pt/src/lexeme/mod.rs`):
/// a pattern with a log label assigned via `set_log` prints its entry
/// and outcome at tokenization time, gated entirely behind
/// `#[cfg(debug_assertions)]` so release builds pay nothing for it.
trait PatternLogger {
    fn log_cell(&self) -> &OnceCell<Log<&'static str>>;

    fn log_enter(&self) {
        #[cfg(debug_assertions)]
        if let Some(l) = self.log_cell().get() {
            println!("Entering {}", l)
        }
    }

    fn log_result<K: Debug + Copy>(&self, _pointer: usize, _code: &Code, _result: &Option<(usize, K)>) {
        #[cfg(debug_assertions)]
        match _result {
            Some((length, kind)) => self.log_success(_code, _pointer, *length, *kind),
            None => self.log_failure(_pointer, _code),
        }
    }

    fn log_success<K: Debug>(&self, _code: &Code, _pointer: usize, _length: usize, _kind: K) {
        #[cfg(debug_assertions)]
        if let Some(log_label) = self.log_cell().get() {
            if log_label.order() >= Log::Success(()).order() {
                println!(
                    "Lexeme Success for {} : token: {:?} from {} to {}.",
                    log_label,
                    _kind,
                    _code.obtain_position(_pointer),
                    _code.obtain_position(_pointer + _length)
                )
            }
        }
    }

    fn log_failure(&self, _pointer: usize, _code: &Code) {
        #[cfg(debug_assertions)]
        if let Some(log_label) = self.log_cell().get() {
            if log_label.order() >= Log::Result(()).order() {
                println!(
                    "Lexeme error for {} : at {}",
                    log_label,
                    _code.obtain_position(_pointer)
                )
            }
        }
    }
}

/// A regex-backed terminal pattern, optionally refined into one of
/// several child kinds when the matched lexeme is one of a fixed set of
/// reserved spellings (spec §4.1's "parent/child terminal pattern
/// classification").
pub struct Pattern<TK> {
    kind: TK,
    regexp: Regex,
    children: Vec<(&'static str, TK)>,
    ignored: bool,
    log: OnceCell<Log<&'static str>>,
}

/// Longest-prefix matcher over a fixed set of punctuation spellings,
/// backed by the same byte trie the grammar's punctuation field uses
/// (see [`crate::FieldTree`]).
pub struct Punctuation<TK> {
    tree: crate::FieldTree<TK>,
}

/// A maximal-munch tokenizer: at every offset, tries every registered
/// terminal and keeps the longest match, breaking ties by the order the
/// terminals were registered in.
pub struct Lexer<TK: TokenKind> {
    terminals: Vec<Rc<dyn Terminal<TK>>>,
}

impl<TK: TokenKind> Lexer<TK> {
    pub fn new(terminals: Vec<Rc<dyn Terminal<TK>>>) -> Self {
        Self { terminals }
    }

    /// Tokenize the full input, returning the stream including the
    /// trailing end-of-input sentinel, or the offset and reason lexing
    /// first failed.
    pub fn tokenize(&self, code: &Code) -> Result<crate::token::TokenStream<TK>, LexError> {
        use crate::token::Token;

        let len = code.value.len();
        let mut offset = 0;
        let mut tokens = Vec::new();

        while offset < len {
            let mut best: Option<(usize, usize, TK)> = None; // (length, terminal index, kind)
            for (index, terminal) in self.terminals.iter().enumerate() {
                if let Some((length, kind)) = terminal.longest_match(code, offset) {
                    let is_better = match &best {
                        None => true,
                        Some((best_len, best_index, _)) => {
                            length > *best_len || (length == *best_len && index < *best_index)
                        }
                    };
                    if is_better {
                        best = Some((length, index, kind));
                    }
                }
            }

            match best {
                None => {
                    return Err(LexError {
                        offset,
                        reason: crate::LexFailureReason::NoPatternMatched,
                    })
                }
                Some((0, _, _)) => {
                    // Every `Terminal::longest_match` impl in this crate
                    // already refuses a zero-length match, but the trait
                    // itself allows one; catch it here rather than spin
                    // at the same offset forever (spec §4.1's "offset is
                    // strictly monotonic" invariant).
                    return Err(LexError {
                        offset,
                        reason: crate::LexFailureReason::EmptyMatch,
                    })
                }
                Some((length, index, kind)) => {
                    let end = offset + length;
                    if !self.terminals[index].is_ignored() {
                        let position = code.obtain_position(offset);
                        tokens.push(Token::new(kind, offset, end, position));
                    }
                    offset = end;
                }
            }
        }

        let eof_position = code.obtain_position(len);
        tokens.push(Token::new(TK::end_of_input(), len, len, eof_position));
        Ok(crate::token::TokenStream::new(tokens))
    }
}
