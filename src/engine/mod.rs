//! The parser engine: interprets a [`crate::grammar::Combinator`] tree
//! against a [`crate::token::TokenStream`], building a [`PathGraph`] and
//! returning every token-consuming path that reaches the end of input.
//!
//! This plays the role of the teacher's `DefaultParser`/`IProduction`
//! pair, but the control flow is different in kind, not just in detail:
//! the teacher's `eat_*` methods return the *single* best parse (or
//! `Err(ProductionError::Unparsed)`) and backtrack by trying the next
//! `Union` arm; here, `Alternative` always tries every arm and merges
//! whatever succeeds, so there is no backtracking step to speak of:
//! ambiguity is carried forward instead of resolved early.
mod combinator;
mod memo;

#[cfg(test)]
mod __tests__;

use crate::grammar::Grammar;
use crate::graph::PathGraph;
use crate::paths::PathsSet;
use crate::token::{TokenKind, TokenStream};
use crate::ParseError;
use memo::Memo;
use std::collections::BTreeSet;

/// The one runtime-tunable knob the engine has: how many live paths are
/// allowed to pile up at a single token position before parsing is
/// aborted (spec §5, "implementation-defined ceiling against pathological
/// ambiguity blowup").
#[derive(Debug, Clone, Copy)]
pub struct ParserConfig {
    pub max_paths_per_position: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_paths_per_position: 10_000,
        }
    }
}

/// Tracks the furthest token position any live path has reached, and
/// which terminal kinds were expected there, for reporting a syntax
/// error when no path reaches the end of input (spec §7).
struct FurthestFailure<TK> {
    position: usize,
    expected: BTreeSet<TK>,
}

impl<TK: TokenKind> FurthestFailure<TK> {
    fn new() -> Self {
        Self {
            position: 0,
            expected: BTreeSet::new(),
        }
    }

    fn record(&mut self, position: usize, kind: TK) {
        use std::cmp::Ordering;
        match position.cmp(&self.position) {
            Ordering::Greater => {
                self.position = position;
                self.expected.clear();
                self.expected.insert(kind);
            }
            Ordering::Equal => {
                self.expected.insert(kind);
            }
            Ordering::Less => {}
        }
    }
}

pub(crate) enum EngineError {
    NoPath,
    AmbiguityOverflow { position: usize },
    Implementation(crate::ImplementationError),
}

/// The outcome of a successful parse: the path graph and the set of
/// tails that reached the end of input, one per distinct top-level
/// derivation that the grammar did not itself disambiguate away.
pub struct Accepted {
    pub graph: PathGraph,
    pub tails: Vec<crate::graph::NodeId>,
}

impl Accepted {
    /// Whether the accepted parse was unambiguous: exactly one top-level
    /// derivation reached the end of input and nothing along its
    /// recorded ancestry has more than one incoming edge.
    pub fn is_unambiguous(&self) -> bool {
        self.tails.len() == 1 && {
            let mut seen = std::collections::HashSet::new();
            let mut stack = vec![self.tails[0]];
            while let Some(node) = stack.pop() {
                if !seen.insert(node) {
                    continue;
                }
                let parents = self.graph.parents(node);
                if parents.len() > 1 {
                    return false;
                }
                stack.extend(parents.iter().copied());
            }
            true
        }
    }
}

/// Parses a token stream against a validated grammar.
pub struct Parser<'g, TK: TokenKind> {
    grammar: &'g Grammar<TK>,
    config: ParserConfig,
}

impl<'g, TK: TokenKind> Parser<'g, TK> {
    pub fn new(grammar: &'g Grammar<TK>, config: ParserConfig) -> Self {
        Self { grammar, config }
    }

    pub fn parse(&self, stream: &TokenStream<TK>) -> Result<Accepted, ParseError<TK>> {
        let mut graph = PathGraph::new();
        let root = graph.root();
        let mut memo = Memo::new();
        let mut furthest = FurthestFailure::new();

        let input = PathsSet::singleton(0, root);
        let mut ctx = combinator::Context {
            grammar: self.grammar,
            stream,
            graph: &mut graph,
            memo: &mut memo,
            config: &self.config,
            furthest: &mut furthest,
        };

        let result = ctx.eval(&crate::grammar::Combinator::Prod(self.grammar.start()), input);

        match result {
            Ok(paths) => {
                let eoi = stream.end_of_input_position();
                let tails: Vec<_> = paths
                    .tails_at(eoi)
                    .map(|set| set.iter().copied().collect())
                    .unwrap_or_default();
                if tails.is_empty() {
                    Err(self.report_failure(stream, &furthest))
                } else {
                    Ok(Accepted { graph, tails })
                }
            }
            Err(EngineError::AmbiguityOverflow { position }) => Err(ParseError::AmbiguityOverflow {
                position,
                limit: self.config.max_paths_per_position,
            }),
            Err(EngineError::Implementation(err)) => {
                // A validated grammar should never reach an
                // implementation error mid-parse; surface it as the
                // furthest syntax failure rather than panicking, since
                // parsing is the wrong place to assert grammar
                // invariants a caller could still have bypassed by hand.
                unreachable!("grammar should have been validated before parsing: {}", err)
            }
            Err(EngineError::NoPath) => Err(self.report_failure(stream, &furthest)),
        }
    }

    fn report_failure(&self, stream: &TokenStream<TK>, furthest: &FurthestFailure<TK>) -> ParseError<TK> {
        let eoi = stream.end_of_input_position();
        if furthest.position >= eoi && furthest.expected.is_empty() {
            return ParseError::Syntax {
                furthest_position: eoi,
                expected: Vec::new(),
            };
        }
        ParseError::Syntax {
            furthest_position: furthest.position,
            expected: furthest.expected.iter().copied().collect(),
        }
    }
}

pub(crate) fn is_kind_or_subkind<TK: TokenKind>(token_kind: TK, reference: TK) -> bool {
    token_kind == reference || token_kind.parent() == Some(reference)
}
