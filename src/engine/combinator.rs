use super::{is_kind_or_subkind, memo::Memo, EngineError, FurthestFailure, ParserConfig};
use crate::grammar::{Combinator, Grammar, ProductionId};
use crate::graph::{NodeId, PathGraph};
use crate::paths::PathsSet;
use crate::token::{TokenKind, TokenStream};

/// Everything one call to [`Context::eval`] needs. Bundled into a struct
/// (rather than threading five parameters through every recursive call)
/// the way the teacher threads `code`/`stream`/`cache` through every
/// `IProduction::eat_*` call.
pub(crate) struct Context<'a, 'g, TK: TokenKind> {
    pub grammar: &'g Grammar<TK>,
    pub stream: &'a TokenStream<TK>,
    pub graph: &'a mut PathGraph,
    pub memo: &'a mut Memo,
    pub config: &'a ParserConfig,
    pub furthest: &'a mut FurthestFailure<TK>,
}

impl<'a, 'g, TK: TokenKind> Context<'a, 'g, TK> {
    pub fn eval(&mut self, combinator: &Combinator<TK>, input: PathsSet) -> Result<PathsSet, EngineError> {
        match combinator {
            Combinator::Term(kind) => self.eval_term(*kind, input),
            Combinator::Prod(id) => self.eval_prod(*id, input),
            Combinator::Seq(children) => self.eval_seq(children, input),
            Combinator::Alt(children) => self.eval_alt(children, input),
            Combinator::Opt(child) => self.eval_opt(child, input),
            Combinator::Rep(child) => self.eval_rep(child, input),
        }
    }

    /// Insert `node` at `position` in `output`, failing the whole
    /// evaluation if that position's tail set would exceed the
    /// configured ceiling (spec §5).
    fn insert_checked(
        &mut self,
        output: &mut PathsSet,
        position: usize,
        node: NodeId,
    ) -> Result<(), EngineError> {
        output.insert(position, node);
        if output
            .tails_at(position)
            .map_or(0, |tails| tails.len())
            > self.config.max_paths_per_position
        {
            return Err(EngineError::AmbiguityOverflow { position });
        }
        Ok(())
    }

    /// Consume exactly one token of kind `kind` (or a child kind of it)
    /// from every live path in `input`.
    fn eval_term(&mut self, kind: TK, input: PathsSet) -> Result<PathsSet, EngineError> {
        let eoi = self.stream.end_of_input_position();
        let mut output = PathsSet::new();
        for (position, tail) in input.entries() {
            if position >= eoi {
                // The sentinel isn't a consumable terminal; reaching it
                // just means there is nothing left to match `kind`
                // against.
                self.furthest.record(position, kind);
                continue;
            }
            let token = self.stream.get(position);
            if is_kind_or_subkind(token.kind, kind) {
                let next = self.graph.token_consumed(tail, position + 1);
                self.insert_checked(&mut output, position + 1, next)?;
            } else {
                self.furthest.record(position, kind);
            }
        }
        if output.is_empty() {
            Err(EngineError::NoPath)
        } else {
            Ok(output)
        }
    }

    /// Evaluate a production reference. Memoized on `(id, input)` as a
    /// whole (spec §9); internally still processes one start position at
    /// a time so each resulting completion is wrapped with the right
    /// `start` (a production entered simultaneously from two different
    /// positions produces two distinct completions, never conflated).
    fn eval_prod(&mut self, id: ProductionId, input: PathsSet) -> Result<PathsSet, EngineError> {
        if let Some(cached) = self.memo.get(id, &input) {
            return if cached.is_empty() {
                Err(EngineError::NoPath)
            } else {
                Ok(cached.clone())
            };
        }

        let body = self.grammar.body(id).ok_or_else(|| {
            EngineError::Implementation(crate::ImplementationError::new(
                "UndefinedProduction".into(),
                format!("production {} is referenced but not defined.", id.0),
            ))
        })?;

        let mut output = PathsSet::new();
        for (start, tails) in input.iter() {
            let mut sub_input = PathsSet::new();
            for &tail in tails {
                sub_input.insert(start, tail);
            }
            let body_output = match self.eval(body, sub_input) {
                Ok(paths) => paths,
                Err(EngineError::NoPath) => continue,
                Err(err) => return Err(err),
            };
            for (end, inner_tail) in body_output.entries() {
                let completed = self.graph.production_completed(inner_tail, id, start, end);
                self.insert_checked(&mut output, end, completed)?;
            }
        }

        self.memo.insert(id, input, output.clone());
        if output.is_empty() {
            Err(EngineError::NoPath)
        } else {
            Ok(output)
        }
    }

    /// Pipe `input` through every child in order; any child that yields
    /// no surviving path fails the whole sequence (spec §4.2.1).
    fn eval_seq(&mut self, children: &[Combinator<TK>], input: PathsSet) -> Result<PathsSet, EngineError> {
        let mut current = input;
        for child in children {
            current = self.eval(child, current)?;
        }
        Ok(current)
    }

    /// Evaluate every child against a copy of the same input, merging
    /// every child's output. Unlike the teacher's `Union` (first
    /// successful arm wins, the rest are never tried), every arm is
    /// tried and every successful arm's result is kept; this is the
    /// combinator that actually introduces ambiguity (spec §4.2.2).
    fn eval_alt(&mut self, children: &[Combinator<TK>], input: PathsSet) -> Result<PathsSet, EngineError> {
        let mut output = PathsSet::new();
        let mut any_succeeded = false;
        for child in children {
            match self.eval(child, input.clone()) {
                Ok(result) => {
                    any_succeeded = true;
                    output.merge(result);
                }
                Err(EngineError::NoPath) => {}
                Err(err) => return Err(err),
            }
        }
        if any_succeeded {
            Ok(output)
        } else {
            Err(EngineError::NoPath)
        }
    }

    /// The input paths survive unconditionally ("skip"); the child's
    /// output, if it succeeds, is merged alongside them (spec §4.2.3).
    /// Optional never itself fails.
    fn eval_opt(&mut self, child: &Combinator<TK>, input: PathsSet) -> Result<PathsSet, EngineError> {
        let mut output = input.clone();
        match self.eval(child, input) {
            Ok(result) => output.merge(result),
            Err(EngineError::NoPath) => {}
            Err(err) => return Err(err),
        }
        Ok(output)
    }

    /// Zero or more repetitions of `child`, accumulating the paths for
    /// every iteration count (spec §4.2.4). Stops as soon as an
    /// iteration's output occupies exactly the same token positions as
    /// its input, even if the child reported success: the Repeat
    /// termination guarantee the spec leaves as an open question
    /// (spec §9; resolved in SPEC_FULL.md §5).
    fn eval_rep(&mut self, child: &Combinator<TK>, input: PathsSet) -> Result<PathsSet, EngineError> {
        let mut accumulated = input.clone();
        let mut current = input;
        loop {
            let current_positions = current.positions();
            let next = match self.eval(child, current.clone()) {
                Ok(result) => result,
                Err(EngineError::NoPath) => break,
                Err(err) => return Err(err),
            };
            if next.positions() == current_positions {
                break;
            }
            accumulated.merge(next.clone());
            current = next;
        }
        Ok(accumulated)
    }
}
