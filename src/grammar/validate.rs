use super::{Combinator, Grammar, ProductionId};
use crate::token::TokenKind;
use crate::ImplementationError;
use std::collections::{HashMap, HashSet};

impl<TK: TokenKind> Grammar<TK> {
    /// Walk every declared production once, checking that:
    /// - the start production, and every production it (transitively)
    ///   references, is defined;
    /// - no production is left-recursive, where "left-recursive" means a
    ///   production can call back into itself through a chain of
    ///   combinators that are guaranteed not to have consumed a token
    ///   yet. This is broader than literally "a sequence whose first
    ///   element is itself" (spec §4.2's stated rule): a leading
    ///   `Optional`/`Repeat`/`Alternative` arm that fails to consume
    ///   lets the recursion reach the same production at the same
    ///   position just as surely, and the engine would loop forever on
    ///   it the same way. Recorded as an open-question resolution in
    ///   DESIGN.md.
    /// - no production can match the empty input: its body must
    ///   unconditionally consume at least one terminal, or be an
    ///   alternative all of whose arms do (spec §4.2, "no production
    ///   matches empty input").
    pub(crate) fn validate(&self) -> Result<(), ImplementationError> {
        if !self.productions.contains_key(&self.start) {
            return Err(ImplementationError::new(
                "UndefinedProduction".into(),
                format!("start production {} is not defined.", self.start.0),
            ));
        }

        let mut resolved: HashMap<ProductionId, bool> = HashMap::new();
        let mut in_progress: HashSet<ProductionId> = HashSet::new();
        let mut ids: Vec<_> = self.productions.keys().copied().collect();
        ids.sort();
        for id in ids {
            let mut visiting = HashSet::new();
            self.check_production(id, &mut visiting, &mut in_progress, &mut resolved)?;
        }
        Ok(())
    }

    /// `visiting` is the strict left-recursion cycle scope: re-entering a
    /// production already in it means some path reached that production
    /// again without a guaranteed consume in between. It resets to a
    /// fresh, empty scope past a guaranteed consume (see `Seq` below),
    /// since a later reference sits at a different token position and
    /// can no longer cause the same cycle.
    ///
    /// `in_progress` is a single scope shared across the whole pass: a
    /// production already in it is somewhere on the current call stack,
    /// reached either through the strict cycle above (which already
    /// errored) or safely, past a guaranteed consume. Either way its own
    /// top-level check (driven by `validate`'s loop over every
    /// production id) will finish the job, so this reference just
    /// returns optimistically instead of re-descending into a body that
    /// is already being checked further up the stack. Without this, a
    /// production that calls itself after consuming a token (ordinary,
    /// valid right recursion) would send `Seq`'s "fresh scope past a
    /// guaranteed consume" rule into checking the same body forever,
    /// since a brand new empty `visiting` set never remembers the cycle.
    fn check_production(
        &self,
        id: ProductionId,
        visiting: &mut HashSet<ProductionId>,
        in_progress: &mut HashSet<ProductionId>,
        resolved: &mut HashMap<ProductionId, bool>,
    ) -> Result<bool, ImplementationError> {
        if let Some(consumes) = resolved.get(&id) {
            return Ok(*consumes);
        }
        if !visiting.insert(id) {
            return Err(ImplementationError::new(
                "LeftRecursion".into(),
                format!(
                    "production {} can be re-entered without consuming a token.",
                    id.0
                ),
            ));
        }
        if !in_progress.insert(id) {
            visiting.remove(&id);
            return Ok(true);
        }

        let body = self.productions.get(&id).ok_or_else(|| {
            ImplementationError::new(
                "UndefinedProduction".into(),
                format!("production {} is referenced but not defined.", id.0),
            )
        })?;
        let consumes = self.check_combinator(body, visiting, in_progress, resolved)?;
        visiting.remove(&id);
        in_progress.remove(&id);

        if !consumes {
            return Err(ImplementationError::new(
                "EmptyMatch".into(),
                format!(
                    "production {} may match the empty input; every path through its body must consume at least one terminal.",
                    id.0
                ),
            ));
        }
        resolved.insert(id, consumes);
        Ok(consumes)
    }

    /// Returns whether `combinator` is guaranteed to consume at least one
    /// token whenever it succeeds, recursing into every child so nested
    /// production references are still validated for existence and
    /// left recursion even where the outcome doesn't affect the parent's
    /// own guarantee (inside `Opt`/`Rep`).
    fn check_combinator(
        &self,
        combinator: &Combinator<TK>,
        visiting: &mut HashSet<ProductionId>,
        in_progress: &mut HashSet<ProductionId>,
        resolved: &mut HashMap<ProductionId, bool>,
    ) -> Result<bool, ImplementationError> {
        match combinator {
            Combinator::Term(_) => Ok(true),
            Combinator::Prod(id) => self.check_production(*id, visiting, in_progress, resolved),
            Combinator::Seq(children) => {
                let mut guaranteed = false;
                for child in children {
                    if guaranteed {
                        // A token was already consumed along this sequence;
                        // later children no longer share this position, so
                        // validate them in a fresh cycle-detection scope.
                        let mut isolated = HashSet::new();
                        self.check_combinator(child, &mut isolated, in_progress, resolved)?;
                    } else if self.check_combinator(child, visiting, in_progress, resolved)? {
                        guaranteed = true;
                    }
                }
                Ok(guaranteed)
            }
            Combinator::Alt(children) => {
                let mut all_consume = true;
                for child in children {
                    if !self.check_combinator(child, visiting, in_progress, resolved)? {
                        all_consume = false;
                    }
                }
                Ok(all_consume)
            }
            Combinator::Opt(child) => {
                self.check_combinator(child, visiting, in_progress, resolved)?;
                Ok(false)
            }
            Combinator::Rep(child) => {
                self.check_combinator(child, visiting, in_progress, resolved)?;
                Ok(false)
            }
        }
    }
}
