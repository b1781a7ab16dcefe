//! Data-driven grammar representation (spec §9 design notes): a grammar
//! is a tree of [`Combinator`] values interpreted by a single engine,
//! rather than the teacher's `Rc<dyn IProduction>` composition of
//! distinct trait-object types per combinator kind. The spec calls for
//! ambiguity-preserving evaluation (every successful `Alt` arm survives,
//! every `Rep` iteration count survives) which is naturally expressed as
//! a match over one enum inside the engine; a trait-object tree would
//! just push the same match into a dozen `impl` blocks.
mod validate;

#[cfg(test)]
mod __tests__;

use crate::token::TokenKind;
use std::collections::HashMap;

/// Identifies a production within a [`Grammar`]. Production names are
/// Calcium grammar rule names (`"PackageDeclaration"`, ...) and are
/// `'static` since grammars are built once, at startup, from string
/// literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductionId(pub &'static str);

/// A node of a production's body.
///
/// - `Seq` requires every child to match in order (spec §4.2.1).
/// - `Alt` evaluates every child against the same input and merges every
///   successful child's output, which is what distinguishes it from the
///   teacher's `Union`, which commits to the first successful arm
///   (spec §4.2.2, ambiguity preservation).
/// - `Opt` always keeps the "skip" paths alongside whatever its child
///   produces (spec §4.2.3).
/// - `Rep` matches its child zero or more times, keeping every
///   iteration-count's paths (spec §4.2.4); see [`crate::engine`] for how
///   the "did this iteration advance" check guarantees termination.
/// - `Term` consumes exactly one token of the given kind (or a child kind
///   of it, per [`TokenKind::parent`]).
/// - `Prod` refers to another production by name.
#[derive(Clone)]
pub enum Combinator<TK: TokenKind> {
    Seq(Vec<Combinator<TK>>),
    Alt(Vec<Combinator<TK>>),
    Opt(Box<Combinator<TK>>),
    Rep(Box<Combinator<TK>>),
    Term(TK),
    Prod(ProductionId),
}

impl<TK: TokenKind> Combinator<TK> {
    pub fn seq(children: Vec<Combinator<TK>>) -> Self {
        Combinator::Seq(children)
    }
    pub fn alt(children: Vec<Combinator<TK>>) -> Self {
        Combinator::Alt(children)
    }
    pub fn opt(child: Combinator<TK>) -> Self {
        Combinator::Opt(Box::new(child))
    }
    pub fn rep(child: Combinator<TK>) -> Self {
        Combinator::Rep(Box::new(child))
    }
    pub fn term(kind: TK) -> Self {
        Combinator::Term(kind)
    }
    pub fn prod(id: &'static str) -> Self {
        Combinator::Prod(ProductionId(id))
    }
}

/// One named rule of the grammar.
pub struct Production<TK: TokenKind> {
    pub id: ProductionId,
    pub body: Combinator<TK>,
}

impl<TK: TokenKind> Production<TK> {
    pub fn new(id: &'static str, body: Combinator<TK>) -> Self {
        Self {
            id: ProductionId(id),
            body,
        }
    }
}

/// A complete, validated grammar: a set of named productions plus the
/// production parsing starts from.
pub struct Grammar<TK: TokenKind> {
    pub(crate) productions: HashMap<ProductionId, Combinator<TK>>,
    pub(crate) start: ProductionId,
}

impl<TK: TokenKind> Grammar<TK> {
    /// Build and validate a grammar. Fails if the start production is
    /// undefined, any reachable production reference is undefined, any
    /// production is left-recursive, or any production may match the
    /// empty input (spec §4.2 non-goals on grammar-load-time checks).
    pub fn new(
        productions: Vec<Production<TK>>,
        start: &'static str,
    ) -> Result<Self, crate::ImplementationError> {
        let mut map = HashMap::with_capacity(productions.len());
        for production in productions {
            if map.insert(production.id, production.body).is_some() {
                return Err(crate::ImplementationError::new(
                    "DuplicateProduction".into(),
                    format!("production {} is declared more than once.", production.id.0),
                ));
            }
        }
        let grammar = Self {
            productions: map,
            start: ProductionId(start),
        };
        grammar.validate()?;
        Ok(grammar)
    }

    pub fn start(&self) -> ProductionId {
        self.start
    }

    pub fn body(&self, id: ProductionId) -> Option<&Combinator<TK>> {
        self.productions.get(&id)
    }
}
