//! Grammar-load-time validation tests (spec §4.2): undefined references,
//! left recursion (including the broadened cases validate.rs documents),
//! and empty-match detection.
use super::{Combinator, Grammar, Production};
use crate::token::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum T {
    A,
    B,
    End,
}

impl TokenKind for T {
    fn end_of_input() -> Self {
        T::End
    }
}

fn term(kind: T) -> Combinator<T> {
    Combinator::term(kind)
}

#[test]
fn undefined_start_production_is_rejected() {
    let err = Grammar::new(Vec::<Production<T>>::new(), "Missing").unwrap_err();
    assert_eq!(err.what, "UndefinedProduction");
}

#[test]
fn undefined_referenced_production_is_rejected() {
    let productions = vec![Production::new("Start", Combinator::prod("Missing"))];
    let err = Grammar::new(productions, "Start").unwrap_err();
    assert_eq!(err.what, "UndefinedProduction");
}

#[test]
fn direct_left_recursion_is_rejected() {
    let productions = vec![Production::new(
        "Start",
        Combinator::seq(vec![Combinator::prod("Start"), term(T::A)]),
    )];
    let err = Grammar::new(productions, "Start").unwrap_err();
    assert_eq!(err.what, "LeftRecursion");
}

#[test]
fn left_recursion_through_a_leading_optional_is_rejected() {
    // `Optional` never itself consumes, so a `Start` that leads with
    // `Optional(Start)` can still re-enter itself at the same position,
    // the broadened rule validate.rs applies beyond literal "first child
    // is self".
    let productions = vec![Production::new(
        "Start",
        Combinator::seq(vec![
            Combinator::opt(Combinator::prod("Start")),
            term(T::A),
        ]),
    )];
    let err = Grammar::new(productions, "Start").unwrap_err();
    assert_eq!(err.what, "LeftRecursion");
}

#[test]
fn left_recursion_through_an_alternative_arm_is_rejected() {
    let productions = vec![Production::new(
        "Start",
        Combinator::alt(vec![term(T::A), Combinator::prod("Start")]),
    )];
    let err = Grammar::new(productions, "Start").unwrap_err();
    assert_eq!(err.what, "LeftRecursion");
}

#[test]
fn recursion_after_a_guaranteed_token_is_not_left_recursion() {
    // `Start` here consumes `T::A` before ever referencing itself again,
    // so every re-entry sits at a later token position: not left
    // recursion, even though the production is still self-referential.
    let productions = vec![Production::new(
        "Start",
        Combinator::alt(vec![
            term(T::B),
            Combinator::seq(vec![term(T::A), Combinator::prod("Start")]),
        ]),
    )];
    Grammar::new(productions, "Start").expect("right-recursion should validate");
}

#[test]
fn production_that_can_match_empty_is_rejected() {
    let productions = vec![Production::new(
        "Start",
        Combinator::opt(term(T::A)),
    )];
    let err = Grammar::new(productions, "Start").unwrap_err();
    assert_eq!(err.what, "EmptyMatch");
}

#[test]
fn alternative_with_one_nullable_arm_is_rejected() {
    let productions = vec![Production::new(
        "Start",
        Combinator::alt(vec![term(T::A), Combinator::opt(term(T::B))]),
    )];
    let err = Grammar::new(productions, "Start").unwrap_err();
    assert_eq!(err.what, "EmptyMatch");
}

#[test]
fn duplicate_production_name_is_rejected() {
    let productions = vec![
        Production::new("Start", term(T::A)),
        Production::new("Start", term(T::B)),
    ];
    let err = Grammar::new(productions, "Start").unwrap_err();
    assert_eq!(err.what, "DuplicateProduction");
}

#[test]
fn a_well_formed_grammar_validates() {
    let productions = vec![
        Production::new(
            "Start",
            Combinator::seq(vec![term(T::A), Combinator::rep(term(T::B))]),
        ),
    ];
    let grammar = Grammar::new(productions, "Start").expect("should validate");
    assert_eq!(grammar.start(), super::ProductionId("Start"));
}
