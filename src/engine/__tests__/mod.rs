//! End-to-end engine tests against small synthetic grammars: ambiguity
//! preservation through `Alt`, `Opt` path preservation, `Rep` termination,
//! furthest-failure reporting, and the ambiguity-overflow ceiling.
use super::{Parser, ParserConfig};
use crate::grammar::{Combinator, Grammar, Production};
use crate::token::{Token, TokenKind, TokenStream};
use crate::{ParseError, Position};

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

fn stream(kinds: &[T]) -> TokenStream<T> {
    let zero = Position::new(1, 1);
    let mut tokens: Vec<_> = kinds
        .iter()
        .enumerate()
        .map(|(i, kind)| Token::new(*kind, i, i + 1, zero))
        .collect();
    tokens.push(Token::new(T::End, kinds.len(), kinds.len(), zero));
    TokenStream::new(tokens)
}

fn term(kind: T) -> Combinator<T> {
    Combinator::term(kind)
}

#[test]
fn an_alternative_preserves_every_matching_arm() {
    // `X -> A` and `Y -> A` are two distinct productions that both
    // complete over the same span; `Start -> Seq(Alt(X, Y), B)` reaches
    // the following `B` token from either completion. Both derivations
    // of "a" converge on the very next token-consumed node (interned by
    // token position alone), which is where ambiguity actually becomes
    // visible: one shared node with two distinct parents, not two
    // separate accepting tails.
    let productions = vec![
        Production::new("X", term(T::A)),
        Production::new("Y", term(T::A)),
        Production::new(
            "Start",
            Combinator::seq(vec![
                Combinator::alt(vec![Combinator::prod("X"), Combinator::prod("Y")]),
                term(T::B),
            ]),
        ),
    ];
    let grammar = Grammar::new(productions, "Start").expect("should validate");
    let parser = Parser::new(&grammar, ParserConfig::default());
    let accepted = parser.parse(&stream(&[T::A, T::B])).expect("should parse");
    assert_eq!(accepted.tails.len(), 1);
    assert!(
        !accepted.is_unambiguous(),
        "the token consumed right after X's and Y's completions should be one node with \
         parent edges from both, recording that the span was ambiguous"
    );
}

#[test]
fn distinct_token_counts_reaching_end_of_input_both_survive() {
    // `Start -> A | Seq(A, B)`: against "a b", the first arm's completion
    // never reaches end of input (stops after one token, leaving "b"
    // unconsumed) while the second does, so only one accepting tail
    // results; this confirms `Alt` does not spuriously accept a path that
    // did not reach the sentinel.
    let productions = vec![Production::new(
        "Start",
        Combinator::alt(vec![term(T::A), Combinator::seq(vec![term(T::A), term(T::B)])]),
    )];
    let grammar = Grammar::new(productions, "Start").expect("should validate");
    let parser = Parser::new(&grammar, ParserConfig::default());
    let accepted = parser.parse(&stream(&[T::A, T::B])).expect("should parse");
    assert_eq!(accepted.tails.len(), 1);
    assert!(accepted.is_unambiguous());
}

#[test]
fn optional_keeps_the_skip_path_alongside_the_taken_path() {
    // `Start -> Opt(A) B`: "b" alone (skip arm) and "a b" (taken arm)
    // both parse.
    let productions = vec![Production::new(
        "Start",
        Combinator::seq(vec![Combinator::opt(term(T::A)), term(T::B)]),
    )];
    let grammar = Grammar::new(productions, "Start").expect("should validate");
    let parser = Parser::new(&grammar, ParserConfig::default());

    parser.parse(&stream(&[T::B])).expect("skip arm should parse");
    parser
        .parse(&stream(&[T::A, T::B]))
        .expect("taken arm should parse");
}

#[test]
fn repeat_matches_every_iteration_count_and_terminates() {
    // `Start -> Rep(A) B`: zero, one, or many `A`s followed by `B` all
    // parse, and a run of three `A`s doesn't loop forever.
    let productions = vec![Production::new(
        "Start",
        Combinator::seq(vec![Combinator::rep(term(T::A)), term(T::B)]),
    )];
    let grammar = Grammar::new(productions, "Start").expect("should validate");
    let parser = Parser::new(&grammar, ParserConfig::default());

    parser.parse(&stream(&[T::B])).expect("zero repeats");
    parser.parse(&stream(&[T::A, T::B])).expect("one repeat");
    parser
        .parse(&stream(&[T::A, T::A, T::A, T::B]))
        .expect("three repeats");
}

#[test]
fn furthest_failure_reports_the_rightmost_expectation() {
    // `Start -> A B`: "a" alone fails after consuming the "a", expecting
    // `B` at position 1 (past the single token, at the sentinel).
    let productions = vec![Production::new(
        "Start",
        Combinator::seq(vec![term(T::A), term(T::B)]),
    )];
    let grammar = Grammar::new(productions, "Start").expect("should validate");
    let parser = Parser::new(&grammar, ParserConfig::default());

    let err = parser.parse(&stream(&[T::A])).unwrap_err();
    match err {
        ParseError::Syntax {
            furthest_position,
            expected,
        } => {
            assert_eq!(furthest_position, 1);
            assert_eq!(expected, vec![T::B]);
        }
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

#[test]
fn furthest_failure_merges_expectations_at_a_tied_position() {
    // `Start -> (A B) | (A C)`: "a" alone fails at position 1 expecting
    // either `B` or `C`, both reached by a live path of the same length.
    let productions = vec![Production::new(
        "Start",
        Combinator::alt(vec![
            Combinator::seq(vec![term(T::A), term(T::B)]),
            Combinator::seq(vec![term(T::A), term(T::A)]),
        ]),
    )];
    let grammar = Grammar::new(productions, "Start").expect("should validate");
    let parser = Parser::new(&grammar, ParserConfig::default());

    let err = parser.parse(&stream(&[T::A])).unwrap_err();
    match err {
        ParseError::Syntax {
            furthest_position,
            expected,
        } => {
            assert_eq!(furthest_position, 1);
            assert_eq!(expected, vec![T::A, T::B]);
        }
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

#[test]
fn ambiguity_overflow_trips_the_configured_ceiling() {
    // `Q` matches a run of one, two, or three `A`s, so many different
    // start positions can all complete `Q` at the same end position
    // (classic tiling ambiguity). `Start -> Seq(Rep(A), Prod(Q))` feeds
    // `Q` every prefix length of "aaaa" as a distinct start at once
    // (`Rep`'s accumulated paths span every position it passed through),
    // so three of those starts converge on end position 3, one more
    // than a ceiling of 2 allows.
    let productions = vec![
        Production::new(
            "Q",
            Combinator::alt(vec![
                term(T::A),
                Combinator::seq(vec![term(T::A), term(T::A)]),
                Combinator::seq(vec![term(T::A), term(T::A), term(T::A)]),
            ]),
        ),
        Production::new(
            "Start",
            Combinator::seq(vec![Combinator::rep(term(T::A)), Combinator::prod("Q")]),
        ),
    ];
    let grammar = Grammar::new(productions, "Start").expect("should validate");
    let parser = Parser::new(
        &grammar,
        ParserConfig {
            max_paths_per_position: 2,
        },
    );

    let err = parser.parse(&stream(&[T::A, T::A, T::A, T::A])).unwrap_err();
    assert!(matches!(
        err,
        ParseError::AmbiguityOverflow {
            limit: 2,
            position: 3
        }
    ));
}

#[test]
fn empty_input_against_a_consuming_grammar_fails_at_position_zero() {
    let productions = vec![Production::new("Start", term(T::A))];
    let grammar = Grammar::new(productions, "Start").expect("should validate");
    let parser = Parser::new(&grammar, ParserConfig::default());

    let err = parser.parse(&stream(&[])).unwrap_err();
    match err {
        ParseError::Syntax {
            furthest_position,
            expected,
        } => {
            assert_eq!(furthest_position, 0);
            assert_eq!(expected, vec![T::A]);
        }
        other => panic!("expected a syntax error, got {:?}", other),
    }
}
