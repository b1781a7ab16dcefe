//! End-to-end lex-then-parse tests against the representative Calcium
//! grammar, covering the six concrete scenarios of spec §8 (scenarios 5
//! and 6 adapted to this module's reduced grammar; see the comments on
//! each test for what changed and why).
use super::grammar::productions;
use super::{grammar, lexer, parse, CalciumToken};
use crate::engine::{Accepted, Parser, ParserConfig};
use crate::grammar::Grammar;
use crate::ParseError;

fn accept(source: &str) -> Accepted {
    match parse(source) {
        Ok(accepted) => accepted,
        Err(err) => panic!("expected {:?} to parse, got {}", source, err),
    }
}

fn reject(source: &str) -> ParseError<CalciumToken> {
    match parse(source) {
        Ok(_) => panic!("expected {:?} to fail to parse", source),
        Err(err) => err,
    }
}

/// Scenario 1: `package foo.bar ;` parses as a single accepting path,
/// `PackageDeclaration` consuming the keyword, two identifiers, the dot,
/// and the trailing optional semicolon.
#[test]
fn package_declaration_with_trailing_semicolon() {
    let accepted = accept("package foo.bar; typedef T : _int;");
    assert_eq!(accepted.tails.len(), 1);
    assert!(accepted.is_unambiguous());
}

/// Scenario 2: `import x, y from a.b;` parses as exactly one accepting
/// path; `ImportNames` merges the two `ImportName` entries under one
/// `ImportNames` node (there is only one way to split "x, y" into
/// import names, so the single accepting path is also unambiguous).
#[test]
fn import_names_and_from_name() {
    let accepted = accept("import x, y from a.b; typedef T : _int;");
    assert_eq!(accepted.tails.len(), 1);
    assert!(accepted.is_unambiguous());
}

/// Scenario 3: `typedef T : _int;` succeeds via `TypedefBody`'s
/// semicolon arm; the curly-brace arm fails silently (spec §4.2.2: a
/// failing `Alternative` arm is discarded, not propagated).
#[test]
fn typedef_with_semicolon_body() {
    let accepted = accept("typedef T : _int;");
    assert_eq!(accepted.tails.len(), 1);
}

/// Scenario 4: `func f() -> void {}` inside a typedef body parses with
/// `MethodDeclaration` taking empty parameters and an empty block body.
#[test]
fn method_declaration_with_empty_parameters_and_block() {
    let accepted = accept("typedef T : _int { func f() -> void {} }");
    assert_eq!(accepted.tails.len(), 1);
}

/// Adapted scenario 5: the original scenario describes `x` alone
/// failing at the end-of-input position against the *full* Calcium
/// grammar's first-token set. This module's grammar is a representative
/// subset (SPEC_FULL.md §6), so the furthest failure an unadorned
/// identifier reaches here is position 0 (`TypeDeclaration` expects
/// `typedef`, the only `TypeDeclaration` arm this grammar implements),
/// not position 1. The furthest-failure mechanism itself is exercised
/// identically; only the concrete expected-set differs because the
/// grammar is smaller.
#[test]
fn bare_identifier_fails_expecting_typedef() {
    let err = reject("x");
    match err {
        ParseError::Syntax {
            furthest_position,
            expected,
        } => {
            assert_eq!(furthest_position, 0);
            assert_eq!(expected, vec![CalciumToken::Typedef]);
        }
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

/// Scenario 6: `public public typedef T : _int;` fails at the second
/// `public`: `DeclarationEncapsulation` (here, directly `Optional(public
/// | protected | private)`) consumes the first `public`, and
/// `TypeDeclaration` then expects `typedef` at position 1 and finds a
/// second `public` instead, matching the original scenario's furthest
/// position even though this grammar reaches it by a shorter path
/// (no `struct`/`enum`/`union` declarations to also try).
#[test]
fn double_encapsulation_keyword_fails_at_second_occurrence() {
    let err = reject("public public typedef T : _int;");
    match err {
        ParseError::Syntax {
            furthest_position,
            expected,
        } => {
            assert_eq!(furthest_position, 1);
            assert_eq!(expected, vec![CalciumToken::Typedef]);
        }
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

/// `Optional` preservation (spec §8): `DeclarationEncapsulation`'s
/// absence and presence are both still live after `TopLevelTypeDeclaration`
/// tries it, so a bare `typedef T : _int;` (no encapsulation keyword at
/// all) parses too.
#[test]
fn typedef_without_encapsulation_keyword_still_parses() {
    accept("typedef T : _int;");
}

/// A `func` keyword token is also a valid `Identifier` via the
/// reserved-word parent/child relation (spec §4.1), so `Type` (rooted
/// directly, for this test) admits `func ( )` as a `TypeName`,
/// `Identifier` "func" applied to an empty parenthesized argument list,
/// even though `func` never matches the plain identifier pattern
/// itself. `func ( ) -> void`, by contrast, only the `FunctionType` arm
/// can consume to completion, since no `TypeName` suffix accepts a
/// trailing `-> void`. Together these show `Term(Identifier)` genuinely
/// accepting a reserved-word token, not just a coincidental case the
/// grammar never reaches.
#[test]
fn reserved_word_token_satisfies_an_identifier_terminal_ref() {
    let type_grammar =
        Grammar::new(productions(), "Type").expect("Type-rooted grammar should validate");
    let parser = Parser::new(&type_grammar, ParserConfig::default());

    let as_type_name = lexer()
        .tokenize(&crate::Code::from("func ( )"))
        .expect("should lex");
    parser
        .parse(&as_type_name)
        .expect("`func ( )` should parse as a TypeName applying the identifier `func`");

    let as_function_type = lexer()
        .tokenize(&crate::Code::from("func ( ) -> void"))
        .expect("should lex");
    parser
        .parse(&as_function_type)
        .expect("`func ( ) -> void` should parse as a FunctionType");
}

/// The lexer's reserved-word classification (spec §8 "Keyword
/// classification"): a lexeme spelled exactly like a reserved word is
/// classified as that reserved word, not as a bare identifier, even
/// though the identifier pattern would also match it.
#[test]
fn reserved_word_is_classified_not_identifier() {
    let stream = lexer()
        .tokenize(&crate::Code::from("typedef"))
        .expect("should lex");
    assert_eq!(stream.get(0).kind, CalciumToken::Typedef);
}

/// The longest-match invariant (spec §8): `_ubyte` must lex as the
/// single reserved word `_ubyte`, not as the identifier `_u` (there is
/// no such pattern) or split into pieces; maximal munch picks the
/// longest prefix any pattern accepts at that offset.
#[test]
fn longest_match_wins_over_shorter_prefix_reserved_words() {
    let stream = lexer()
        .tokenize(&crate::Code::from("_ubyte _uint"))
        .expect("should lex");
    assert_eq!(stream.get(0).kind, CalciumToken::UByte);
    assert_eq!(stream.get(1).kind, CalciumToken::UInt);
}

/// Sentinel presence (spec §8): every successful lex ends with exactly
/// one end-of-input token, whose span is empty.
#[test]
fn lexing_ends_with_one_sentinel_token() {
    let stream = lexer()
        .tokenize(&crate::Code::from("package a;"))
        .expect("should lex");
    let eoi = stream.get(stream.end_of_input_position());
    assert!(eoi.kind.is_end_of_input());
    assert_eq!(eoi.start, eoi.end);
}

#[test]
fn grammar_validates() {
    grammar().expect("representative grammar should validate");
}
