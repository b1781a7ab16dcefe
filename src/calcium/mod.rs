//! A demonstration grammar instance that exercises the lexer and parser
//! engines against the Calcium lexicon and a representative slice of the
//! Calcium grammar (spec §6; SPEC_FULL.md §6). This module is not the
//! crate's load-bearing content; it exists so the engine's claims
//! (longest-match lexing, reserved-word classification, ambiguity
//! preservation, furthest-failure reporting) can be exercised end to end
//! against real syntax instead of only against synthetic toy grammars.
mod grammar;
mod lexicon;
mod token;

#[cfg(test)]
mod __tests__;

pub use grammar::grammar;
pub use lexicon::lexer;
pub use token::CalciumToken;

use crate::engine::{Accepted, Parser, ParserConfig};
use crate::{Code, ParseError};

/// Lex and parse `source` against the representative Calcium grammar,
/// the way a caller assembling the lexer and parser engines over a
/// concrete lexicon/grammar pair would (spec §2's "data flow: character
/// stream -> Lexer Engine -> token stream -> Parser Engine -> parse
/// DAG").
///
/// Panics if the representative grammar itself fails to validate; that
/// would mean the `grammar` module regressed, not something a caller can
/// act on, so it is not folded into the returned `Result`.
pub fn parse(source: &str) -> Result<Accepted, ParseError<CalciumToken>> {
    let code = Code::from(source);
    let stream = lexer().tokenize(&code).map_err(ParseError::Lex)?;
    let grammar = grammar().expect("representative Calcium grammar should validate");
    let parser = Parser::new(&grammar, ParserConfig::default());
    parser.parse(&stream)
}
