//! Builds the Calcium [`Lexer`], grounded bit-exactly in spec §6 and in
//! the terminal ordering `CalciumLexer._terminals`/`_ignored` declare in
//! `examples/original_source/calcium/lexer.py`: the identifier pattern
//! (with every reserved word as a child), the two literal patterns, the
//! punctuation trie, and the three ignored patterns, in that priority
//! order.
use super::token::CalciumToken;
use crate::lexer::{Lexer, Pattern, Punctuation, Terminal};
use std::rc::Rc;

/// Reserved spellings in the exact order spec §6 lists them, each paired
/// with its token kind. Declaration order doubles as priority order for
/// the (never-exercised, since every spelling is distinct) case of two
/// children matching the same lexeme.
const RESERVED_WORDS: &[(&str, CalciumToken)] = &[
    ("abstract", CalciumToken::Abstract),
    ("aliasable", CalciumToken::Aliasable),
    ("as", CalciumToken::As),
    ("atomic", CalciumToken::Atomic),
    ("bare", CalciumToken::Bare),
    ("bool", CalciumToken::Bool),
    ("c", CalciumToken::CLinkage),
    ("const", CalciumToken::Const),
    ("enum", CalciumToken::Enum),
    ("final", CalciumToken::Final),
    ("from", CalciumToken::From),
    ("func", CalciumToken::Func),
    ("import", CalciumToken::Import),
    ("local", CalciumToken::Local),
    ("noreturn", CalciumToken::Noreturn),
    ("override", CalciumToken::Override),
    ("package", CalciumToken::Package),
    ("packed", CalciumToken::Packed),
    ("plain", CalciumToken::Plain),
    ("private", CalciumToken::Private),
    ("protected", CalciumToken::Protected),
    ("public", CalciumToken::Public),
    ("pure", CalciumToken::Pure),
    ("restrict", CalciumToken::Restrict),
    ("sealed", CalciumToken::Sealed),
    ("stable", CalciumToken::Stable),
    ("static", CalciumToken::Static),
    ("strict", CalciumToken::Strict),
    ("struct", CalciumToken::Struct),
    ("this", CalciumToken::This),
    ("typedef", CalciumToken::Typedef),
    ("union", CalciumToken::Union),
    ("unsafe", CalciumToken::Unsafe),
    ("unused", CalciumToken::Unused),
    ("var", CalciumToken::Var),
    ("void", CalciumToken::Void),
    ("volatile", CalciumToken::Volatile),
    ("wide", CalciumToken::Wide),
    ("_byte", CalciumToken::Byte),
    ("_char", CalciumToken::Char),
    ("_double", CalciumToken::Double),
    ("_float", CalciumToken::Float),
    ("_int", CalciumToken::Int),
    ("_long", CalciumToken::Long),
    ("_short", CalciumToken::Short),
    ("_ubyte", CalciumToken::UByte),
    ("_uint", CalciumToken::UInt),
    ("_ulong", CalciumToken::ULong),
    ("_ushort", CalciumToken::UShort),
    // Spelled without the hyphen spec §6's prose uses; see the
    // doc comment on `CalciumToken` for why.
    ("blockstatement", CalciumToken::BlockStatement),
    ("expression", CalciumToken::Expression),
];

/// Build the Calcium lexer: the identifier pattern (reserved words as
/// children), the string and integer literal patterns, the punctuation
/// trie, and the three ignored patterns, ordered the way
/// `CalciumLexer._terminals` orders them.
pub fn lexer() -> Lexer<CalciumToken> {
    let mut identifier = Pattern::new(CalciumToken::Identifier, r"^[A-Za-z_][A-Za-z0-9_]*")
        .expect("identifier pattern is a valid, non-nullable regex");
    for (spelling, kind) in RESERVED_WORDS {
        identifier = identifier.with_reserved(spelling, *kind);
    }

    let string_literal = Pattern::new(CalciumToken::StringLiteral, r#"^"([^"\\\r\n]|\\.)*""#)
        .expect("string literal pattern is a valid, non-nullable regex");

    let integer_literal = Pattern::new(CalciumToken::IntegerLiteral, r"^[0-9]+")
        .expect("integer literal pattern is a valid, non-nullable regex");

    let punctuation = Punctuation::new(vec![
        ("[", CalciumToken::LeftSquareBracket),
        ("]", CalciumToken::RightSquareBracket),
        ("(", CalciumToken::LeftParenthesis),
        (")", CalciumToken::RightParenthesis),
        ("{", CalciumToken::LeftCurlyBracket),
        ("}", CalciumToken::RightCurlyBracket),
        ("...", CalciumToken::TripleFullStop),
        (".", CalciumToken::FullStop),
        ("->", CalciumToken::HyphenGreaterThan),
        ("&", CalciumToken::Ampersand),
        ("?", CalciumToken::Question),
        (":", CalciumToken::Colon),
        (";", CalciumToken::Semicolon),
        ("=", CalciumToken::Equals),
        (",", CalciumToken::Comma),
        ("@", CalciumToken::At),
    ])
    .expect("punctuation spellings are pairwise distinct");

    let whitespace = Pattern::new(CalciumToken::Ignored, r"^[ \t\r\n]+")
        .expect("whitespace pattern is a valid, non-nullable regex")
        .into_ignored();
    let line_comment = Pattern::new(CalciumToken::Ignored, r"^//[^\r\n]*")
        .expect("line comment pattern is a valid, non-nullable regex")
        .into_ignored();
    let block_comment = Pattern::new(CalciumToken::Ignored, r"^/\*([^*]|\*[^/])*\*/")
        .expect("block comment pattern is a valid, non-nullable regex")
        .into_ignored();

    let terminals: Vec<Rc<dyn Terminal<CalciumToken>>> = vec![
        Rc::new(identifier),
        Rc::new(string_literal),
        Rc::new(integer_literal),
        Rc::new(punctuation),
        Rc::new(whitespace),
        Rc::new(line_comment),
        Rc::new(block_comment),
    ];
    Lexer::new(terminals)
}
