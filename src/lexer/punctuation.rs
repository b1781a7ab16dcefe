use super::{Punctuation, Terminal};
use crate::token::TokenKind;
use crate::{Code, FieldTree};

impl<TK: TokenKind> Punctuation<TK> {
    /// Build a punctuation matcher from `(spelling, kind)` pairs. Panics
    /// if two spellings collide (a grammar-author error, not a runtime
    /// one, mirroring the teacher's `Punctuations::new` validation).
    pub fn new(entries: Vec<(&str, TK)>) -> Result<Self, String> {
        let mut tree = FieldTree::new();
        for (spelling, kind) in entries {
            if tree.insert(spelling.as_bytes(), kind).is_err() {
                return Err(format!("Duplicate punctuation spelling '{}'.", spelling));
            }
        }
        Ok(Self { tree })
    }
}

impl<TK: TokenKind> Terminal<TK> for Punctuation<TK> {
    fn longest_match(&self, code: &Code, offset: usize) -> Option<(usize, TK)> {
        let (kind, length) = self.tree.find(&code.value[offset..])?;
        if length == 0 {
            return None;
        }
        Some((length, kind))
    }
}
