use super::{Pattern, PatternLogger, Terminal};
use crate::token::TokenKind;
use crate::{Code, Log};
use once_cell::unsync::OnceCell;
use regex::bytes::Regex;

impl<TK: TokenKind> Pattern<TK> {
    /// A pattern with no reserved-word refinement: every match resolves
    /// to `kind`. `pattern` must not match the empty string, since
    /// Calcium's termination guarantee (spec §4.1) depends on every
    /// winning match advancing the offset.
    pub fn new(kind: TK, pattern: &str) -> Result<Self, String> {
        let regexp = Regex::new(pattern)
            .map_err(|err| format!("Pattern should be a valid regex expression.{:?}", err))?;
        if regexp.is_match(b"") {
            return Err(format!(
                "Regex expression '{}' should not be nullable.",
                regexp.as_str()
            ));
        }
        Ok(Self {
            kind,
            regexp,
            children: Vec::new(),
            ignored: false,
            log: OnceCell::new(),
        })
    }

    /// Mark this pattern's matches as non-structural (whitespace,
    /// comments): a winning match is consumed but never emitted as a
    /// token.
    pub fn into_ignored(mut self) -> Self {
        self.ignored = true;
        self
    }

    /// Register a reserved spelling that refines a match of the full
    /// pattern into a more specific kind (an identifier pattern whose
    /// lexeme is exactly `public` should lex as the `Public` keyword
    /// rather than a plain identifier).
    pub fn with_reserved(mut self, spelling: &'static str, kind: TK) -> Self {
        debug_assert!(
            self.regexp.is_match(spelling.as_bytes()),
            "reserved spelling '{}' must itself match the parent pattern",
            spelling
        );
        self.children.push((spelling, kind));
        self
    }

    /// Set a log label to debug this pattern. Based on the level of the
    /// [`Log`], the pattern traces its entry and match outcome at each
    /// offset it is tried against.
    pub fn set_log(&self, log: Log<&'static str>) -> Result<(), String> {
        self.log
            .set(log)
            .map_err(|err| format!("Log label {} is already assigned.", err))
    }
}

impl<TK> PatternLogger for Pattern<TK> {
    fn log_cell(&self) -> &OnceCell<Log<&'static str>> {
        &self.log
    }
}

impl<TK: TokenKind> Terminal<TK> for Pattern<TK> {
    fn longest_match(&self, code: &Code, offset: usize) -> Option<(usize, TK)> {
        self.log_enter();
        let result = self.regexp.find(&code.value[offset..]).and_then(|m| {
            debug_assert_eq!(m.start(), 0);
            let length = m.end();
            if length == 0 {
                return None;
            }
            let lexeme = &code.value[offset..offset + length];
            let kind = self
                .children
                .iter()
                .find(|(spelling, _)| spelling.as_bytes() == lexeme)
                .map(|(_, kind)| *kind)
                .unwrap_or(self.kind);
            Some((length, kind))
        });
        self.log_result(offset, code, &result);
        result
    }

    fn is_ignored(&self) -> bool {
        self.ignored
    }
}
