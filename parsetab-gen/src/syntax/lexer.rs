//! Lexer for grammar text.
//!
//! Built on [`logos`]. Input is lexed one line at a time, since a line is
//! the unit of the grammar syntax:
//!
//! ```text
//! -- comment to end of line
//! %start E
//! %terminals + * ( ) id
//! E  -> T E'
//! E' -> + T E' |
//! ```
//!
//! Whitespace separates symbols; `|` separates alternatives even without
//! surrounding spaces. Any other run of non-blank characters is a symbol.

use anyhow::{Result, bail};
use logos::Logos;
use smartstring::alias::String;

/// Tokens of one grammar line.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// The production arrow (`->`).
    Prod,

    /// The alternative separator (`|`).
    Bar,

    /// The `%start` directive.
    Start,

    /// The `%terminals` directive.
    Terminals,

    /// A grammar symbol (terminal or non-terminal).
    Sym(String),
}

/// Raw tokens recognized by the `logos`-based lexer.
#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\r\f\n]+")]
enum LogosToken {
    /// A comment beginning with `--`, ignored.
    #[regex(r"--[^\n]*")]
    Comment,

    #[token("->")]
    Prod,

    #[token("|")]
    Bar,

    #[token("%start")]
    Start,

    #[token("%terminals")]
    Terminals,

    /// Any other run of non-blank characters other than `|`.
    #[regex(r"[^ \t\r\f\n|]+")]
    Sym,
}

/// Lexer over a single line of grammar text.
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, LogosToken>,
}

impl<'source> Lexer<'source> {
    pub fn new(input: &'source str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }

    /// Returns the next token, `Ok(None)` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        while let Some(kind) = self.inner.next() {
            let slice = self.inner.slice();
            return match kind {
                Ok(LogosToken::Comment) => continue,
                Ok(LogosToken::Prod) => Ok(Some(Token::Prod)),
                Ok(LogosToken::Bar) => Ok(Some(Token::Bar)),
                Ok(LogosToken::Start) => Ok(Some(Token::Start)),
                Ok(LogosToken::Terminals) => Ok(Some(Token::Terminals)),
                Ok(LogosToken::Sym) => Ok(Some(Token::Sym(slice.into()))),
                Err(()) => bail!(
                    "unexpected input {:?} at column {}",
                    slice,
                    self.inner.span().start + 1
                ),
            };
        }
        Ok(None)
    }

    /// Tokenizes the whole input.
    pub fn tokenize_all(input: &'source str) -> Result<Vec<Token>> {
        let mut lex = Lexer::new(input);
        let mut out = Vec::new();
        while let Some(tok) = lex.next_token()? {
            out.push(tok);
        }
        Ok(out)
    }
}
