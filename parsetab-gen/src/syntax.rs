//! Grammar text front end.
//!
//! Turns line-oriented grammar text into a validated [`Grammar`]:
//!
//! ```text
//! E  -> T E'
//! E' -> + T E' |
//! T  -> F T'
//! T' -> * F T' | ε
//! F  -> ( E ) | id
//! ```
//!
//! - one rule per line, alternatives separated by `|`, symbols by blanks;
//! - an empty alternative (or a lone `ε`) is the epsilon production;
//! - lines with the same left-hand side add alternatives;
//! - the first left-hand side is the start symbol unless `%start X` says otherwise;
//! - `%terminals a b c` declares terminals, after which any undefined,
//!   undeclared symbol is an error;
//! - `--` starts a comment.

mod lexer;
mod parser;

pub use lexer::{Lexer, Token};
pub use parser::Line;

use anyhow::{Context, Result, anyhow};
use chumsky::Parser;
use parsetab::{Grammar, GrammarBuilder};

/// Parses grammar text into a [`GrammarBuilder`] without validating it.
pub fn parse_rules(text: &str) -> Result<GrammarBuilder> {
    let mut builder = GrammarBuilder::new();
    for (n, text_line) in text.lines().enumerate() {
        let line_no = n + 1;
        let toks = Lexer::tokenize_all(text_line).with_context(|| format!("line {line_no}"))?;
        let line = parser::parser()
            .parse(toks.as_slice())
            .into_result()
            .map_err(|_| {
                anyhow!(
                    "line {line_no}: expected `LHS -> symbols | ...`, `%start X` or `%terminals ...`, found {:?}",
                    text_line.trim()
                )
            })?;
        match line {
            Line::Rule { lhs, alts } => {
                for alt in &alts {
                    let rhs: Vec<&str> = alt.iter().map(|s| s.as_str()).collect();
                    builder.rule(&lhs, &rhs);
                }
                log::trace!("line {}: {} alternative(s) for {}", line_no, alts.len(), lhs);
            }
            Line::Start(name) => {
                builder.start(&name);
            }
            Line::Terminals(names) => {
                let names: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
                builder.terminals(&names);
            }
            Line::Blank => {}
        }
    }
    Ok(builder)
}

/// Parses and validates grammar text.
pub fn parse_grammar(text: &str) -> Result<Grammar> {
    let grammar = parse_rules(text)?.build()?;
    Ok(grammar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parsetab::GrammarError;

    const EXPR: &str = "\
-- classic expression grammar
E  -> T E'
E' -> + T E' |
T  -> F T'
T' -> * F T' | ε
F  -> ( E ) | id
";

    #[test]
    fn expression_grammar() {
        let g = parse_grammar(EXPR).unwrap();
        assert_eq!(g.rules().len(), 8);
        assert_eq!(g.name(g.start()), "E");
        assert!(g.find_rule("E'", &[]).is_some());
        assert!(g.find_rule("T'", &[]).is_some());
        assert!(g.find_rule("F", &["(", "E", ")"]).is_some());
        let terms: Vec<_> = g.terminals().iter().map(|&t| g.name(t)).collect();
        assert_eq!(terms, ["+", "*", "(", ")", "id"]);
    }

    #[test]
    fn repeated_lhs_appends_alternatives() {
        let g = parse_grammar("S -> a\nS -> b | c\n").unwrap();
        let s = g.symbol("S").unwrap();
        assert_eq!(g.productions(s).len(), 3);
    }

    #[test]
    fn start_directive() {
        let g = parse_grammar("A -> a\n%start B\nB -> A b\n").unwrap();
        assert_eq!(g.name(g.start()), "B");
    }

    #[test]
    fn terminals_directive_rejects_typos() {
        let err = parse_grammar("%terminals a b\nS -> a B\nB -> b | bb\n").unwrap_err();
        let err = err.downcast::<GrammarError>().unwrap();
        assert_eq!(
            err,
            GrammarError::UndefinedSymbol {
                lhs: "B".into(),
                symbol: "bb".into()
            }
        );
    }

    #[test]
    fn syntax_errors_name_the_line() {
        let err = parse_grammar("S -> a\n\n-> b\n").unwrap_err();
        assert!(err.to_string().starts_with("line 3:"), "{err}");
    }

    #[test]
    fn empty_text_is_rejected() {
        let err = parse_grammar("-- nothing here\n\n").unwrap_err();
        assert_eq!(
            err.downcast::<GrammarError>().unwrap(),
            GrammarError::EmptyGrammar
        );
    }
}
