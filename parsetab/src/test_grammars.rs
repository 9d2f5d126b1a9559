//! Grammars shared by the unit tests.

use crate::grammar::{Grammar, GrammarBuilder};
use crate::sets::SymbolSets;
use std::collections::BTreeSet;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `E -> T E'`, `E' -> + T E' | ε`, `T -> F T'`, `T' -> * F T' | ε`, `F -> ( E ) | id`
pub fn ll_expr() -> Grammar {
    GrammarBuilder::new()
        .rule("E", &["T", "E'"])
        .rule("E'", &["+", "T", "E'"])
        .rule("E'", &[])
        .rule("T", &["F", "T'"])
        .rule("T'", &["*", "F", "T'"])
        .rule("T'", &[])
        .rule("F", &["(", "E", ")"])
        .rule("F", &["id"])
        .build()
        .unwrap()
}

/// `E -> E + T | T`, `T -> T * F | F`, `F -> ( E ) | id`
pub fn lr_expr() -> Grammar {
    GrammarBuilder::new()
        .rule("E", &["E", "+", "T"])
        .rule("E", &["T"])
        .rule("T", &["T", "*", "F"])
        .rule("T", &["F"])
        .rule("F", &["(", "E", ")"])
        .rule("F", &["id"])
        .build()
        .unwrap()
}

/// `S -> a | a`
pub fn duplicate_alt() -> Grammar {
    GrammarBuilder::new()
        .rule("S", &["a"])
        .rule("S", &["a"])
        .build()
        .unwrap()
}

/// `S -> i S | i S e S | a`, the dangling else.
pub fn dangling_else() -> Grammar {
    GrammarBuilder::new()
        .rule("S", &["i", "S"])
        .rule("S", &["i", "S", "e", "S"])
        .rule("S", &["a"])
        .build()
        .unwrap()
}

/// Names in the set of `nt`, for readable assertions.
pub fn names<'g>(g: &'g Grammar, sets: &SymbolSets, nt: &str) -> BTreeSet<&'g str> {
    let nt = g.symbol(nt).unwrap();
    sets.get(nt)
        .unwrap()
        .iter()
        .map(|&s| g.name(s))
        .collect()
}

pub fn set<'a>(items: &[&'a str]) -> BTreeSet<&'a str> {
    items.iter().copied().collect()
}
