//! FIRST sets of non-terminals and of symbol sequences.

use crate::grammar::Grammar;
use crate::sets::FirstSets;
use crate::symtab::Symbol;
use std::collections::BTreeSet;

/// Computes FIRST sets for all non-terminals.
///
/// Starts from empty sets and repeats [`first_pass`] until a full pass over
/// every production adds nothing. Sets only grow and are bounded by the
/// terminal alphabet, so the loop terminates. Terminals get no entry; their
/// FIRST is the terminal itself.
pub fn first_sets(grammar: &Grammar) -> FirstSets {
    let mut first = FirstSets::for_grammar(grammar);
    let mut passes = 1;
    while first_pass(grammar, &mut first) {
        passes += 1;
    }
    log::debug!("FIRST: fixed point after {} pass(es)", passes);
    first
}

/// Runs one pass over all productions, growing `first` in place.
///
/// Returns `true` if any set changed. A pass over sets that are already at
/// the fixed point returns `false`.
pub fn first_pass(grammar: &Grammar, first: &mut FirstSets) -> bool {
    let mut changed = false;
    for rule in grammar.rules() {
        let lhs = rule.lhs;
        let mut all_nullable = true;
        for &sym in rule.rhs.symbols() {
            if grammar.is_terminal(sym) {
                // `ε` lands here for the empty production
                changed |= first.insert(lhs, sym);
                all_nullable = false;
                break;
            }
            // Clone FIRST(sym) to avoid simultaneous borrow
            let first_sym: Vec<Symbol> = first
                .get(sym)
                .into_iter()
                .flatten()
                .copied()
                .filter(|&t| t != Symbol::EPSILON)
                .collect();
            changed |= first.extend(lhs, first_sym);
            if !first.contains(sym, Symbol::EPSILON) {
                all_nullable = false;
                break;
            }
        }
        if all_nullable {
            changed |= first.insert(lhs, Symbol::EPSILON);
        }
    }
    changed
}

/// FIRST of an arbitrary symbol sequence.
///
/// A single left-to-right scan over `seq` using already finished per-symbol
/// FIRST sets: collects FIRST(B) \ {ε} across nullable non-terminals, stops
/// at the first terminal or non-nullable non-terminal, and adds `ε` only if
/// the whole sequence can vanish. The empty sequence yields `{ε}`.
pub fn first_of_sequence(seq: &[Symbol], first: &FirstSets, grammar: &Grammar) -> BTreeSet<Symbol> {
    let mut out = BTreeSet::new();
    for &sym in seq {
        if grammar.is_terminal(sym) {
            out.insert(sym);
            return out;
        }
        let Some(first_sym) = first.get(sym) else {
            return out;
        };
        out.extend(first_sym.iter().copied().filter(|&t| t != Symbol::EPSILON));
        if !first_sym.contains(&Symbol::EPSILON) {
            return out;
        }
    }
    out.insert(Symbol::EPSILON);
    out
}
