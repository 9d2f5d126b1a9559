//! FOLLOW sets of non-terminals.

use crate::first::first_of_sequence;
use crate::grammar::Grammar;
use crate::sets::{FirstSets, FollowSets};
use crate::symtab::Symbol;

/// Computes FOLLOW sets for all non-terminals.
///
/// FOLLOW(start) is seeded with `$`; everything else starts empty and
/// [`follow_pass`] is repeated until nothing changes. `first` must already
/// be at its fixed point.
pub fn follow_sets(grammar: &Grammar, first: &FirstSets) -> FollowSets {
    let mut follow = FollowSets::for_grammar(grammar);
    follow.insert(grammar.start(), Symbol::END);
    let mut passes = 1;
    while follow_pass(grammar, first, &mut follow) {
        passes += 1;
    }
    log::debug!("FOLLOW: fixed point after {} pass(es)", passes);
    follow
}

/// Runs one pass over all productions, growing `follow` in place.
///
/// For every occurrence of a non-terminal `B` in `A -> α B β`, adds
/// FIRST(β) \ {ε} to FOLLOW(B), and all of FOLLOW(A) when β can vanish.
/// Each occurrence of `B` is handled with its own suffix.
pub fn follow_pass(grammar: &Grammar, first: &FirstSets, follow: &mut FollowSets) -> bool {
    let mut changed = false;
    for rule in grammar.rules() {
        let rhs = rule.rhs.symbols();
        for (i, &b) in rhs.iter().enumerate() {
            if !grammar.is_nonterminal(b) {
                continue;
            }
            let first_beta = first_of_sequence(&rhs[i + 1..], first, grammar);
            changed |= follow.extend(
                b,
                first_beta.iter().copied().filter(|&t| t != Symbol::EPSILON),
            );
            if first_beta.contains(&Symbol::EPSILON) {
                let follow_lhs: Vec<Symbol> =
                    follow.get(rule.lhs).into_iter().flatten().copied().collect();
                changed |= follow.extend(b, follow_lhs);
            }
        }
    }
    changed
}
