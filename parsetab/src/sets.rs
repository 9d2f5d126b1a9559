use crate::grammar::Grammar;
use crate::symtab::Symbol;
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// A per-non-terminal set of terminals, as used for FIRST and FOLLOW.
///
/// Rows exist for every non-terminal of the grammar the table was created
/// for, in definition order. Sets only ever grow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolSets {
    sets: IndexMap<Symbol, BTreeSet<Symbol>>,
}

/// FIRST sets; may contain `ε`.
pub type FirstSets = SymbolSets;

/// FOLLOW sets; may contain `$`, never `ε`.
pub type FollowSets = SymbolSets;

impl SymbolSets {
    /// One empty set per non-terminal of `grammar`.
    pub fn for_grammar(grammar: &Grammar) -> Self {
        Self {
            sets: grammar
                .nonterminals()
                .map(|nt| (nt, BTreeSet::new()))
                .collect(),
        }
    }

    pub fn get(&self, nt: Symbol) -> Option<&BTreeSet<Symbol>> {
        self.sets.get(&nt)
    }

    pub fn contains(&self, nt: Symbol, t: Symbol) -> bool {
        self.sets.get(&nt).is_some_and(|s| s.contains(&t))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &BTreeSet<Symbol>)> {
        self.sets.iter().map(|(&nt, s)| (nt, s))
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Adds `t` to the set of `nt`, returning `true` if it was new.
    pub(crate) fn insert(&mut self, nt: Symbol, t: Symbol) -> bool {
        self.sets.entry(nt).or_default().insert(t)
    }

    /// Adds every element of `ts`, returning `true` if anything was new.
    pub(crate) fn extend<I: IntoIterator<Item = Symbol>>(&mut self, nt: Symbol, ts: I) -> bool {
        let set = self.sets.entry(nt).or_default();
        let before = set.len();
        set.extend(ts);
        set.len() != before
    }
}
