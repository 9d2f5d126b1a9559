//! LL(1) predictive parsing table.
//!
//! The table maps `(non-terminal, lookahead terminal)` to the production to
//! expand. Construction is total: a cell claimed by more than one production
//! keeps the last one written, and every collision is recorded as an
//! [`Ll1Conflict`] so callers can decide whether the grammar is acceptable.

use crate::error::GrammarError;
use crate::first::first_of_sequence;
use crate::grammar::{Grammar, ProdId};
use crate::sets::{FirstSets, FollowSets};
use crate::symtab::Symbol;
use indexmap::IndexMap;

/// Two productions competing for one LL(1) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ll1Conflict {
    pub nonterminal: Symbol,
    pub terminal: Symbol,
    /// Production that held the cell before.
    pub existing: ProdId,
    /// Production that overwrote it.
    pub incoming: ProdId,
}

impl Ll1Conflict {
    /// Human-readable description, e.g. `conflict at [S, a]: S -> a vs S -> a`.
    pub fn describe(&self, grammar: &Grammar) -> String {
        format!(
            "conflict at [{}, {}]: {} vs {}",
            grammar.name(self.nonterminal),
            grammar.name(self.terminal),
            grammar.fmt_rule(self.existing),
            grammar.fmt_rule(self.incoming),
        )
    }
}

/// The LL(1) table together with the conflicts found while filling it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ll1Table {
    cells: IndexMap<Symbol, IndexMap<Symbol, ProdId>>,
    conflicts: Vec<Ll1Conflict>,
}

impl Ll1Table {
    /// Fills the table from finished FIRST and FOLLOW sets.
    ///
    /// For each production `A -> α`, every terminal of FIRST(α) \ {ε} selects
    /// it; if `ε ∈ FIRST(α)`, so does every terminal of FOLLOW(A), `$`
    /// included.
    pub fn build(grammar: &Grammar, first: &FirstSets, follow: &FollowSets) -> Self {
        let mut table = Self {
            cells: grammar
                .nonterminals()
                .map(|nt| (nt, IndexMap::new()))
                .collect(),
            conflicts: Vec::new(),
        };
        for nt in grammar.nonterminals() {
            for &prod in grammar.productions(nt) {
                let first_alpha = first_of_sequence(grammar.rule(prod).rhs.symbols(), first, grammar);
                for &t in first_alpha.iter().filter(|&&t| t != Symbol::EPSILON) {
                    table.set(nt, t, prod);
                }
                if first_alpha.contains(&Symbol::EPSILON) {
                    for &t in follow.get(nt).into_iter().flatten() {
                        table.set(nt, t, prod);
                    }
                }
            }
        }
        if !table.conflicts.is_empty() {
            log::debug!("LL(1): {} conflict(s)", table.conflicts.len());
        }
        table
    }

    fn set(&mut self, nt: Symbol, t: Symbol, prod: ProdId) {
        let row = self.cells.entry(nt).or_default();
        if let Some(existing) = row.insert(t, prod) {
            if existing != prod {
                log::debug!("LL(1) conflict at ({:?}, {:?}): {} vs {}", nt, t, existing, prod);
                self.conflicts.push(Ll1Conflict {
                    nonterminal: nt,
                    terminal: t,
                    existing,
                    incoming: prod,
                });
            }
        }
    }

    /// The production selected for `nt` on lookahead `t`.
    pub fn get(&self, nt: Symbol, t: Symbol) -> Option<ProdId> {
        self.cells.get(&nt)?.get(&t).copied()
    }

    /// Filled cells of `nt`, keyed by terminal in fill order.
    pub fn row(&self, nt: Symbol) -> Option<&IndexMap<Symbol, ProdId>> {
        self.cells.get(&nt)
    }

    pub fn conflicts(&self) -> &[Ll1Conflict] {
        &self.conflicts
    }

    pub fn is_ll1(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Rejects a table with conflicts.
    pub fn strict(self) -> Result<Self, GrammarError> {
        if self.is_ll1() {
            Ok(self)
        } else {
            Err(GrammarError::NotLl1 {
                conflicts: self.conflicts.len(),
            })
        }
    }
}
