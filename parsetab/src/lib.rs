//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! Static analysis tables for table-driven parsing.
//!
//! `parsetab` takes an already parsed context-free grammar and derives:
//!  * **FIRST** and **FOLLOW** sets ([`first_sets`], [`follow_sets`]),
//!  * an **LL(1)** predictive table ([`Ll1Table`]),
//!  * an **SLR(1)** canonical LR(0) collection with ACTION/GOTO tables
//!    ([`Automaton`], [`SlrTables`]).
//!
//! Table construction is total: conflicts are returned as records next to a
//! fully populated table. Use [`Ll1Table::strict`] / [`SlrTables::strict`]
//! to turn them into errors.
//!
//! # Example
//! ```rust
//! use parsetab::{Analysis, GrammarBuilder};
//!
//! let g = GrammarBuilder::new()
//!     .rule("S", &["(", "S", ")", "S"])
//!     .rule("S", &[])
//!     .build()
//!     .unwrap();
//! let analysis = Analysis::new(&g);
//! assert!(analysis.ll1(&g).is_ll1());
//! assert!(analysis.slr1(&g).is_slr1());
//! ```

mod analysis;
mod error;
mod first;
mod follow;
mod grammar;
mod ll1;
mod sets;
mod slr;
mod symtab;

#[cfg(test)]
mod test_grammars;

pub use crate::analysis::Analysis;
pub use crate::error::GrammarError;
pub use crate::first::{first_of_sequence, first_pass, first_sets};
pub use crate::follow::{follow_pass, follow_sets};
pub use crate::grammar::{Grammar, GrammarBuilder, ProdId, Production, Rule};
pub use crate::ll1::{Ll1Conflict, Ll1Table};
pub use crate::sets::{FirstSets, FollowSets, SymbolSets};
pub use crate::slr::{
    Action, AugRule, AugmentedGrammar, Automaton, ConflictKind, Item, ItemSet, SlrConflict,
    SlrTables,
};
pub use crate::symtab::{END_MARKER, EPSILON, Symbol, SymbolDisplay, Symtab};
