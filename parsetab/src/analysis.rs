//! FIRST and FOLLOW computed together, as both table builders need them.

use crate::first::first_sets;
use crate::follow::follow_sets;
use crate::grammar::Grammar;
use crate::ll1::Ll1Table;
use crate::sets::{FirstSets, FollowSets};
use crate::slr::SlrTables;

/// Immutable FIRST/FOLLOW snapshot of one grammar.
///
/// The LL(1) and SLR(1) builders only read it, so both tables can be built
/// from the same snapshot, in any order or concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub first: FirstSets,
    pub follow: FollowSets,
}

impl Analysis {
    pub fn new(grammar: &Grammar) -> Self {
        let first = first_sets(grammar);
        let follow = follow_sets(grammar, &first);
        Self { first, follow }
    }

    pub fn ll1(&self, grammar: &Grammar) -> Ll1Table {
        Ll1Table::build(grammar, &self.first, &self.follow)
    }

    pub fn slr1(&self, grammar: &Grammar) -> SlrTables {
        SlrTables::build(grammar, &self.follow)
    }
}
