//! # Grammar Error Type
//!
//! [`GrammarError`] covers the two ways table construction can refuse a
//! grammar:
//!
//! - **Malformed input**, detected by [`GrammarBuilder::build`] before any
//!   fixed-point computation runs (empty grammar, undefined start symbol,
//!   reserved names in the wrong place, undeclared symbols).
//! - **Conflicts in strict mode**, produced by [`Ll1Table::strict`] and
//!   [`SlrTables::strict`]. Outside strict mode conflicts are data, not
//!   errors.
//!
//! [`GrammarBuilder::build`]: crate::GrammarBuilder::build
//! [`Ll1Table::strict`]: crate::Ll1Table::strict
//! [`SlrTables::strict`]: crate::SlrTables::strict

use smartstring::alias::String;
use thiserror::Error;

/// Errors raised while building a grammar or checking its tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// No rules were supplied.
    #[error("grammar has no rules")]
    EmptyGrammar,

    /// The start symbol is not the left-hand side of any rule.
    #[error("start symbol {0:?} is not defined by any rule")]
    UndefinedStart(String),

    /// A reserved symbol (`ε` or `$`) was used as a left-hand side.
    #[error("reserved symbol {0:?} cannot be a left-hand side")]
    ReservedLhs(String),

    /// The end marker appears inside a right-hand side.
    #[error("reserved symbol {symbol:?} used in a production of {lhs:?}")]
    ReservedSymbol {
        /// Left-hand side of the offending production.
        lhs: String,
        /// The reserved symbol.
        symbol: String,
    },

    /// A right-hand-side symbol is neither defined nor a declared terminal.
    #[error("symbol {symbol:?} in a production of {lhs:?} is neither defined nor declared")]
    UndefinedSymbol {
        /// Left-hand side of the offending production.
        lhs: String,
        /// The undefined symbol.
        symbol: String,
    },

    /// Strict mode: the LL(1) table has conflicting cells.
    #[error("grammar is not LL(1): {conflicts} conflict(s)")]
    NotLl1 {
        /// Number of recorded conflicts.
        conflicts: usize,
    },

    /// Strict mode: the SLR(1) ACTION table has conflicting cells.
    #[error("grammar is not SLR(1): {conflicts} conflict(s)")]
    NotSlr1 {
        /// Number of recorded conflicts.
        conflicts: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}

    #[test]
    fn grammar_error_is_send_sync_static() {
        _assert_send_sync_static::<GrammarError>();
    }

    #[test]
    fn messages_name_the_symbol() {
        let err = GrammarError::UndefinedStart("S".into());
        assert!(err.to_string().contains("\"S\""));

        let err = GrammarError::UndefinedSymbol {
            lhs: "A".into(),
            symbol: "B".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"A\"") && msg.contains("\"B\""));
    }

    #[test]
    fn strict_errors_report_counts() {
        let err = GrammarError::NotSlr1 { conflicts: 3 };
        assert_eq!(err.to_string(), "grammar is not SLR(1): 3 conflict(s)");
    }
}
