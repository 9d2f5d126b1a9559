//! # symtab
//!
//! Interning of grammar symbol names, built on [`indexmap::IndexSet`].
//!
//! Every distinct name receives a dense [`Symbol`] id in insertion order.
//! Two ids are reserved and always present: [`Symbol::EPSILON`] (`ε`) and
//! [`Symbol::END`] (`$`).
//!
//! ## Example
//! ```rust
//! # use parsetab::{Symbol, Symtab};
//! let mut st = Symtab::new();
//! let e = st.add("E");
//! assert_eq!(st.add("E"), e);
//! assert_eq!(st.name(e), "E");
//! assert_eq!(st.get("ε"), Some(Symbol::EPSILON));
//! ```

use indexmap::IndexSet;
use smartstring::alias::String;
use std::fmt;

/// Name of the reserved symbol denoting the empty string.
pub const EPSILON: &str = "ε";

/// Name of the reserved end-of-input symbol.
pub const END_MARKER: &str = "$";

/// An interned grammar symbol.
///
/// Symbols are cheap `Copy` handles; the name lives in the [`Symtab`] that
/// produced the id. Whether a symbol is a terminal or a non-terminal is a
/// property of the grammar, not of the symbol itself.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Symbol(u32);

impl Symbol {
    /// The empty string.
    pub const EPSILON: Symbol = Symbol(0);
    /// End of input.
    pub const END: Symbol = Symbol(1);

    /// Returns the dense index of this symbol in its table.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns `true` for [`Symbol::EPSILON`] and [`Symbol::END`].
    #[inline]
    pub fn is_reserved(self) -> bool {
        self == Symbol::EPSILON || self == Symbol::END
    }
}

/// Symbol table mapping names to [`Symbol`] ids and back.
#[derive(Debug, Clone)]
pub struct Symtab {
    names: IndexSet<String>,
}

impl Default for Symtab {
    fn default() -> Self {
        Self::new()
    }
}

impl Symtab {
    /// Creates a table holding only the reserved symbols.
    pub fn new() -> Self {
        let mut names = IndexSet::new();
        names.insert(String::from(EPSILON));
        names.insert(String::from(END_MARKER));
        Self { names }
    }

    /// Interns `name`, returning the existing id if it is already known.
    pub fn add(&mut self, name: &str) -> Symbol {
        if let Some(idx) = self.names.get_index_of(name) {
            return Symbol(idx as u32);
        }
        let (idx, _) = self.names.insert_full(String::from(name));
        Symbol(idx as u32)
    }

    /// Looks up an already interned name.
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.names.get_index_of(name).map(|idx| Symbol(idx as u32))
    }

    /// Returns the name of `sym`.
    ///
    /// Symbols from another table resolve to `"?"`.
    pub fn name(&self, sym: Symbol) -> &str {
        self.names.get_index(sym.index()).map_or("?", |s| s.as_str())
    }

    /// Returns `true` if `name` has been interned.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of interned symbols, reserved ones included.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over all symbols in id order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, s)| (Symbol(i as u32), s.as_str()))
    }

    /// Returns a value that formats `sym` by name.
    pub fn display(&self, sym: Symbol) -> SymbolDisplay<'_> {
        SymbolDisplay { symtab: self, sym }
    }
}

/// Display adapter returned by [`Symtab::display`].
pub struct SymbolDisplay<'a> {
    symtab: &'a Symtab,
    sym: Symbol,
}

impl fmt::Display for SymbolDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symtab.name(self.sym))
    }
}
