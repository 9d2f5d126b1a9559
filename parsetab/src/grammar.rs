//! Grammar model and symbol classification.
//!
//! A [`Grammar`] is an ordered list of [`Rule`]s over interned [`Symbol`]s
//! together with a start symbol. A symbol is a *non-terminal* iff it is the
//! left-hand side of some rule; everything else, including `ε` and `$`, is a
//! terminal. Grammars are only obtainable through [`GrammarBuilder::build`],
//! which rejects malformed input before any analysis runs.

use crate::error::GrammarError;
use crate::symtab::{Symbol, Symtab};
use indexmap::{IndexMap, IndexSet};
use smartstring::alias::String;
use std::fmt;

/// Dense index of a rule in definition order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ProdId(pub usize);

impl From<ProdId> for usize {
    fn from(id: ProdId) -> Self {
        id.0
    }
}

impl fmt::Display for ProdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Right-hand side of a rule.
///
/// `ε` never appears next to other symbols: it is dropped on construction,
/// and an empty right-hand side is stored as the single symbol `[ε]`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Production(Vec<Symbol>);

impl Production {
    pub fn new<I: IntoIterator<Item = Symbol>>(symbols: I) -> Self {
        let symbols: Vec<Symbol> = symbols
            .into_iter()
            .filter(|&s| s != Symbol::EPSILON)
            .collect();
        if symbols.is_empty() {
            Self::epsilon()
        } else {
            Self(symbols)
        }
    }

    /// The production `[ε]`.
    pub fn epsilon() -> Self {
        Self(vec![Symbol::EPSILON])
    }

    pub fn is_epsilon(&self) -> bool {
        self.0 == [Symbol::EPSILON]
    }

    /// Symbols as stored, `[ε]` for the empty production.
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// Symbols an LR item walks over; empty for the epsilon production.
    pub fn body(&self) -> &[Symbol] {
        if self.is_epsilon() { &[] } else { &self.0 }
    }
}

/// A single production `lhs -> rhs`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Rule {
    pub lhs: Symbol,
    pub rhs: Production,
}

/// A validated context-free grammar.
#[derive(Debug, Clone)]
pub struct Grammar {
    symtab: Symtab,
    rules: Vec<Rule>,
    by_lhs: IndexMap<Symbol, Vec<ProdId>>,
    terminals: Vec<Symbol>,
    terminals_inferred: bool,
    start: Symbol,
    augmented_start: Symbol,
}

impl Grammar {
    pub fn symtab(&self) -> &Symtab {
        &self.symtab
    }

    pub fn start(&self) -> Symbol {
        self.start
    }

    /// The fresh symbol `S'` used by the SLR(1) builder for `S' -> S`.
    ///
    /// It is interned in [`Grammar::symtab`] but is not a key of the grammar.
    pub fn augmented_start(&self) -> Symbol {
        self.augmented_start
    }

    /// Returns `true` iff `sym` is the left-hand side of some rule.
    #[inline]
    pub fn is_nonterminal(&self, sym: Symbol) -> bool {
        self.by_lhs.contains_key(&sym)
    }

    #[inline]
    pub fn is_terminal(&self, sym: Symbol) -> bool {
        !self.is_nonterminal(sym)
    }

    /// Non-terminals in definition order.
    pub fn nonterminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.by_lhs.keys().copied()
    }

    /// Terminals used in right-hand sides, in order of first appearance.
    ///
    /// Excludes `ε` and `$`.
    pub fn terminals(&self) -> &[Symbol] {
        &self.terminals
    }

    /// Table columns: [`Grammar::terminals`] followed by `$`.
    pub fn lookaheads(&self) -> Vec<Symbol> {
        self.terminals
            .iter()
            .copied()
            .chain(std::iter::once(Symbol::END))
            .collect()
    }

    /// `true` if terminals were taken from the rules rather than declared.
    pub fn terminals_inferred(&self) -> bool {
        self.terminals_inferred
    }

    /// Productions of `nt` in definition order; empty for terminals.
    pub fn productions(&self, nt: Symbol) -> &[ProdId] {
        self.by_lhs.get(&nt).map_or(&[], |v| v.as_slice())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Iterates over `(id, rule)` pairs in definition order.
    pub fn iter_rules(&self) -> impl Iterator<Item = (ProdId, &Rule)> {
        self.rules.iter().enumerate().map(|(i, r)| (ProdId(i), r))
    }

    pub fn rule(&self, id: ProdId) -> &Rule {
        &self.rules[id.0]
    }

    pub fn name(&self, sym: Symbol) -> &str {
        self.symtab.name(sym)
    }

    pub fn symbol(&self, name: &str) -> Option<Symbol> {
        self.symtab.get(name)
    }

    /// Finds the rule `lhs -> rhs` by symbol names; `&[]` names the epsilon production.
    pub fn find_rule(&self, lhs: &str, rhs: &[&str]) -> Option<ProdId> {
        let lhs = self.symbol(lhs)?;
        let rhs = Production::new(
            rhs.iter()
                .map(|name| self.symbol(name))
                .collect::<Option<Vec<_>>>()?,
        );
        self.productions(lhs)
            .iter()
            .copied()
            .find(|&id| self.rules[id.0].rhs == rhs)
    }

    /// Formats a sequence of symbols separated by spaces.
    pub fn fmt_symbols(&self, symbols: &[Symbol]) -> std::string::String {
        symbols
            .iter()
            .map(|&s| self.name(s))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Formats rule `id` as `A -> x y`.
    pub fn fmt_rule(&self, id: ProdId) -> std::string::String {
        let rule = self.rule(id);
        format!(
            "{} -> {}",
            self.name(rule.lhs),
            self.fmt_symbols(rule.rhs.symbols())
        )
    }
}

/// Incremental constructor for [`Grammar`].
///
/// # Example
/// ```rust
/// # use parsetab::GrammarBuilder;
/// let g = GrammarBuilder::new()
///     .rule("S", &["a", "S", "b"])
///     .rule("S", &[])
///     .build()
///     .unwrap();
/// assert_eq!(g.rules().len(), 2);
/// assert!(g.is_nonterminal(g.symbol("S").unwrap()));
/// assert!(g.is_terminal(g.symbol("a").unwrap()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GrammarBuilder {
    symtab: Symtab,
    rules: Vec<(Symbol, Vec<Symbol>)>,
    start: Option<String>,
    declared: Option<Vec<String>>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the production `lhs -> rhs`; an empty `rhs` is the epsilon production.
    pub fn rule(&mut self, lhs: &str, rhs: &[&str]) -> &mut Self {
        let lhs = self.symtab.add(lhs);
        let rhs = rhs.iter().map(|name| self.symtab.add(name)).collect();
        self.rules.push((lhs, rhs));
        self
    }

    /// Sets the start symbol. Defaults to the left-hand side of the first rule.
    pub fn start(&mut self, name: &str) -> &mut Self {
        self.start = Some(name.into());
        self
    }

    /// Declares terminal names.
    ///
    /// Once any terminal is declared, a right-hand-side symbol that is
    /// neither defined nor declared is reported as
    /// [`GrammarError::UndefinedSymbol`] instead of being taken as a terminal.
    pub fn terminals(&mut self, names: &[&str]) -> &mut Self {
        self.declared
            .get_or_insert_with(Vec::new)
            .extend(names.iter().map(|&n| String::from(n)));
        self
    }

    pub fn build(&self) -> Result<Grammar, GrammarError> {
        if self.rules.is_empty() {
            return Err(GrammarError::EmptyGrammar);
        }
        let mut symtab = self.symtab.clone();

        let mut rules = Vec::with_capacity(self.rules.len());
        let mut by_lhs: IndexMap<Symbol, Vec<ProdId>> = IndexMap::new();
        for (i, (lhs, rhs)) in self.rules.iter().enumerate() {
            if lhs.is_reserved() {
                return Err(GrammarError::ReservedLhs(symtab.name(*lhs).into()));
            }
            by_lhs.entry(*lhs).or_default().push(ProdId(i));
            rules.push(Rule {
                lhs: *lhs,
                rhs: Production::new(rhs.iter().copied()),
            });
        }

        let start_name = match &self.start {
            Some(name) => name.clone(),
            None => String::from(symtab.name(rules[0].lhs)),
        };
        let start = symtab
            .get(&start_name)
            .filter(|s| by_lhs.contains_key(s))
            .ok_or_else(|| GrammarError::UndefinedStart(start_name.clone()))?;

        let mut terminals = IndexSet::new();
        for rule in &rules {
            for &sym in rule.rhs.symbols() {
                if sym == Symbol::EPSILON || by_lhs.contains_key(&sym) {
                    continue;
                }
                if sym == Symbol::END {
                    return Err(GrammarError::ReservedSymbol {
                        lhs: symtab.name(rule.lhs).into(),
                        symbol: symtab.name(sym).into(),
                    });
                }
                if let Some(declared) = &self.declared {
                    if !declared.iter().any(|d| d.as_str() == symtab.name(sym)) {
                        return Err(GrammarError::UndefinedSymbol {
                            lhs: symtab.name(rule.lhs).into(),
                            symbol: symtab.name(sym).into(),
                        });
                    }
                }
                terminals.insert(sym);
            }
        }

        if self.declared.is_none() && !terminals.is_empty() {
            log::warn!(
                "no terminals declared; taking undefined symbols as terminals: {}",
                terminals
                    .iter()
                    .map(|&t| symtab.name(t))
                    .collect::<Vec<_>>()
                    .join(" ")
            );
        }

        let mut aug_name = start_name;
        aug_name.push('\'');
        while symtab.contains(&aug_name) {
            aug_name.push('\'');
        }
        let augmented_start = symtab.add(&aug_name);

        log::debug!(
            "grammar: {} rules, {} non-terminals, {} terminals, start {:?}",
            rules.len(),
            by_lhs.len(),
            terminals.len(),
            symtab.name(start)
        );

        Ok(Grammar {
            symtab,
            rules,
            by_lhs,
            terminals: terminals.into_iter().collect(),
            terminals_inferred: self.declared.is_none(),
            start,
            augmented_start,
        })
    }
}
