//! LR(0) item machinery and SLR(1) ACTION/GOTO table construction.
//!
//! The grammar is first augmented with `S' -> S`. The canonical collection
//! of LR(0) item sets is built from `closure({S' -> • S})` by repeated
//! [`AugmentedGrammar::goto`], deduplicating states by value. The ACTION
//! table then gets shifts from terminal transitions, reduces from completed
//! items over FOLLOW of their left-hand side, and a single accept for
//! `S' -> S •` on `$`.

use crate::error::GrammarError;
use crate::grammar::{Grammar, ProdId};
use crate::sets::FollowSets;
use crate::symtab::Symbol;
use indexmap::{IndexMap, IndexSet};
use std::collections::BTreeSet;
use std::fmt;

/// An LR(0) item: a production of the augmented grammar and a dot position.
///
/// For example, `E → E • + T` stores the index of `E → E + T` and dot `1`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Item {
    /// Index into [`AugmentedGrammar::prods`]; `0` is `S' -> S`.
    pub prod: usize,

    /// Number of body symbols already recognized, in `0..=body.len()`.
    pub dot: usize,
}

/// A set of LR(0) items in canonical order.
pub type ItemSet = BTreeSet<Item>;

/// A production of the augmented grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugRule {
    pub lhs: Symbol,
    /// Symbols the dot walks over; empty for `ε` productions.
    pub body: Vec<Symbol>,
    /// The rule in the original grammar, `None` for `S' -> S`.
    pub id: Option<ProdId>,
}

/// The grammar extended with `S' -> S`, plus closure and goto over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentedGrammar {
    prods: Vec<AugRule>,
    by_lhs: IndexMap<Symbol, Vec<usize>>,
    start: Symbol,
}

impl AugmentedGrammar {
    pub fn new(grammar: &Grammar) -> Self {
        let start = grammar.augmented_start();
        let mut prods = vec![AugRule {
            lhs: start,
            body: vec![grammar.start()],
            id: None,
        }];
        prods.extend(grammar.iter_rules().map(|(id, rule)| AugRule {
            lhs: rule.lhs,
            body: rule.rhs.body().to_vec(),
            id: Some(id),
        }));
        let mut by_lhs: IndexMap<Symbol, Vec<usize>> = IndexMap::new();
        for (i, p) in prods.iter().enumerate() {
            by_lhs.entry(p.lhs).or_default().push(i);
        }
        Self {
            prods,
            by_lhs,
            start,
        }
    }

    pub fn prods(&self) -> &[AugRule] {
        &self.prods
    }

    /// The augmented start symbol `S'`.
    pub fn start(&self) -> Symbol {
        self.start
    }

    /// The symbol right after the dot, if the item is not complete.
    #[inline]
    pub fn next_symbol(&self, item: &Item) -> Option<Symbol> {
        self.prods[item.prod].body.get(item.dot).copied()
    }

    #[inline]
    pub fn is_complete(&self, item: &Item) -> bool {
        item.dot >= self.prods[item.prod].body.len()
    }

    /// Computes the LR(0) closure of `items`.
    ///
    /// For every item with a non-terminal `B` right after the dot, adds
    /// `B -> • γ` for each production of `B`, until nothing new is added.
    pub fn closure(&self, items: &ItemSet) -> ItemSet {
        let mut c = items.clone();
        let mut inserted = true;
        while inserted {
            inserted = false;
            // Iterate over a snapshot to avoid borrowing issues
            for item in c.clone() {
                let Some(b) = self.next_symbol(&item) else {
                    continue;
                };
                for &j in self.by_lhs.get(&b).into_iter().flatten() {
                    inserted |= c.insert(Item { prod: j, dot: 0 });
                }
            }
        }
        c
    }

    /// Computes goto(`items`, `sym`): advance the dot over `sym`, then close.
    ///
    /// Empty if no item in `items` has `sym` right after its dot.
    pub fn goto(&self, items: &ItemSet, sym: Symbol) -> ItemSet {
        let moved: ItemSet = items
            .iter()
            .filter(|item| self.next_symbol(item) == Some(sym))
            .map(|item| Item {
                prod: item.prod,
                dot: item.dot + 1,
            })
            .collect();
        if moved.is_empty() {
            return moved;
        }
        self.closure(&moved)
    }
}

/// The canonical collection of LR(0) item sets and its transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    aug: AugmentedGrammar,
    states: IndexSet<ItemSet>,
    transitions: IndexMap<(usize, Symbol), usize>,
}

impl Automaton {
    /// Builds the canonical collection.
    ///
    /// State 0 is `closure({S' -> • S})`. Each state is expanded on the
    /// symbols after its dots, in item order; a goto result equal to an
    /// existing state reuses that state's id, otherwise it is appended.
    /// The item universe is finite, so the loop stops once no new state
    /// appears.
    pub fn build(grammar: &Grammar) -> Self {
        let aug = AugmentedGrammar::new(grammar);
        let mut states: IndexSet<ItemSet> = IndexSet::new();
        let mut transitions = IndexMap::new();
        states.insert(aug.closure(&ItemSet::from([Item { prod: 0, dot: 0 }])));

        let mut i = 0;
        while i < states.len() {
            let Some(state) = states.get_index(i).cloned() else {
                break;
            };
            let symbols: IndexSet<Symbol> =
                state.iter().filter_map(|item| aug.next_symbol(item)).collect();
            for sym in symbols {
                let nxt = aug.goto(&state, sym);
                if nxt.is_empty() {
                    continue;
                }
                let (j, added) = states.insert_full(nxt);
                if added && log::log_enabled!(log::Level::Trace) {
                    log::trace!(
                        "I{} = goto(I{}, {}) = {:?}",
                        j,
                        i,
                        grammar.name(sym),
                        states.get_index(j)
                    );
                }
                transitions.insert((i, sym), j);
            }
            i += 1;
        }
        log::debug!(
            "LR(0): {} state(s), {} transition(s)",
            states.len(),
            transitions.len()
        );
        Self {
            aug,
            states,
            transitions,
        }
    }

    pub fn augmented(&self) -> &AugmentedGrammar {
        &self.aug
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, id: usize) -> Option<&ItemSet> {
        self.states.get_index(id)
    }

    /// States in id order.
    pub fn states(&self) -> impl Iterator<Item = &ItemSet> {
        self.states.iter()
    }

    /// Looks up the id of a state by value.
    pub fn find_state(&self, items: &ItemSet) -> Option<usize> {
        self.states.get_index_of(items)
    }

    pub fn transition(&self, state: usize, sym: Symbol) -> Option<usize> {
        self.transitions.get(&(state, sym)).copied()
    }

    /// All transitions `((from, symbol), to)` in construction order.
    pub fn transitions(&self) -> impl Iterator<Item = (usize, Symbol, usize)> + '_ {
        self.transitions.iter().map(|(&(from, sym), &to)| (from, sym, to))
    }

    /// Formats an item as `A -> x . y`.
    pub fn fmt_item(&self, grammar: &Grammar, item: &Item) -> String {
        let p = &self.aug.prods[item.prod];
        let mut out = format!("{} ->", grammar.name(p.lhs));
        for (j, &sym) in p.body.iter().enumerate() {
            if j == item.dot {
                out.push_str(" .");
            }
            out.push(' ');
            out.push_str(grammar.name(sym));
        }
        if item.dot >= p.body.len() {
            out.push_str(" .");
        }
        out
    }
}

/// An ACTION table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Push the lookahead and go to the state.
    Shift(usize),
    /// Reduce by the rule.
    Reduce(ProdId),
    /// Input recognized.
    Accept,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Shift(s) => write!(f, "s{}", s),
            Action::Reduce(p) => write!(f, "r{}", p),
            Action::Accept => f.write_str("acc"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConflictKind {
    ShiftReduce,
    ReduceReduce,
    AcceptReduce,
}

impl ConflictKind {
    fn classify(a: Action, b: Action) -> Self {
        match (a, b) {
            (Action::Reduce(_), Action::Reduce(_)) => ConflictKind::ReduceReduce,
            (Action::Shift(_), _) | (_, Action::Shift(_)) => ConflictKind::ShiftReduce,
            _ => ConflictKind::AcceptReduce,
        }
    }

    pub fn to_str(self) -> &'static str {
        match self {
            ConflictKind::ShiftReduce => "shift/reduce",
            ConflictKind::ReduceReduce => "reduce/reduce",
            ConflictKind::AcceptReduce => "accept/reduce",
        }
    }
}

/// Two actions competing for one ACTION cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlrConflict {
    pub state: usize,
    pub terminal: Symbol,
    pub kind: ConflictKind,
    /// Action that held the cell before.
    pub existing: Action,
    /// Action that overwrote it.
    pub incoming: Action,
}

impl SlrConflict {
    /// Human-readable description, e.g.
    /// `shift/reduce conflict in state 4 on 'e': s5 vs r0 (S -> i S)`.
    pub fn describe(&self, grammar: &Grammar) -> String {
        let show = |a: Action| match a {
            Action::Reduce(p) => format!("{} ({})", a, grammar.fmt_rule(p)),
            _ => a.to_string(),
        };
        format!(
            "{} conflict in state {} on '{}': {} vs {}",
            self.kind.to_str(),
            self.state,
            grammar.name(self.terminal),
            show(self.existing),
            show(self.incoming),
        )
    }
}

/// SLR(1) ACTION and GOTO tables with their automaton and conflicts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlrTables {
    automaton: Automaton,
    terminals: Vec<Symbol>,
    action: Vec<IndexMap<Symbol, Action>>,
    goto: Vec<IndexMap<Symbol, usize>>,
    conflicts: Vec<SlrConflict>,
}

impl SlrTables {
    /// Builds the automaton and fills ACTION/GOTO from it and `follow`.
    ///
    /// Construction never aborts: a cell written twice with different
    /// actions keeps the last one and records an [`SlrConflict`]. The one
    /// exception is `Accept`, which keeps its cell against any reduce.
    pub fn build(grammar: &Grammar, follow: &FollowSets) -> Self {
        let automaton = Automaton::build(grammar);
        let n = automaton.len();
        let mut action = vec![IndexMap::new(); n];
        let mut goto = vec![IndexMap::new(); n];
        let mut conflicts = Vec::new();

        let aug = automaton.augmented();
        for (i, state) in automaton.states().enumerate() {
            for item in state {
                let p = &aug.prods()[item.prod];
                if let Some(sym) = aug.next_symbol(item) {
                    let Some(j) = automaton.transition(i, sym) else {
                        continue;
                    };
                    if grammar.is_terminal(sym) {
                        set_action(&mut action[i], &mut conflicts, i, sym, Action::Shift(j));
                    } else {
                        goto[i].insert(sym, j);
                    }
                } else if let Some(id) = p.id {
                    for &t in follow.get(p.lhs).into_iter().flatten() {
                        set_action(&mut action[i], &mut conflicts, i, t, Action::Reduce(id));
                    }
                } else {
                    set_action(&mut action[i], &mut conflicts, i, Symbol::END, Action::Accept);
                }
            }
        }
        if !conflicts.is_empty() {
            log::debug!("SLR(1): {} conflict(s)", conflicts.len());
        }
        Self {
            automaton,
            terminals: grammar.lookaheads(),
            action,
            goto,
            conflicts,
        }
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// Column terminals: every right-hand-side terminal, then `$`.
    pub fn terminals(&self) -> &[Symbol] {
        &self.terminals
    }

    pub fn state_count(&self) -> usize {
        self.action.len()
    }

    pub fn action(&self, state: usize, t: Symbol) -> Option<Action> {
        self.action.get(state)?.get(&t).copied()
    }

    pub fn goto(&self, state: usize, nt: Symbol) -> Option<usize> {
        self.goto.get(state)?.get(&nt).copied()
    }

    pub fn action_row(&self, state: usize) -> Option<&IndexMap<Symbol, Action>> {
        self.action.get(state)
    }

    pub fn goto_row(&self, state: usize) -> Option<&IndexMap<Symbol, usize>> {
        self.goto.get(state)
    }

    pub fn conflicts(&self) -> &[SlrConflict] {
        &self.conflicts
    }

    pub fn is_slr1(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Rejects tables with conflicts.
    pub fn strict(self) -> Result<Self, GrammarError> {
        if self.is_slr1() {
            Ok(self)
        } else {
            Err(GrammarError::NotSlr1 {
                conflicts: self.conflicts.len(),
            })
        }
    }
}

/// Writes `action` into one ACTION row, recording a conflict when the
/// cell already holds a different action.
fn set_action(
    row: &mut IndexMap<Symbol, Action>,
    conflicts: &mut Vec<SlrConflict>,
    state: usize,
    t: Symbol,
    action: Action,
) {
    let Some(existing) = row.insert(t, action) else {
        return;
    };
    if existing == action {
        return;
    }
    let kind = ConflictKind::classify(existing, action);
    log::debug!(
        "SLR(1) {} conflict in state {} on {:?}: {} vs {}",
        kind.to_str(),
        state,
        t,
        existing,
        action
    );
    if existing == Action::Accept {
        row.insert(t, Action::Accept);
    }
    conflicts.push(SlrConflict {
        state,
        terminal: t,
        kind,
        existing,
        incoming: action,
    });
}
