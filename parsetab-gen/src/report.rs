//! Plain-text rendering of sets and tables.
//!
//! Every writer takes any [`Write`] sink and returns an [`io::Result`].
//! Tables are written as aligned columns separated by ` | `.

use parsetab::{Automaton, Grammar, Ll1Table, SlrTables, Symbol, SymbolSets};
use std::io::{self, Write};

/// Writes rows of cells as aligned columns; the first row is the header.
fn write_columns<W: Write>(out: &mut W, rows: &[Vec<String>]) -> io::Result<()> {
    let n_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; n_cols];
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }
    for (i, row) in rows.iter().enumerate() {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<w$}", cell, w = w))
            .collect::<Vec<_>>()
            .join(" | ");
        writeln!(out, "{}", line.trim_end())?;
        if i == 0 {
            let total = widths.iter().sum::<usize>() + 3 * n_cols.saturating_sub(1);
            writeln!(out, "{}", "-".repeat(total))?;
        }
    }
    Ok(())
}

/// Writes the grammar productions, one per line, with their ids.
///
/// ```text
/// P,0,E -> T E'
/// ```
pub fn write_prods<W: Write>(out: &mut W, grammar: &Grammar) -> io::Result<()> {
    writeln!(out, "PRODUCTIONS ({})", grammar.rules().len())?;
    for (id, _) in grammar.iter_rules() {
        writeln!(out, "P,{},{}", id, grammar.fmt_rule(id))?;
    }
    Ok(())
}

/// Writes FIRST or FOLLOW sets as `LABEL(A) = {x, y}`.
///
/// Rows and members are both sorted by name.
pub fn write_sets<W: Write>(
    out: &mut W,
    label: &str,
    grammar: &Grammar,
    sets: &SymbolSets,
) -> io::Result<()> {
    writeln!(out, "{} SETS", label)?;
    let mut rows: Vec<_> = sets.iter().collect();
    rows.sort_by_key(|&(nt, _)| grammar.name(nt));
    for (nt, set) in rows {
        let mut names: Vec<&str> = set.iter().map(|&s| grammar.name(s)).collect();
        names.sort_unstable();
        writeln!(
            out,
            "{}({}) = {{{}}}",
            label,
            grammar.name(nt),
            names.join(", ")
        )?;
    }
    Ok(())
}

/// Non-terminals sorted by name.
fn sorted_nonterminals(grammar: &Grammar) -> Vec<Symbol> {
    let mut nts: Vec<Symbol> = grammar.nonterminals().collect();
    nts.sort_by_key(|&nt| grammar.name(nt));
    nts
}

/// Writes the LL(1) table; each cell shows the selected right-hand side.
///
/// Rows are non-terminals sorted by name, columns the grammar lookaheads.
pub fn write_ll1<W: Write>(out: &mut W, grammar: &Grammar, table: &Ll1Table) -> io::Result<()> {
    let columns = grammar.lookaheads();
    let mut rows = Vec::new();
    rows.push(
        std::iter::once("NT".to_owned())
            .chain(columns.iter().map(|&t| grammar.name(t).to_owned()))
            .collect::<Vec<_>>(),
    );
    for nt in sorted_nonterminals(grammar) {
        let mut row = vec![grammar.name(nt).to_owned()];
        for &t in &columns {
            row.push(match table.get(nt, t) {
                Some(p) => grammar.fmt_symbols(grammar.rule(p).rhs.symbols()),
                None => String::new(),
            });
        }
        rows.push(row);
    }
    writeln!(out, "LL(1) PARSING TABLE")?;
    write_columns(out, &rows)?;
    write_ll1_conflicts(out, grammar, table)
}

pub fn write_ll1_conflicts<W: Write>(
    out: &mut W,
    grammar: &Grammar,
    table: &Ll1Table,
) -> io::Result<()> {
    if table.is_ll1() {
        return Ok(());
    }
    writeln!(out, "WARNING: grammar is not LL(1)!")?;
    for c in table.conflicts() {
        writeln!(out, "   {}", c.describe(grammar))?;
    }
    Ok(())
}

/// Writes the canonical collection, items with a dot, then the transitions.
pub fn write_states<W: Write>(
    out: &mut W,
    grammar: &Grammar,
    automaton: &Automaton,
) -> io::Result<()> {
    writeln!(out, "CANONICAL COLLECTION ({} states)", automaton.len())?;
    for (i, state) in automaton.states().enumerate() {
        writeln!(out, "I{}:", i)?;
        for item in state {
            writeln!(out, "    {}", automaton.fmt_item(grammar, item))?;
        }
    }
    writeln!(out)?;
    writeln!(out, "TRANSITIONS")?;
    for (from, sym, to) in automaton.transitions() {
        writeln!(out, "    goto(I{}, {}) = I{}", from, grammar.name(sym), to)?;
    }
    Ok(())
}

/// Writes the SLR(1) ACTION and GOTO tables followed by any conflicts.
pub fn write_slr<W: Write>(out: &mut W, grammar: &Grammar, tables: &SlrTables) -> io::Result<()> {
    let mut rows = vec![
        std::iter::once("State".to_owned())
            .chain(tables.terminals().iter().map(|&t| grammar.name(t).to_owned()))
            .collect::<Vec<_>>(),
    ];
    for i in 0..tables.state_count() {
        let mut row = vec![i.to_string()];
        for &t in tables.terminals() {
            row.push(tables.action(i, t).map_or_else(String::new, |a| a.to_string()));
        }
        rows.push(row);
    }
    writeln!(out, "SLR(1) ACTION TABLE")?;
    write_columns(out, &rows)?;

    let nonterminals: Vec<Symbol> = grammar.nonterminals().collect();
    let mut rows = vec![
        std::iter::once("State".to_owned())
            .chain(nonterminals.iter().map(|&nt| grammar.name(nt).to_owned()))
            .collect::<Vec<_>>(),
    ];
    for i in 0..tables.state_count() {
        let mut row = vec![i.to_string()];
        for &nt in &nonterminals {
            row.push(tables.goto(i, nt).map_or_else(String::new, |j| j.to_string()));
        }
        rows.push(row);
    }
    writeln!(out)?;
    writeln!(out, "SLR(1) GOTO TABLE")?;
    write_columns(out, &rows)?;
    write_slr_conflicts(out, grammar, tables)
}

pub fn write_slr_conflicts<W: Write>(
    out: &mut W,
    grammar: &Grammar,
    tables: &SlrTables,
) -> io::Result<()> {
    if tables.is_slr1() {
        return Ok(());
    }
    writeln!(out, "WARNING: grammar is not SLR(1)!")?;
    for c in tables.conflicts() {
        writeln!(out, "   {}", c.describe(grammar))?;
    }
    Ok(())
}
