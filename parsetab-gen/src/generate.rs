//! Grammar text in, report out.

use crate::{report, syntax};
use anyhow::{Context, Result};
use parsetab::Analysis;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// What to build from the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Method {
    /// FIRST/FOLLOW sets and the LL(1) parsing table.
    Ll1,
    /// FIRST/FOLLOW sets and the SLR(1) ACTION/GOTO tables.
    #[default]
    Slr1,
    /// FIRST/FOLLOW sets only.
    Sets,
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub method: Method,
    /// Fail when the table has conflicts. The report is still written.
    pub strict: bool,
    /// Also dump the canonical collection of LR(0) item sets.
    pub show_states: bool,
}

/// Outcome of a successful [`generate`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Number of LR(0) states, for [`Method::Slr1`] only.
    pub states: Option<usize>,
    pub conflicts: usize,
}

/// Analyzes grammar `text` and writes the report selected by `opts` to `out`.
pub fn generate<W: Write>(text: &str, opts: &Options, out: &mut W) -> Result<Summary> {
    let grammar = syntax::parse_grammar(text)?;
    log::info!(
        "{} production(s), {} non-terminal(s), {} terminal(s)",
        grammar.rules().len(),
        grammar.nonterminals().count(),
        grammar.terminals().len()
    );

    let analysis = Analysis::new(&grammar);
    report::write_prods(out, &grammar)?;
    writeln!(out)?;
    report::write_sets(out, "FIRST", &grammar, &analysis.first)?;
    writeln!(out)?;
    report::write_sets(out, "FOLLOW", &grammar, &analysis.follow)?;

    let summary = match opts.method {
        Method::Sets => Summary {
            states: None,
            conflicts: 0,
        },
        Method::Ll1 => {
            let table = analysis.ll1(&grammar);
            writeln!(out)?;
            report::write_ll1(out, &grammar, &table)?;
            for c in table.conflicts() {
                log::warn!("{}", c.describe(&grammar));
            }
            let conflicts = table.conflicts().len();
            if opts.strict {
                table.strict()?;
            }
            Summary {
                states: None,
                conflicts,
            }
        }
        Method::Slr1 => {
            let tables = analysis.slr1(&grammar);
            if opts.show_states {
                writeln!(out)?;
                report::write_states(out, &grammar, tables.automaton())?;
            }
            writeln!(out)?;
            report::write_slr(out, &grammar, &tables)?;
            for c in tables.conflicts() {
                log::warn!("{}", c.describe(&grammar));
            }
            let summary = Summary {
                states: Some(tables.state_count()),
                conflicts: tables.conflicts().len(),
            };
            if opts.strict {
                tables.strict()?;
            }
            summary
        }
    };
    out.flush()?;
    Ok(summary)
}

/// Reads the grammar from `path`, then as [`generate`].
pub fn generate_file<P: AsRef<Path>, W: Write>(
    path: P,
    opts: &Options,
    out: &mut W,
) -> Result<Summary> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read grammar {}", path.display()))?;
    generate(&text, opts, out).with_context(|| format!("in {}", path.display()))
}

/// Opens a buffered report sink: the file at `path`, or standard output.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}
