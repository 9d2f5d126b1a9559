//! Command-line interface for `parsetab`.
//!
//! Reads a grammar (from a file or standard input) and prints its FIRST and
//! FOLLOW sets together with an LL(1) or SLR(1) parsing table.

#[cfg(feature = "cli")]
mod real {
    use clap::Parser;
    use parsetab_gen::{Method, Options, generate, open_output};
    use std::io;
    use std::path::PathBuf;

    #[derive(Parser)]
    #[command(about = "Compute FIRST/FOLLOW sets and LL(1)/SLR(1) parsing tables")]
    struct Args {
        /// Path to the grammar file; standard input if omitted.
        #[arg(short = 'g', long)]
        grammar: Option<PathBuf>,

        /// Table to build.
        #[arg(short = 'm', long, value_enum, default_value_t = Method::Slr1)]
        method: Method,

        /// Path to the output file; standard output if omitted.
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Exit with an error if the table has conflicts.
        #[arg(short = 's', long)]
        strict: bool,

        /// Print the canonical collection of LR(0) item sets.
        #[arg(long)]
        states: bool,
    }

    pub fn main() -> anyhow::Result<()> {
        env_logger::init();
        let args = Args::parse();
        let opts = Options {
            method: args.method,
            strict: args.strict,
            show_states: args.states,
        };
        let mut out = open_output(args.output.as_deref())?;
        let summary = match &args.grammar {
            Some(path) => parsetab_gen::generate_file(path, &opts, &mut out)?,
            None => generate(&io::read_to_string(io::stdin())?, &opts, &mut out)?,
        };
        log::info!(
            "done: {} state(s), {} conflict(s)",
            summary.states.unwrap_or(0),
            summary.conflicts
        );
        Ok(())
    }
}

#[cfg(feature = "cli")]
fn main() -> anyhow::Result<()> {
    real::main()
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("parsetab disabled (compiled without `cli` feature)");
}
