//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! Grammar text front end and table reports for [`parsetab`].
//!
//! `parsetab-gen` provides:
//!  * **`syntax`**: a line-oriented grammar notation, lexed with `logos` and
//!    parsed with `chumsky`;
//!  * **`report`**: plain-text FIRST/FOLLOW sets, LL(1) table, LR(0) states
//!    and SLR(1) ACTION/GOTO tables;
//!  * **`generate`**: the two glued together, as used by the `parsetab` binary.
//!
//! # Example
//! ```rust
//! use parsetab_gen::{Method, Options, generate};
//!
//! let opts = Options { method: Method::Ll1, ..Options::default() };
//! let mut out = Vec::new();
//! let summary = generate("S -> ( S ) S |\n", &opts, &mut out).unwrap();
//! assert_eq!(summary.conflicts, 0);
//! ```

pub mod generate;
pub mod report;
pub mod syntax;

pub use generate::{Method, Options, Summary, generate, generate_file, open_output};
pub use syntax::parse_grammar;
