//! GNU-style command-line decoding into a caller-defined record.
//!
//! A [`Parser`] is built once from option descriptors ([`Opt`]) and an
//! optional [`Positional`] schema, then applied to any number of token
//! vectors:
//!
//! - ganged short options: `-abc`, `-nVALUE`, `-n=VALUE`, `-n VALUE`
//! - long options by exact name or unambiguous prefix: `--name VALUE`,
//!   `--na=VALUE`
//! - optional values (`--color`, `--color=always`) and greedy lists
//!   (`--include a b c`)
//! - `--` ends option processing
//!
//! ```
//! use gangopt::{store, Opt, Parser, Positional};
//!
//! #[derive(Default)]
//! struct Args {
//!     verbose: bool,
//!     output: String,
//!     inputs: Vec<String>,
//! }
//!
//! let parser = Parser::builder("cc")
//!     .option(Opt::boolean(store::flag(|a: &mut Args| &mut a.verbose)).short('v').long("verbose"))
//!     .option(Opt::direct(store::parse(|a: &mut Args| &mut a.output)).short('o').long("output"))
//!     .positional(Positional::new().list("FILE", store::push(|a: &mut Args| &mut a.inputs)))
//!     .build()?;
//!
//! let mut args = Args::default();
//! parser.parse(&mut args, &["-vo", "a.out", "main.c", "util.c"])?;
//! assert!(args.verbose);
//! assert_eq!(args.output, "a.out");
//! assert_eq!(args.inputs, ["main.c", "util.c"]);
//! # Ok::<(), gangopt::Error>(())
//! ```

mod error;
mod help;
mod option;
mod parser;
mod positional;
mod short;
pub mod store;
mod trie;

pub use error::{Error, HelpRequest, Result};
pub use option::{Kind, Opt, SetResult, Setter, TRUE};
pub use parser::{Parser, ParserBuilder};
pub use positional::{Positional, Slot};
