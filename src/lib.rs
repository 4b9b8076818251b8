//! Building blocks for interactive command-line tools.
//!
//! - [`Outcome`]: success-or-error container with map / and_then / match combinators
//! - [`CommandArgs`]: whitespace tokenizer splitting a line into positionals, flags and options
//! - [`Command`]: a named handler `Fn(&CommandArgs) -> Outcome<(), String>`
//! - [`Terminal`]: name-keyed registry that dispatches lines to commands
//!
//! ```
//! use cmdkit::{Command, Dispatched, Outcome, Terminal};
//!
//! let mut terminal = Terminal::new();
//! terminal.register(Command::new("greet", |args| match args.get(1) {
//!     Some(_) => Outcome::ok(()),
//!     None => Outcome::err("greet: missing name".to_string()),
//! }));
//!
//! let dispatched = terminal.dispatch("greet world", None).unwrap();
//! assert_eq!(dispatched, Dispatched::Handled(Outcome::Ok(())));
//! assert!(terminal.dispatch("nope", None).is_err());
//! ```

pub mod args;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod exitcode;
pub mod outcome;
pub mod shell;
pub mod terminal;
pub mod util;

pub use args::CommandArgs;
pub use command::{Command, CommandOutcome, Handler};
pub use error::{CommandNotFound, InvalidAccess};
pub use outcome::Outcome;
pub use terminal::{Dispatched, Terminal};
