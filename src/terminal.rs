//! Command registry and dispatch.
//!
//! Not internally synchronized and not `Send`: handlers run on the caller's
//! thread, one dispatch at a time. A handler that never returns blocks the
//! dispatch call forever; there is no timeout or cancellation.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::args::CommandArgs;
use crate::command::{Command, CommandOutcome};
use crate::error::CommandNotFound;

/// What a successful lookup-or-fallback produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    /// A registered handler ran and returned this outcome.
    Handled(CommandOutcome),
    /// No command matched; the fallback ran.
    Fallback,
}

impl Dispatched {
    pub fn outcome(self) -> Option<CommandOutcome> {
        match self {
            Dispatched::Handled(outcome) => Some(outcome),
            Dispatched::Fallback => None,
        }
    }
}

/// Name-keyed command table.
#[derive(Debug, Default, Clone)]
pub struct Terminal {
    table: HashMap<String, Command>,
}

impl Terminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register under the command's own name, replacing any previous entry.
    pub fn register(&mut self, cmd: Command) {
        let name = cmd.name().to_string();
        self.register_as(name, cmd);
    }

    /// Register under an explicit name, replacing any previous entry.
    pub fn register_as(&mut self, name: impl Into<String>, cmd: Command) {
        let name = name.into();
        if self.table.insert(name.clone(), cmd).is_some() {
            debug!(%name, "command replaced");
        } else {
            debug!(%name, "command registered");
        }
    }

    /// Parse `line` and dispatch it. See [`dispatch_args`](Self::dispatch_args).
    #[instrument(level = "debug", skip(self, on_not_found))]
    pub fn dispatch(
        &self,
        line: &str,
        on_not_found: Option<&mut dyn FnMut()>,
    ) -> Result<Dispatched, CommandNotFound> {
        self.dispatch_args(&CommandArgs::parse(line), on_not_found)
    }

    /// Look up `positional[0]` by exact name and run its handler.
    ///
    /// On a miss the fallback runs once and `Dispatched::Fallback` is
    /// returned; without a fallback the miss is a [`CommandNotFound`]. An
    /// empty bundle is always a miss, even if a command is registered
    /// under the empty name. A
    /// handler's own `Err` is delivered inside `Dispatched::Handled`.
    pub fn dispatch_args(
        &self,
        args: &CommandArgs,
        on_not_found: Option<&mut dyn FnMut()>,
    ) -> Result<Dispatched, CommandNotFound> {
        let name = args.name().unwrap_or_default();
        // A bundle without positional[0] names nothing, not the empty command.
        let found = args.name().and_then(|name| self.table.get(name));
        match found {
            Some(cmd) => Ok(Dispatched::Handled(cmd.invoke(args))),
            None => match on_not_found {
                Some(fallback) => {
                    debug!(name, "command not found, running fallback");
                    fallback();
                    Ok(Dispatched::Fallback)
                }
                None => Err(CommandNotFound::new(name)),
            },
        }
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.table.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Registered `(name, command)` pairs sorted by name.
    pub fn commands(&self) -> Vec<(&str, &Command)> {
        let mut entries: Vec<(&str, &Command)> = self
            .table
            .iter()
            .map(|(name, cmd)| (name.as_str(), cmd))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
