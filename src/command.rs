//! Named command wrapping an opaque handler.

use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::args::CommandArgs;
use crate::outcome::Outcome;

/// What every handler returns: unit on success, a message on failure.
pub type CommandOutcome = Outcome<(), String>;

/// Handler capability shared by clones of a [`Command`].
///
/// Handlers may capture and mutate external state (`Rc<Cell<_>>`,
/// `RefCell`); nothing here isolates those side effects.
pub type Handler = Rc<dyn Fn(&CommandArgs) -> CommandOutcome>;

#[derive(Clone)]
pub struct Command {
    name: String,
    description: String,
    handler: Handler,
}

impl Command {
    pub fn new<F>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&CommandArgs) -> CommandOutcome + 'static,
    {
        Self {
            name: name.into(),
            description: String::new(),
            handler: Rc::new(handler),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Run the handler on an already parsed bundle.
    ///
    /// Argument shape is not validated here; that is the handler's job.
    pub fn invoke(&self, args: &CommandArgs) -> CommandOutcome {
        debug!(command = %self.name, positional = ?args.positional(), "invoke");
        (self.handler)(args)
    }

    /// Parse `line` and run the handler on the result.
    pub fn invoke_line(&self, line: &str) -> CommandOutcome {
        self.invoke(&CommandArgs::parse(line))
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
