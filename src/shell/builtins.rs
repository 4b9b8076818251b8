//! Demo commands bundled with the shell.
//!
//! Handlers write their lines into a shared [`Transcript`] instead of
//! stdout so the shell decides where output goes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::{Command, CommandArgs, CommandOutcome, Outcome, Terminal};

/// Lines produced by handlers, drained by the shell after each dispatch.
pub type Transcript = Rc<RefCell<Vec<String>>>;

pub const QUIT_COMMAND: &str = "quit";

/// Shared state the built-in handlers close over.
#[derive(Debug, Clone)]
pub struct Builtins {
    /// Value changed by `change_var`
    pub variable: Rc<Cell<i64>>,
}

fn required<'a>(args: &'a CommandArgs, idx: usize, what: &str) -> Outcome<&'a str, String> {
    match args.get(idx) {
        Some(value) => Outcome::ok(value),
        None => Outcome::err(format!(
            "{}: missing {what}",
            args.name().unwrap_or_default()
        )),
    }
}

/// Register `log_str`, `link_str`, `string_str`, `change_var` and `print`.
pub fn register_builtins(terminal: &mut Terminal, transcript: &Transcript) -> Builtins {
    let builtins = Builtins {
        variable: Rc::new(Cell::new(1)),
    };

    let out = Rc::clone(transcript);
    terminal.register(
        Command::new("log_str", move |args| {
            required(args, 1, "string").map(|value| {
                out.borrow_mut().push(format!("Log string: {value}"));
            })
        })
        .with_description("Log a single string"),
    );

    let out = Rc::clone(transcript);
    terminal.register(
        Command::new("link_str", move |args| {
            out.borrow_mut()
                .push(format!("Link strings: {}", args.arguments().concat()));
            Outcome::ok(())
        })
        .with_description("Concatenate all arguments"),
    );

    let out = Rc::clone(transcript);
    terminal.register(
        Command::new("string_str", move |args| {
            if !args.has_flag("able") {
                return Outcome::err("Not able to string strs!".to_string());
            }
            let divide = args.get_option("divide", "-");
            out.borrow_mut()
                .push(format!("String strings: {}", args.arguments().join(divide)));
            Outcome::ok(())
        })
        .with_description("Join arguments with --divide (requires --able)"),
    );

    let out = Rc::clone(transcript);
    let variable = Rc::clone(&builtins.variable);
    terminal.register(
        Command::new("change_var", move |args| {
            required(args, 1, "value")
                .and_then(|raw| {
                    Outcome::from(raw.parse::<i64>())
                        .map_err(|e| format!("change_var: invalid value {raw:?}: {e}"))
                })
                .map(|new| {
                    let old = variable.replace(new);
                    out.borrow_mut()
                        .push(format!("Change var : {old} to {new}"));
                })
        })
        .with_description("Set the shared demo variable"),
    );

    let out = Rc::clone(transcript);
    terminal.register(
        Command::new("print", move |args| {
            out.borrow_mut().push(args.arguments().join(" "));
            Outcome::ok(())
        })
        .with_description("Print the arguments separated by spaces"),
    );

    builtins
}

/// Command that raises `flag` when invoked.
pub fn quit_command(flag: Rc<Cell<bool>>) -> Command {
    Command::new(QUIT_COMMAND, move |_: &CommandArgs| -> CommandOutcome {
        flag.set(true);
        Outcome::ok(())
    })
    .with_description("Leave the shell")
}
