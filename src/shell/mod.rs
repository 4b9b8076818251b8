//! Interactive read-dispatch loop on top of [`Terminal`].

pub mod builtins;
pub mod output;

use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use tracing::{debug, info};

use crate::config::ShellSettings;
use crate::{CommandArgs, Dispatched, Outcome, Terminal};

pub use builtins::{register_builtins, Builtins, Transcript, QUIT_COMMAND};
pub use output::Printer;

pub const HELP_COMMAND: &str = "help";

/// Counters reported when the loop ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Non-blank lines read
    pub lines: usize,
    /// Lines whose handler returned an error
    pub failed: usize,
    /// Lines naming no registered command
    pub missed: usize,
}

pub struct Shell {
    terminal: Terminal,
    settings: ShellSettings,
    printer: Printer,
    transcript: Transcript,
    quit: Rc<Cell<bool>>,
    builtins: Option<Builtins>,
}

impl Shell {
    /// Wrap `terminal`, adding a `quit` command unless one is registered.
    pub fn new(mut terminal: Terminal, settings: ShellSettings) -> Self {
        let quit = Rc::new(Cell::new(false));
        if !terminal.contains(QUIT_COMMAND) {
            terminal.register(builtins::quit_command(Rc::clone(&quit)));
        }
        Self {
            terminal,
            printer: Printer::new(settings.color),
            settings,
            transcript: Transcript::default(),
            quit,
            builtins: None,
        }
    }

    /// Shell preloaded with the demo commands.
    pub fn with_builtins(settings: ShellSettings) -> Self {
        let mut shell = Self::new(Terminal::new(), settings);
        shell.builtins = Some(register_builtins(&mut shell.terminal, &shell.transcript));
        shell
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    pub fn builtins(&self) -> Option<&Builtins> {
        self.builtins.as_ref()
    }

    /// Handle for commands that want their output routed through the shell.
    pub fn transcript(&self) -> Transcript {
        Rc::clone(&self.transcript)
    }

    pub fn has_quit(&self) -> bool {
        self.quit.get()
    }

    /// Read lines until EOF or `quit`, dispatching each one.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<RunSummary> {
        let mut summary = RunSummary::default();
        let mut lines = input.lines();

        while !self.has_quit() {
            self.printer.prompt(&mut output, &self.settings.prompt)?;
            let Some(line) = lines.next() else {
                writeln!(output)?;
                break;
            };
            self.execute(&line?, &mut output, &mut summary)?;
        }

        info!(?summary, "shell finished");
        Ok(summary)
    }

    /// Dispatch one line and report its result to `output`.
    pub fn execute<W: Write>(
        &self,
        line: &str,
        output: &mut W,
        summary: &mut RunSummary,
    ) -> io::Result<()> {
        let args = CommandArgs::parse(line);
        let Some(name) = args.name() else {
            return Ok(());
        };
        summary.lines += 1;

        if name == HELP_COMMAND && !self.terminal.contains(HELP_COMMAND) {
            return self.write_help(output);
        }

        let mut on_miss = || summary.missed += 1;
        let dispatched = self.terminal.dispatch_args(&args, Some(&mut on_miss));
        self.flush_transcript(output)?;

        match dispatched {
            Ok(Dispatched::Handled(Outcome::Ok(()))) => {
                if self.settings.show_ok {
                    self.printer.success(output, name)?;
                }
            }
            Ok(Dispatched::Handled(Outcome::Err(msg))) => {
                debug!(name, %msg, "handler failed");
                summary.failed += 1;
                self.printer.error(output, &msg)?;
            }
            Ok(Dispatched::Fallback) => {
                self.printer.warning(output, &self.settings.not_found_message)?;
            }
            Err(not_found) => {
                summary.missed += 1;
                self.printer.error(output, &not_found)?;
            }
        }
        Ok(())
    }

    /// Write and clear whatever handlers pushed into the transcript.
    pub fn flush_transcript<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let lines: Vec<String> = self.transcript.borrow_mut().drain(..).collect();
        for line in lines {
            self.printer.info(output, &line)?;
        }
        Ok(())
    }

    fn write_help<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let mut entries: Vec<(&str, &str)> = self
            .terminal
            .commands()
            .into_iter()
            .map(|(name, cmd)| (name, cmd.description()))
            .collect();
        entries.push((HELP_COMMAND, "Show available commands"));
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let width = entries.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        self.printer.header(output, "Commands:")?;
        for (name, description) in entries {
            self.printer
                .info(output, &format!("  {name:<width$}  {description}"))?;
        }
        Ok(())
    }
}
