use std::io::{self, Write};

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::config::ShellSettings;
use crate::exitcode;
use crate::shell::Shell;
use crate::Outcome;

/// Resolve settings from config layers plus CLI overrides.
pub fn resolve_settings(cli: &Cli) -> CliResult<ShellSettings> {
    let mut settings = ShellSettings::load(cli.config.as_deref())?;
    if let Some(prompt) = &cli.prompt {
        settings.prompt = prompt.clone();
    }
    if cli.no_color {
        settings.color = false;
    }
    debug!(?settings, "resolved settings");
    Ok(settings)
}

#[instrument(skip(cli))]
pub fn execute_command(cli: &Cli) -> CliResult<i32> {
    let settings = resolve_settings(cli)?;
    let mut shell = Shell::with_builtins(settings);

    if cli.commands.is_empty() {
        let stdin = io::stdin();
        shell
            .run(stdin.lock(), io::stdout())
            .map_err(|e| CliError::io("interactive session", e))?;
        return Ok(exitcode::OK);
    }

    let mut stdout = io::stdout().lock();
    for line in &cli.commands {
        run_line(&shell, line, &mut stdout)?;
    }
    Ok(exitcode::OK)
}

/// Dispatch one line strictly: a miss or a handler error aborts the run.
pub fn run_line<W: Write>(shell: &Shell, line: &str, output: &mut W) -> CliResult<()> {
    let dispatched = shell.terminal().dispatch(line, None)?;
    shell
        .flush_transcript(output)
        .map_err(|e| CliError::io("write output", e))?;
    match dispatched.outcome().and_then(Outcome::err_value) {
        Some(msg) => Err(CliError::Command(msg)),
        None => Ok(()),
    }
}
