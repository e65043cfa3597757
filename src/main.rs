//! `quill` - Unicode bold/italic styling and multi-cursor edits from the shell

use std::io::{self, IsTerminal, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;

use quill::cli::CliArgs;
use quill::config::EditorConfig;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    quill::tracing::init();

    let run = args.into_config()?;
    let config = EditorConfig::load();

    let input = match run.text {
        Some(text) => text,
        None => read_stdin()?,
    };
    tracing::debug!(action = ?run.action, input_len = input.len(), "running");

    let output = run.action.run(&input, &config)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output).context("Failed to write output")?;
    Ok(())
}

/// Read all of stdin, dropping one trailing newline
fn read_stdin() -> Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        tracing::warn!("reading input from terminal, end with Ctrl-D");
    }

    let mut input = String::new();
    stdin
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;

    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}
