use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

use ahk_emitter::{PrintOptions, Printer};
use ahk_ir::Stmt;

use crate::args::CliArgs;

#[derive(Debug, Clone)]
pub struct EmitOutcome {
    /// Generated script text.
    pub script: String,
    pub statement_count: usize,
    /// File the script was written to, when `--out` was given.
    pub written_to: Option<PathBuf>,
}

/// Read, emit and (unless `--check`) write the script to `--out`.
///
/// Writing to stdout is left to the caller so the driver stays testable.
#[tracing::instrument(level = "debug", skip_all, fields(input = %args.input.display()))]
pub fn run(args: &CliArgs) -> Result<EmitOutcome> {
    let text = if args.reads_stdin() {
        read_stdin()?
    } else {
        read_input(&args.input)?
    };
    let stmts = parse_statements(&text)
        .with_context(|| format!("failed to parse {}", input_name(args)))?;

    let script = emit_script(&stmts, args.print_options())
        .with_context(|| format!("failed to emit {}", input_name(args)))?;
    tracing::debug!(
        statements = stmts.len(),
        bytes = script.len(),
        "emitted script"
    );

    let written_to = match (&args.out, args.check) {
        (Some(path), false) => {
            write_output(path, &script)?;
            Some(path.clone())
        }
        _ => None,
    };

    Ok(EmitOutcome {
        script,
        statement_count: stmts.len(),
        written_to,
    })
}

/// Decode a JSON statement list.
pub fn parse_statements(text: &str) -> Result<Vec<Stmt>> {
    let stmts = serde_json::from_str(text).context("input is not a valid statement list")?;
    Ok(stmts)
}

/// Emit a statement list, one statement per line.
pub fn emit_script(stmts: &[Stmt], options: PrintOptions) -> Result<String> {
    let mut printer = Printer::with_options(String::new(), options);
    printer.emit_statements(stmts, 0)?;
    Ok(printer.finish())
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text)
}

fn write_output(path: &Path, script: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }
    std::fs::write(path, script).with_context(|| format!("failed to write {}", path.display()))
}

fn input_name(args: &CliArgs) -> String {
    if args.reads_stdin() {
        "<stdin>".to_string()
    } else {
        args.input.display().to_string()
    }
}
