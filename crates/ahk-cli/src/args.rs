use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use ahk_common::NewLineKind;
use ahk_common::limits;
use ahk_emitter::PrintOptions;

/// CLI arguments for the ahkgen binary.
#[derive(Parser, Debug)]
#[command(
    name = "ahkgen",
    version,
    about = "Emit AutoHotkey source from a lowered syntax tree"
)]
pub struct CliArgs {
    /// JSON file holding the statement list, or `-` to read stdin.
    pub input: PathBuf,

    /// Write the generated script here instead of stdout.
    #[arg(short = 'o', long = "out")]
    pub out: Option<PathBuf>,

    /// Emit and report errors without writing any output.
    #[arg(long)]
    pub check: bool,

    // ==================== Emitter Options ====================
    /// Escape quotes, backticks and control characters in string literals.
    #[arg(long = "escape-strings")]
    pub escape_strings: bool,

    /// Write `.` between a field reference's target and its name.
    #[arg(long = "field-separator")]
    pub field_separator: bool,

    /// Deepest expression nesting accepted before emission fails.
    #[arg(long = "max-depth")]
    pub max_depth: Option<u32>,

    /// Line terminator written after each statement.
    #[arg(long = "new-line", value_enum, ignore_case = true)]
    pub new_line: Option<NewLine>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum NewLine {
    Lf,
    Crlf,
}

impl From<NewLine> for NewLineKind {
    fn from(value: NewLine) -> Self {
        match value {
            NewLine::Lf => Self::LineFeed,
            NewLine::Crlf => Self::CarriageReturnLineFeed,
        }
    }
}

impl CliArgs {
    /// Emitter options selected on the command line.
    pub fn print_options(&self) -> PrintOptions {
        PrintOptions {
            escape_strings: self.escape_strings,
            field_separator: self.field_separator,
            max_depth: self
                .max_depth
                .unwrap_or_else(limits::default_max_emit_depth),
            new_line: self.new_line.map(NewLineKind::from).unwrap_or_default(),
            ..PrintOptions::default()
        }
    }

    /// Whether the input is read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input.as_path() == Path::new("-")
    }
}

#[cfg(test)]
#[path = "../tests/args_tests.rs"]
mod tests;
