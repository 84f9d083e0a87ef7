use std::fmt::Write;

use ahk_common::tokens;
use ahk_ir::Primitive;

use crate::error::{EmitError, EmitResult};
use crate::printer::Printer;

impl<W: Write> Printer<W> {
    // =========================================================================
    // Literals
    // =========================================================================

    pub(crate) fn emit_primitive(&mut self, value: &Primitive) -> EmitResult {
        match value {
            Primitive::Null => self.write(tokens::NULL_TXT),
            Primitive::String(text) => self.emit_string_literal(text),
            Primitive::Boolean(b) => self.write(if *b {
                tokens::TRUE_TXT
            } else {
                tokens::FALSE_TXT
            }),
            Primitive::Integer(n) => {
                write!(self.writer, "{n}")?;
                Ok(())
            }
            Primitive::Float(n) if n.is_finite() => {
                write!(self.writer, "{n}")?;
                Ok(())
            }
            Primitive::Decimal(d) => {
                write!(self.writer, "{d}")?;
                Ok(())
            }
            Primitive::Float(_) | Primitive::Char(_) => Err(EmitError::UnsupportedLiteral {
                value: format!("{value:?}"),
            }),
        }
    }

    fn emit_string_literal(&mut self, text: &str) -> EmitResult {
        self.write_char(tokens::STRING_BOUND)?;
        if self.options.escape_strings {
            self.emit_escaped_string(text)?;
        } else {
            self.write(text)?;
        }
        self.write_char(tokens::STRING_BOUND)
    }

    /// AutoHotkey doubles a quote inside a quoted string and uses the
    /// backtick for every other escape.
    fn emit_escaped_string(&mut self, text: &str) -> EmitResult {
        for ch in text.chars() {
            let escaped = match ch {
                '"' => {
                    self.write("\"\"")?;
                    continue;
                }
                '\n' => 'n',
                '\r' => 'r',
                '\t' => 't',
                tokens::ESCAPE => tokens::ESCAPE,
                c => {
                    self.write_char(c)?;
                    continue;
                }
            };
            self.write_char(tokens::ESCAPE)?;
            self.write_char(escaped)?;
        }
        Ok(())
    }
}
