use std::fmt::Write;

use ahk_common::tokens;
use ahk_ir::{Expr, Primitive, QualifiedName, TypeRef};

use crate::context::EmitContext;
use crate::error::{EmitError, EmitResult};
use crate::expressions::is_internal_type;
use crate::printer::Printer;

impl<W: Write> Printer<W> {
    // =========================================================================
    // References
    // =========================================================================

    pub(crate) fn emit_field_reference(
        &mut self,
        target: Option<&Expr>,
        field: &str,
        ctx: EmitContext,
    ) -> EmitResult {
        if let Some(target) = target {
            self.emit(target, ctx.nested())?;
            if self.options.field_separator && !is_internal_type(target) {
                self.write(tokens::CONCATENATE)?;
            }
        }
        self.write(field)
    }

    pub(crate) fn emit_type_reference(&mut self, type_ref: &TypeRef) -> EmitResult {
        if type_ref.internal {
            return Ok(());
        }
        self.write(&type_ref.name)
    }

    /// Static names are written as-is. Segmented names write literal
    /// segments raw and wrap each nested reference in `%`, so
    /// `["arr", ref(i)]` becomes `arr%i%`.
    pub(crate) fn emit_qualified_name(
        &mut self,
        name: &QualifiedName,
        ctx: EmitContext,
    ) -> EmitResult {
        match name {
            QualifiedName::Literal(text) => self.write(text),
            QualifiedName::Parts(parts) => {
                for part in parts {
                    match part {
                        Expr::Primitive(Primitive::String(text)) => self.write(text)?,
                        Expr::Primitive(value) => self.emit_primitive(value)?,
                        Expr::ComplexReference(_) => {
                            self.write(tokens::RESOLVE)?;
                            self.emit(part, ctx.nested())?;
                            self.write(tokens::RESOLVE)?;
                        }
                        other => {
                            return Err(EmitError::MalformedReference { part: other.kind() });
                        }
                    }
                }
                Ok(())
            }
        }
    }
}
