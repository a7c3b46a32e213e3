//! Attribute argument reader.
//!
//! Extracts the target function name and the parameter-name to
//! default-expression table from an attribute's labeled argument list. The
//! default expressions are stored unevaluated and spliced into generated
//! code verbatim, including a bare `nil` literal.

use std::collections::BTreeMap;

use crate::ast::{Attribute, Expr};
use crate::diagnostics::{ExpandError, SourceArc};
use crate::err_ctx;

/// The parsed `argName -> defaultExpression` table driving overload
/// generation.
///
/// A `BTreeMap` makes the two structural requirements hold by construction:
/// keys are unique, and iteration is ascending lexicographic — the
/// deterministic tie-break the generator relies on.
pub type DefaultMap = BTreeMap<String, Expr>;

/// How to treat `defaultValues` keys that are not plain string literals.
///
/// The legacy reader silently dropped them; the strict reader rejects the
/// whole invocation. Strict is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    #[default]
    Strict,
    Lenient,
}

/// Reads the `funcName` argument: must be present and a plain,
/// single-segment string literal.
pub fn read_func_name(attr: &Attribute, src: &SourceArc) -> Result<String, ExpandError> {
    let arg = attr.arg("funcName").ok_or_else(|| {
        err_ctx!(
            InvalidArgument,
            format!("attribute `{}` requires a `funcName` argument", attr.name),
            src,
            attr.span
        )
    })?;
    match &arg.value {
        Expr::Str(lit) => lit.content_text().map(str::to_owned).ok_or_else(|| {
            err_ctx!(
                InvalidArgument,
                "`funcName` must be a plain string literal",
                src,
                lit.span,
                "interpolated and multi-segment strings are not accepted here"
            )
        }),
        other => Err(err_ctx!(
            InvalidArgument,
            "`funcName` must be a plain string literal",
            src,
            other.span()
        )),
    }
}

/// Reads the `defaultValues` argument: must be a dictionary literal whose
/// keys are plain string literals. Values are carried verbatim.
pub fn read_defaults(
    attr: &Attribute,
    strictness: Strictness,
    src: &SourceArc,
) -> Result<DefaultMap, ExpandError> {
    let arg = attr.arg("defaultValues").ok_or_else(|| {
        err_ctx!(
            InvalidArgument,
            format!("attribute `{}` requires a `defaultValues` argument", attr.name),
            src,
            attr.span
        )
    })?;
    let Expr::Dict(entries, _) = &arg.value else {
        return Err(err_ctx!(
            InvalidArgument,
            "`defaultValues` must be a dictionary literal",
            src,
            arg.value.span()
        ));
    };

    let mut defaults = DefaultMap::new();
    for (key, value) in entries {
        let name = match key {
            Expr::Str(lit) => lit.content_text(),
            _ => None,
        };
        match name {
            Some(name) => {
                defaults.insert(name.to_owned(), value.clone());
            }
            None if strictness == Strictness::Lenient => continue,
            None => {
                return Err(err_ctx!(
                    InvalidArgument,
                    "`defaultValues` keys must be plain string literals",
                    src,
                    key.span()
                ));
            }
        }
    }
    Ok(defaults)
}
