//! Overload generator.
//!
//! Produces the complete family of trimmed-signature overloads for a seed
//! declaration: one variant per non-empty subset of defaultable parameters,
//! `2^K - 1` in total for `K` defaults.
//!
//! The family grows by accumulate-and-extend: defaults are processed in
//! ascending lexicographic key order, and each default is applied to every
//! variant generated so far and then to the seed itself. The resulting
//! output order is an artifact of this growth rule and is reproduced
//! exactly; hosts and tests rely on it being deterministic.

use crate::ast::{Expr, FunctionDecl};
use crate::attribute::DefaultMap;
use crate::diagnostics::{ExpandError, SourceArc};
use crate::err_ctx;

/// Generates the overload family for `seed`.
///
/// Validates up front that every default key names a parameter of the seed,
/// so the per-variant removal below cannot miss. Each emitted variant is a
/// fully independent copy; no aliasing across the family.
pub fn generate_overloads(
    seed: &FunctionDecl,
    defaults: &DefaultMap,
    src: &SourceArc,
) -> Result<Vec<FunctionDecl>, ExpandError> {
    for name in defaults.keys() {
        if !seed.params.iter().any(|param| param.name == *name) {
            return Err(err_ctx!(
                ArgNameNotFound,
                format!("`{}` does not name a parameter of `{}`", name, seed.name),
                src,
                seed.span
            ));
        }
    }

    let mut variants: Vec<FunctionDecl> = Vec::new();
    for (arg_name, default) in defaults {
        let mut batch = Vec::with_capacity(variants.len() + 1);
        for variant in &variants {
            batch.push(remove_parameter_and_inline_default(
                variant, arg_name, default, src,
            )?);
        }
        batch.push(remove_parameter_and_inline_default(
            seed, arg_name, default, src,
        )?);
        variants.append(&mut batch);
    }
    Ok(variants)
}

/// Derives one variant from `base`: drops the parameter named `arg_name`
/// from the signature and replaces the matching labeled argument in the
/// forwarding call with `default`. The label is retained — the call still
/// passes the argument, now as a literal.
///
/// The rewrite goes through the body's effect markers in place, so a
/// `try`/`await` wrapping survives untouched.
pub fn remove_parameter_and_inline_default(
    base: &FunctionDecl,
    arg_name: &str,
    default: &Expr,
    src: &SourceArc,
) -> Result<FunctionDecl, ExpandError> {
    let mut decl = base.clone();

    let index = decl
        .params
        .iter()
        .position(|param| param.name == arg_name)
        .ok_or_else(|| {
            err_ctx!(
                ArgNameNotFound,
                format!("`{}` does not name a parameter of `{}`", arg_name, decl.name),
                src,
                decl.span
            )
        })?;
    decl.params.remove(index);
    decl.normalize_param_commas();

    let call = decl
        .body
        .as_mut()
        .and_then(|body| body.statements.first_mut())
        .and_then(Expr::as_call_mut)
        .ok_or_else(|| {
            err_ctx!(
                ArgNameNotFound,
                format!("`{}` has no forwarding call to rewrite", base.name),
                src,
                base.span
            )
        })?;
    let argument = call
        .args
        .iter_mut()
        .find(|arg| arg.label == arg_name)
        .ok_or_else(|| {
            err_ctx!(
                ArgNameNotFound,
                format!(
                    "forwarding call in `{}` has no argument labeled `{}`",
                    base.name, arg_name
                ),
                src,
                base.span
            )
        })?;
    argument.value = default.clone();

    Ok(decl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Span;
    use crate::ast_builder::FunctionBuilder;
    use crate::diagnostics::{to_error_source, ErrorType};
    use crate::forward::seed_declaration;

    fn test_src() -> SourceArc {
        to_error_source("test", "")
    }

    #[test]
    fn removal_clears_trailing_comma_of_new_last_parameter() {
        let seed = seed_declaration(
            &FunctionBuilder::new("getItems")
                .param("pageSize", "Int")
                .param("pageToken", "String?")
                .build(),
        );
        let variant = remove_parameter_and_inline_default(
            &seed,
            "pageToken",
            &Expr::Null(Span::default()),
            &test_src(),
        )
        .unwrap();
        assert_eq!(variant.params.len(), 1);
        assert!(!variant.params[0].has_trailing_comma);
    }

    #[test]
    fn removal_keeps_call_label_with_literal_value() {
        let seed = seed_declaration(
            &FunctionBuilder::new("getItems")
                .param("pageSize", "Int")
                .param("pageToken", "String?")
                .build(),
        );
        let variant = remove_parameter_and_inline_default(
            &seed,
            "pageSize",
            &Expr::Int(20, Span::default()),
            &test_src(),
        )
        .unwrap();
        assert_eq!(
            variant.body.unwrap().statements[0].pretty(),
            "getItems(pageSize: 20, pageToken: pageToken)"
        );
    }

    #[test]
    fn unknown_parameter_fails_with_arg_name_not_found() {
        let seed = seed_declaration(
            &FunctionBuilder::new("getItems").param("pageSize", "Int").build(),
        );
        let err = remove_parameter_and_inline_default(
            &seed,
            "sortKind",
            &Expr::Null(Span::default()),
            &test_src(),
        )
        .unwrap_err();
        assert_eq!(err.error_type(), ErrorType::ArgNameNotFound);
    }
}
