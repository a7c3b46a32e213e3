//! Expansion orchestrator.
//!
//! Drives one attribute application end to end: read the attribute
//! arguments, locate the named declaration in the container, synthesize the
//! seed, generate the member family per the selected mode, and wrap the
//! result in an extension targeting the container. Each invocation is a
//! pure function of its input trees; invocations share no state and may run
//! in parallel across independent attribute sites.

use crate::ast::{Attribute, ContainerDecl, ExtensionDecl, FunctionDecl};
use crate::attribute::{self, DefaultMap, Strictness};
use crate::diagnostics::{ExpandError, SourceArc};
use crate::err_ctx;
use crate::forward;
use crate::overloads;

/// Which declaration family an attribute application emits.
///
/// The two modes correspond to the two historical implementations of this
/// transformation and are deliberately kept distinct:
///
/// - `OverloadFamily` emits `2^K - 1` trimmed-signature overloads, one per
///   non-empty subset of defaulted parameters.
/// - `ParameterDefaults` emits a single declaration with each default
///   attached to its parameter as an initializer clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpansionMode {
    #[default]
    OverloadFamily,
    ParameterDefaults,
}

/// Per-invocation configuration, supplied by the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandOptions {
    pub mode: ExpansionMode,
    pub strictness: Strictness,
}

/// Finds the first member of `container` with the target name, as a
/// function declaration.
pub fn find_function<'a>(
    container: &'a ContainerDecl,
    name: &str,
    src: &SourceArc,
) -> Result<&'a FunctionDecl, ExpandError> {
    let member = container.members.iter().find(|member| member.name() == name);
    match member {
        Some(member) => member.as_function().ok_or_else(|| {
            err_ctx!(
                FunctionNotFound,
                format!("`{}` in `{}` is not a function declaration", name, container.name),
                src,
                container.span
            )
        }),
        None => Err(err_ctx!(
            FunctionNotFound,
            format!("no member named `{}` in `{}`", name, container.name),
            src,
            container.span
        )),
    }
}

/// Attaches each default to its parameter as an initializer clause, on a
/// single forwarding declaration.
pub fn apply_parameter_defaults(
    mut decl: FunctionDecl,
    defaults: &DefaultMap,
    src: &SourceArc,
) -> Result<FunctionDecl, ExpandError> {
    let span = decl.span;
    for (name, value) in defaults {
        let param = decl
            .params
            .iter_mut()
            .find(|param| param.name == *name)
            .ok_or_else(|| {
                err_ctx!(
                    ArgNameNotFound,
                    format!("`{}` does not name a parameter of `{}`", name, decl.name),
                    src,
                    span
                )
            })?;
        param.default_value = Some(value.clone());
    }
    Ok(decl)
}

/// Expands one attribute application into an extension declaration.
///
/// Fails atomically: any malformed argument, missing target, or unknown
/// default key aborts the invocation with no partial output.
pub fn expand(
    attr: &Attribute,
    container: &ContainerDecl,
    options: &ExpandOptions,
    src: &SourceArc,
) -> Result<ExtensionDecl, ExpandError> {
    let func_name = attribute::read_func_name(attr, src)?;
    let defaults = attribute::read_defaults(attr, options.strictness, src)?;
    let target = find_function(container, &func_name, src)?;
    let seed = forward::seed_declaration(target);

    let members = match options.mode {
        ExpansionMode::OverloadFamily => overloads::generate_overloads(&seed, &defaults, src)?,
        ExpansionMode::ParameterDefaults => {
            vec![apply_parameter_defaults(seed, &defaults, src)?]
        }
    };

    Ok(ExtensionDecl {
        target: container.name.clone(),
        members,
        span: attr.span,
    })
}

/// `expand` with default options; the shape registered under the
/// `DefaultArgument` attribute name.
pub fn expand_default(
    attr: &Attribute,
    container: &ContainerDecl,
    src: &SourceArc,
) -> Result<ExtensionDecl, ExpandError> {
    expand(attr, container, &ExpandOptions::default(), src)
}
