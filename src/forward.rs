//! Forwarding body synthesizer.
//!
//! Builds the seed declaration: the target signature with a body of exactly
//! one statement, a call to the target forwarding every parameter by its
//! own name as both label and value. Effect markers wrap the call with
//! failure propagation outermost (`try await f(...)`, never `await try`),
//! so the markers compose correctly when the host re-parses the output.

use crate::ast::{Argument, CallExpr, CodeBlock, Expr, FunctionDecl};

/// Builds the single-statement forwarding body for `decl`.
pub fn forwarding_body(decl: &FunctionDecl) -> CodeBlock {
    let args = decl
        .params
        .iter()
        .map(|param| Argument {
            label: param.name.clone(),
            value: Expr::Ident(param.name.clone(), param.span),
            span: param.span,
        })
        .collect();

    let mut statement = Expr::Call(CallExpr {
        callee: decl.name.clone(),
        args,
        span: decl.span,
    });
    let effects = decl.effects();
    if effects.is_async {
        statement = Expr::Await(Box::new(statement), decl.span);
    }
    if effects.throws {
        statement = Expr::Try(Box::new(statement), decl.span);
    }

    CodeBlock {
        statements: vec![statement],
        span: decl.span,
    }
}

/// Returns an independent copy of `target` carrying a forwarding body: the
/// seed from which every overload variant descends.
pub fn seed_declaration(target: &FunctionDecl) -> FunctionDecl {
    let mut seed = target.clone();
    seed.body = Some(forwarding_body(target));
    seed
}
