//! Convenience constructors for syntax trees.
//!
//! Hosts that assemble attribute and container trees programmatically (and
//! this crate's own tests) use these instead of spelling out spans by hand.
//! All nodes carry `Span::default()`; hosts with real source positions
//! construct the `ast` types directly.

use crate::ast::{
    Attribute, ContainerDecl, Decl, Expr, FunctionDecl, LabeledExpr, Parameter, Span, StringLit,
};

pub fn str_lit(text: &str) -> Expr {
    Expr::Str(StringLit::plain(text, Span::default()))
}

pub fn int(value: i64) -> Expr {
    Expr::Int(value, Span::default())
}

pub fn null() -> Expr {
    Expr::Null(Span::default())
}

pub fn ident(name: &str) -> Expr {
    Expr::Ident(name.to_string(), Span::default())
}

/// An opaque source fragment, spliced into generated code verbatim.
pub fn raw(text: &str) -> Expr {
    Expr::Raw(text.to_string(), Span::default())
}

pub fn dict(entries: Vec<(Expr, Expr)>) -> Expr {
    Expr::Dict(entries, Span::default())
}

pub fn labeled(label: &str, value: Expr) -> LabeledExpr {
    LabeledExpr {
        label: Some(label.to_string()),
        value,
        span: Span::default(),
    }
}

pub fn attribute(name: &str, args: Vec<LabeledExpr>) -> Attribute {
    Attribute {
        name: name.to_string(),
        args,
        span: Span::default(),
    }
}

pub fn protocol(name: &str, members: Vec<Decl>) -> ContainerDecl {
    ContainerDecl {
        name: name.to_string(),
        members,
        span: Span::default(),
    }
}

pub fn property(name: &str, ty: &str) -> Decl {
    Decl::Property {
        name: name.to_string(),
        ty: ty.to_string(),
        span: Span::default(),
    }
}

/// Builder for function declarations; maintains the trailing-comma
/// separator invariant as parameters are appended.
#[derive(Debug, Clone)]
pub struct FunctionBuilder {
    decl: FunctionDecl,
}

impl FunctionBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            decl: FunctionDecl {
                name: name.to_string(),
                params: Vec::new(),
                is_async: false,
                throws: false,
                return_type: None,
                body: None,
                span: Span::default(),
            },
        }
    }

    pub fn param(mut self, name: &str, ty: &str) -> Self {
        if let Some(last) = self.decl.params.last_mut() {
            last.has_trailing_comma = true;
        }
        self.decl.params.push(Parameter {
            name: name.to_string(),
            ty: ty.to_string(),
            default_value: None,
            has_trailing_comma: false,
            span: Span::default(),
        });
        self
    }

    pub fn asynchronous(mut self) -> Self {
        self.decl.is_async = true;
        self
    }

    pub fn throwing(mut self) -> Self {
        self.decl.throws = true;
        self
    }

    pub fn returns(mut self, ty: &str) -> Self {
        self.decl.return_type = Some(ty.to_string());
        self
    }

    pub fn build(self) -> FunctionDecl {
        self.decl
    }

    /// Finishes the builder as a container member.
    pub fn member(self) -> Decl {
        Decl::Function(self.decl)
    }
}
