//! # Syntax Tree Module
//!
//! The tree representation the expansion engine operates on. The host
//! compiler produces these nodes from source text and splices the emitted
//! extension back into its output; this crate never parses raw text.
//!
//! ## Invariants
//! - All nodes carry spans into the host-provided source.
//! - In a parameter list, every parameter except the last carries a
//!   trailing comma.
//! - A forwarding body holds exactly one statement: a call expression,
//!   optionally wrapped in `try`/`await` markers (try outermost).

use serde::{Deserialize, Serialize};

// All AST nodes carry a span for source tracking; enables better errors
// attached to the attribute site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// One segment of a string literal: literal text or an interpolation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StringSegment {
    Text(String),
    Interpolation(Box<Expr>),
}

/// A string literal, possibly interpolated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringLit {
    pub segments: Vec<StringSegment>,
    pub span: Span,
}

impl StringLit {
    /// A plain, single-segment string literal.
    pub fn plain(text: impl Into<String>, span: Span) -> Self {
        Self {
            segments: vec![StringSegment::Text(text.into())],
            span,
        }
    }

    /// Returns the literal text if this is a single plain segment.
    ///
    /// Interpolated or multi-segment literals yield `None`; the attribute
    /// reader rejects those wherever a plain literal is required.
    pub fn content_text(&self) -> Option<&str> {
        match self.segments.as_slice() {
            [StringSegment::Text(text)] => Some(text),
            _ => None,
        }
    }
}

/// An expression fragment.
///
/// Default expressions from the attribute are carried verbatim and never
/// evaluated; `Raw` holds any source fragment the host cannot or need not
/// classify further.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Str(StringLit),
    Null(Span),
    Int(i64, Span),
    Ident(String, Span),
    Raw(String, Span),
    Dict(Vec<(Expr, Expr)>, Span),
    Call(CallExpr),
    Await(Box<Expr>, Span),
    Try(Box<Expr>, Span),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Str(lit) => lit.span,
            Expr::Null(span) => *span,
            Expr::Int(_, span) => *span,
            Expr::Ident(_, span) => *span,
            Expr::Raw(_, span) => *span,
            Expr::Dict(_, span) => *span,
            Expr::Call(call) => call.span,
            Expr::Await(_, span) => *span,
            Expr::Try(_, span) => *span,
        }
    }

    /// Unwraps to the underlying call expression, looking through any
    /// `try`/`await` markers.
    pub fn as_call(&self) -> Option<&CallExpr> {
        match self {
            Expr::Call(call) => Some(call),
            Expr::Await(inner, _) | Expr::Try(inner, _) => inner.as_call(),
            _ => None,
        }
    }

    /// Mutable counterpart of [`Expr::as_call`]. Mutating through the
    /// markers leaves the markers themselves intact.
    pub fn as_call_mut(&mut self) -> Option<&mut CallExpr> {
        match self {
            Expr::Call(call) => Some(call),
            Expr::Await(inner, _) | Expr::Try(inner, _) => inner.as_call_mut(),
            _ => None,
        }
    }

    /// Renders the expression as source text.
    pub fn pretty(&self) -> String {
        match self {
            Expr::Str(lit) => {
                let inner: String = lit
                    .segments
                    .iter()
                    .map(|segment| match segment {
                        StringSegment::Text(text) => text.clone(),
                        StringSegment::Interpolation(expr) => {
                            format!("\\({})", expr.pretty())
                        }
                    })
                    .collect();
                format!("\"{}\"", inner)
            }
            Expr::Null(_) => "nil".to_string(),
            Expr::Int(value, _) => value.to_string(),
            Expr::Ident(name, _) => name.clone(),
            Expr::Raw(text, _) => text.clone(),
            Expr::Dict(entries, _) => {
                if entries.is_empty() {
                    return "[:]".to_string();
                }
                let inner = entries
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key.pretty(), value.pretty()))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("[{}]", inner)
            }
            Expr::Call(call) => call.pretty(),
            Expr::Await(inner, _) => format!("await {}", inner.pretty()),
            Expr::Try(inner, _) => format!("try {}", inner.pretty()),
        }
    }
}

/// A labeled argument inside a call expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub label: String,
    pub value: Expr,
    pub span: Span,
}

/// A call expression with labeled arguments.
///
/// Invariant: in a forwarding body the argument labels are a permutation of
/// the target's full original parameter names, regardless of how many
/// parameters the enclosing signature still declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub callee: String,
    pub args: Vec<Argument>,
    pub span: Span,
}

impl CallExpr {
    pub fn pretty(&self) -> String {
        let args = self
            .args
            .iter()
            .map(|arg| format!("{}: {}", arg.label, arg.value.pretty()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({})", self.callee, args)
    }
}

/// A simple name-and-type parameter. Destructured and variadic patterns are
/// not representable; the host rejects those before reaching this engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub ty: String,
    /// Initializer clause, populated only by the parameter-defaults
    /// expansion mode.
    pub default_value: Option<Expr>,
    pub has_trailing_comma: bool,
    pub span: Span,
}

impl Parameter {
    pub fn pretty(&self) -> String {
        let mut out = format!("{}: {}", self.name, self.ty);
        if let Some(default) = &self.default_value {
            out.push_str(&format!(" = {}", default.pretty()));
        }
        if self.has_trailing_comma {
            out.push_str(", ");
        }
        out
    }
}

/// Effect markers of a signature: whether a call may suspend and whether it
/// may propagate failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Effects {
    pub is_async: bool,
    pub throws: bool,
}

/// A single code block; forwarding bodies hold exactly one statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub statements: Vec<Expr>,
    pub span: Span,
}

/// A function declaration, with or without a body.
///
/// Protocol requirements carry no body; every declaration this engine emits
/// carries a single-statement forwarding body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<Parameter>,
    pub is_async: bool,
    pub throws: bool,
    pub return_type: Option<String>,
    pub body: Option<CodeBlock>,
    pub span: Span,
}

impl FunctionDecl {
    /// Pure call-shape analysis: reads the effect markers off the
    /// signature. Absence of both markers is the common case.
    pub fn effects(&self) -> Effects {
        Effects {
            is_async: self.is_async,
            throws: self.throws,
        }
    }

    /// Restores the separator invariant after parameter removal: only the
    /// last parameter may lack a trailing comma, and it must.
    pub fn normalize_param_commas(&mut self) {
        let count = self.params.len();
        for (index, param) in self.params.iter_mut().enumerate() {
            param.has_trailing_comma = index + 1 < count;
        }
    }

    /// Renders the declaration as source text. Bodied declarations span
    /// multiple lines with four-space indentation.
    pub fn pretty(&self) -> String {
        let params: String = self.params.iter().map(Parameter::pretty).collect();
        let mut header = format!("func {}({})", self.name, params);
        if self.is_async {
            header.push_str(" async");
        }
        if self.throws {
            header.push_str(" throws");
        }
        if let Some(ret) = &self.return_type {
            header.push_str(&format!(" -> {}", ret));
        }
        match &self.body {
            None => header,
            Some(block) => {
                let mut out = format!("{} {{\n", header);
                for statement in &block.statements {
                    out.push_str(&format!("    {}\n", statement.pretty()));
                }
                out.push('}');
                out
            }
        }
    }
}

/// A member of a container declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decl {
    Function(FunctionDecl),
    Property { name: String, ty: String, span: Span },
}

impl Decl {
    pub fn name(&self) -> &str {
        match self {
            Decl::Function(func) => &func.name,
            Decl::Property { name, .. } => name,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionDecl> {
        match self {
            Decl::Function(func) => Some(func),
            Decl::Property { .. } => None,
        }
    }
}

/// A protocol-like container whose member list is scanned for the target
/// function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerDecl {
    pub name: String,
    pub members: Vec<Decl>,
    pub span: Span,
}

/// The extension emitted back to the host: generated declarations scoped to
/// the original container type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionDecl {
    pub target: String,
    pub members: Vec<FunctionDecl>,
    pub span: Span,
}

impl ExtensionDecl {
    /// Renders the extension as source text, members indented one level.
    pub fn pretty(&self) -> String {
        let mut out = format!("extension {} {{\n", self.target);
        for member in &self.members {
            for line in member.pretty().lines() {
                if line.is_empty() {
                    out.push('\n');
                } else {
                    out.push_str(&format!("    {}\n", line));
                }
            }
        }
        out.push('}');
        out
    }
}

/// A labeled expression inside an attribute's argument list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledExpr {
    pub label: Option<String>,
    pub value: Expr,
    pub span: Span,
}

/// A structured attribute attached to a container declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub args: Vec<LabeledExpr>,
    pub span: Span,
}

impl Attribute {
    /// Finds the first argument carrying the given label.
    pub fn arg(&self, label: &str) -> Option<&LabeledExpr> {
        self.args
            .iter()
            .find(|arg| arg.label.as_deref() == Some(label))
    }
}
