//! Unified, `miette`-based diagnostic system for the expansion engine.
//!
//! Every failure mode of an invocation is an [`ExpandError`]. The host
//! surfaces it as a compile-time diagnostic attached to the attribute site;
//! there is no runtime error path. Construction goes through the `err_msg!`
//! and `err_ctx!` macros, which handle context wrapping.

use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use thiserror::Error;

use crate::ast::Span;

// Type alias for clarity and brevity
pub type SourceArc = Arc<NamedSource<String>>;

/// Type-safe error classification corresponding to `ExpandError` variants.
/// Tests match on this instead of message strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// Malformed attribute arguments: missing `funcName`, non-plain string,
    /// `defaultValues` not a dictionary, or a non-string key under strict
    /// reading.
    InvalidArgument,
    /// The named target is missing from the container, or the name belongs
    /// to a non-function member.
    FunctionNotFound,
    /// A default key does not correspond to any parameter of the target, or
    /// a body-argument lookup failed.
    ArgNameNotFound,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidArgument => "InvalidArgument",
            ErrorType::FunctionNotFound => "FunctionNotFound",
            ErrorType::ArgNameNotFound => "ArgNameNotFound",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Minimal, composable error context for diagnostics.
#[derive(Debug, Default)]
pub struct ErrorContext {
    /// The primary source for this error (if any).
    pub source: Option<SourceArc>,
    /// The primary span for this error (if any).
    pub span: Option<Span>,
    /// An optional help message.
    pub help: Option<String>,
}

impl ErrorContext {
    /// Returns an empty error context (no source, span, or help).
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates a context with both source and span.
    pub fn with_source_and_span(source: SourceArc, span: Span) -> Self {
        Self {
            source: Some(source),
            span: Some(span),
            help: None,
        }
    }

    /// Creates a context with source, span, and help message.
    pub fn with_all(source: SourceArc, span: Span, help: String) -> Self {
        Self {
            source: Some(source),
            span: Some(span),
            help: Some(help),
        }
    }
}

/// Unified error type for all engine failure modes.
///
/// Any error aborts the whole invocation immediately; there is no partial
/// output and no recovery. All failures are deterministic functions of the
/// input trees.
#[derive(Debug, Error)]
pub enum ExpandError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String, ctx: ErrorContext },
    #[error("Function not found: {message}")]
    FunctionNotFound { message: String, ctx: ErrorContext },
    #[error("Argument name not found: {message}")]
    ArgNameNotFound { message: String, ctx: ErrorContext },
}

impl ExpandError {
    fn get_ctx(&self) -> &ErrorContext {
        match self {
            ExpandError::InvalidArgument { ctx, .. } => ctx,
            ExpandError::FunctionNotFound { ctx, .. } => ctx,
            ExpandError::ArgNameNotFound { ctx, .. } => ctx,
        }
    }

    fn message(&self) -> &str {
        match self {
            ExpandError::InvalidArgument { message, .. } => message,
            ExpandError::FunctionNotFound { message, .. } => message,
            ExpandError::ArgNameNotFound { message, .. } => message,
        }
    }

    /// Returns the type-safe error classification for this error.
    pub fn error_type(&self) -> ErrorType {
        match self {
            ExpandError::InvalidArgument { .. } => ErrorType::InvalidArgument,
            ExpandError::FunctionNotFound { .. } => ErrorType::FunctionNotFound,
            ExpandError::ArgNameNotFound { .. } => ErrorType::ArgNameNotFound,
        }
    }
}

impl Diagnostic for ExpandError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        None
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.get_ctx()
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn std::fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.get_ctx()
            .source
            .as_ref()
            .map(|s| s.as_ref() as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let ctx = self.get_ctx();
        let span = ctx.span?;
        let len = if span.end > span.start {
            span.end - span.start
        } else {
            1
        };
        let label = LabeledSpan::new(Some(self.message().to_string()), span.start, len);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Wraps host-provided source text into an `Arc<NamedSource<String>>` for
/// use in error contexts.
pub fn to_error_source(name: impl AsRef<str>, source: impl AsRef<str>) -> SourceArc {
    Arc::new(NamedSource::new(
        name.as_ref(),
        source.as_ref().to_string(),
    ))
}

/// Constructs an `ExpandError` variant with a formatted message and no
/// context. Use only where no span is available.
#[macro_export]
macro_rules! err_msg {
    ($variant:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::ExpandError::$variant {
            message: format!($fmt $(, $arg)*),
            ctx: $crate::ErrorContext::none(),
        }
    };
}

/// Constructs an `ExpandError` variant with a message, source, span, and
/// optional help. Pass `src` and `span` directly; the macro handles cloning.
#[macro_export]
macro_rules! err_ctx {
    ($variant:ident, $msg:expr, $src:expr, $span:expr) => {
        $crate::ExpandError::$variant {
            message: $msg.to_string(),
            ctx: $crate::ErrorContext::with_source_and_span(
                $crate::SourceArc::clone($src),
                $span,
            ),
        }
    };
    ($variant:ident, $msg:expr, $src:expr, $span:expr, $help:expr) => {
        $crate::ExpandError::$variant {
            message: $msg.to_string(),
            ctx: $crate::ErrorContext::with_all(
                $crate::SourceArc::clone($src),
                $span,
                format!("{}", $help),
            ),
        }
    };
}
