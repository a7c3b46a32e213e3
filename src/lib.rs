//! # defargs
//!
//! Attribute macro engine that synthesizes default-argument overload
//! families for protocol declarations.
//!
//! Given a function declaration with `N` parameters and an attribute naming
//! `K` of them with default expressions, the engine emits one extension
//! declaration containing `2^K - 1` overloads — one per non-empty subset of
//! defaultable parameters dropped from the call site — each forwarding to
//! the original with the defaults inlined and the `try`/`await` call shape
//! preserved.
//!
//! The engine consumes already-parsed trees ([`ast`]) and produces an
//! [`ast::ExtensionDecl`]; lexing, parsing, and splicing belong to the host
//! compiler. Typical host flow:
//!
//! ```rust
//! use defargs::ast_builder::{attribute, dict, labeled, protocol, str_lit, int, null, FunctionBuilder};
//! use defargs::registry::build_default_registry;
//! use defargs::to_error_source;
//!
//! let attr = attribute("DefaultArgument", vec![
//!     labeled("funcName", str_lit("getItems")),
//!     labeled("defaultValues", dict(vec![
//!         (str_lit("pageSize"), int(20)),
//!         (str_lit("pageToken"), null()),
//!     ])),
//! ]);
//! let container = protocol("ItemRepositoryProtocol", vec![
//!     FunctionBuilder::new("getItems")
//!         .param("pageSize", "Int")
//!         .param("pageToken", "String?")
//!         .returns("[Item]")
//!         .member(),
//! ]);
//!
//! let registry = build_default_registry();
//! let expander = registry.lookup(&attr.name).unwrap();
//! let src = to_error_source("ItemRepository.swift", "");
//! let extension = expander(&attr, &container, &src).unwrap();
//! assert_eq!(extension.members.len(), 3);
//! ```

pub use crate::diagnostics::{to_error_source, ErrorContext, ErrorType, ExpandError, SourceArc};

pub mod ast;
pub mod ast_builder;
pub mod attribute;
pub mod diagnostics;
pub mod expand;
pub mod forward;
pub mod overloads;
pub mod registry;
