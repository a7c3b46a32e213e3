//! Attribute macro registry.
//!
//! The host discovers this transformation by name: it builds one registry
//! at startup and dispatches each attribute application through it.
//! Registry Invariant: construct the registry once at the entrypoint and
//! pass it by reference; never build a local registry inside the engine.

use std::collections::HashMap;

use crate::ast::{Attribute, ContainerDecl, ExtensionDecl};
use crate::diagnostics::{ExpandError, SourceArc};
use crate::err_msg;
use crate::expand;

/// An attribute macro: a pure tree-to-tree transformation invoked once per
/// attribute application.
pub type AttributeMacroFn =
    fn(&Attribute, &ContainerDecl, &SourceArc) -> Result<ExtensionDecl, ExpandError>;

/// Registry of attribute macros by attribute name.
///
/// Names are case-sensitive. Lookups take `&self`; the registry is never
/// mutated after host startup.
#[derive(Debug, Clone, Default)]
pub struct MacroRegistry {
    macros: HashMap<String, AttributeMacroFn>,
}

impl MacroRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a macro under `name`, replacing silently.
    ///
    /// Returns the previously registered macro, if any.
    pub fn register(&mut self, name: &str, func: AttributeMacroFn) -> Option<AttributeMacroFn> {
        self.macros.insert(name.to_string(), func)
    }

    /// Registers a macro under `name`, failing if the name is taken.
    pub fn register_or_error(
        &mut self,
        name: &str,
        func: AttributeMacroFn,
    ) -> Result<(), ExpandError> {
        if self.macros.contains_key(name) {
            return Err(err_msg!(
                InvalidArgument,
                "attribute macro `{}` is already registered",
                name
            ));
        }
        self.macros.insert(name.to_string(), func);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<AttributeMacroFn> {
        self.macros.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.macros.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.macros.len()
    }

    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.macros.keys()
    }
}

/// Builds the registry the host installs at startup: the `DefaultArgument`
/// expansion in its default configuration.
pub fn build_default_registry() -> MacroRegistry {
    let mut registry = MacroRegistry::new();
    registry.register("DefaultArgument", expand::expand_default);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_knows_default_argument() {
        let registry = build_default_registry();
        assert!(registry.contains("DefaultArgument"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_registration_is_rejected_by_checked_variant() {
        let mut registry = build_default_registry();
        let result = registry.register_or_error("DefaultArgument", expand::expand_default);
        assert!(result.is_err());
    }

    #[test]
    fn plain_registration_replaces_and_returns_previous() {
        let mut registry = build_default_registry();
        let previous = registry.register("DefaultArgument", expand::expand_default);
        assert!(previous.is_some());
    }
}
