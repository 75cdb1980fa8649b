//! Form registry mapping form types to their handlers.

use std::collections::HashMap;

use super::handler::FormHandler;
use super::salary::SalaryHandler;
use super::social_security::SocialSecurityHandler;
use super::unknown::UnknownFormHandler;
use crate::types::FormType;

/// Registry mapping form types to handlers.
///
/// Lookups for unregistered types return the unknown-form fallback
/// handler, so the extraction pipeline cannot fail on an unexpected tag.
pub struct FormRegistry {
    handlers: HashMap<FormType, Box<dyn FormHandler>>,
    fallback: Box<dyn FormHandler>,
}

impl FormRegistry {
    /// Create an empty registry with only the unknown-form fallback.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            fallback: Box::new(UnknownFormHandler),
        }
    }

    /// Create a registry with all known form variants registered.
    #[must_use]
    pub fn with_known_forms() -> Self {
        let mut registry = Self::new();
        registry.register(SalaryHandler);
        registry.register(SocialSecurityHandler);
        registry
    }

    /// Register a handler under its own form type.
    pub fn register(&mut self, handler: impl FormHandler + 'static) {
        self.handlers.insert(handler.form_type(), Box::new(handler));
    }

    /// Get the handler for a form type, falling back to the unknown
    /// handler for any unregistered type.
    #[must_use]
    pub fn handler(&self, form_type: FormType) -> &dyn FormHandler {
        self.handlers
            .get(&form_type)
            .unwrap_or(&self.fallback)
            .as_ref()
    }

    /// Check if a handler is registered for a form type.
    #[must_use]
    pub fn is_registered(&self, form_type: FormType) -> bool {
        self.handlers.contains_key(&form_type)
    }

    /// Return the registered form types.
    #[must_use]
    pub fn registered_types(&self) -> Vec<FormType> {
        self.handlers.keys().copied().collect()
    }
}

impl Default for FormRegistry {
    fn default() -> Self {
        Self::with_known_forms()
    }
}
