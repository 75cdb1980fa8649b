//! Form pattern library: one handler per known form variant.
//!
//! Each handler owns the knowledge of how its form variant lays out its
//! fields and what signals the start of a new logical document. Handlers
//! are registered in a [`FormRegistry`] keyed by form type; unrecognized
//! types fall back to the unknown-form handler.

mod handler;
mod registry;
mod salary;
mod social_security;
mod unknown;

pub use handler::FormHandler;
pub use registry::FormRegistry;
pub use salary::SalaryHandler;
pub use social_security::SocialSecurityHandler;
pub use unknown::UnknownFormHandler;
