//! Form handler trait definition.

use crate::types::{ExtractedPage, FormType};

/// Trait for form-variant handlers.
///
/// Handlers encapsulate, per form variant, the text patterns needed to
/// decide if a page starts a new logical document and to pull out every
/// field the variant defines. Extraction is a pure function of the page
/// text: it never fails, and every field defaults to absent when its
/// pattern does not match.
pub trait FormHandler: Send + Sync {
    /// Return the form type this handler is registered for.
    fn form_type(&self) -> FormType;

    /// True if this variant's pages are employee-scoped (carry personnel
    /// numbers). Company-wide variants return false.
    fn has_personnel_numbers(&self) -> bool;

    /// Check whether the text matches this variant's page-break signal.
    fn is_first_page(&self, text: &str) -> bool;

    /// Extract all fields this variant defines from the page text.
    ///
    /// # Arguments
    /// * `text` - The page's raw text
    /// * `page_index` - Zero-based position in the source document
    fn extract_metadata(&self, text: &str, page_index: usize) -> ExtractedPage;
}
