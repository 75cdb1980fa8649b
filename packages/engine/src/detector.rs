//! Form detection and page classification.
//!
//! Detection is driven solely by the explicit form-number marker; there
//! is no content-keyword fallback. Pages without a marker are always
//! classified `Unknown`, even if their body text otherwise resembles a
//! known form.

use crate::fields;
use crate::forms::FormRegistry;
use crate::types::{ExtractedPage, FormType};

/// Decide the form type for a page from its raw text.
///
/// Searches for an explicit form-number marker ("Form.-Nr.",
/// "Formular-Nr.", "F.-Nr.") followed by an alphanumeric code, uppercases
/// the code and looks it up against the registered variant tags. A
/// missing marker or an unregistered code yields [`FormType::Unknown`].
#[must_use]
pub fn detect_form_type(text: &str) -> FormType {
    match fields::extract_form_code(text) {
        Some(code) => {
            let form_type = FormType::from_code(&code);
            if form_type == FormType::Unknown {
                tracing::debug!(code = %code, "unregistered form code");
            }
            form_type
        }
        None => FormType::Unknown,
    }
}

/// Classifier that turns raw per-page text into tagged page records.
///
/// Composes the form detector with the registry's per-variant extractors.
pub struct PageClassifier {
    registry: FormRegistry,
}

impl PageClassifier {
    /// Create a classifier with the given registry.
    #[must_use]
    pub fn new(registry: FormRegistry) -> Self {
        Self { registry }
    }

    /// Get a reference to the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &FormRegistry {
        &self.registry
    }

    /// Classify a single page.
    ///
    /// # Arguments
    /// * `text` - The page's raw text
    /// * `page_index` - Zero-based position in the source document
    #[must_use]
    pub fn classify(&self, text: &str, page_index: usize) -> ExtractedPage {
        let form_type = detect_form_type(text);
        tracing::debug!(
            page_index,
            form_type = form_type.as_str(),
            "classified page"
        );
        self.registry.handler(form_type).extract_metadata(text, page_index)
    }

    /// Classify a document's pages in order.
    ///
    /// Page indices are assigned from the slice positions, so the input
    /// must be in source page order.
    #[must_use]
    pub fn classify_all<S: AsRef<str>>(&self, texts: &[S]) -> Vec<ExtractedPage> {
        texts
            .iter()
            .enumerate()
            .map(|(page_index, text)| self.classify(text.as_ref(), page_index))
            .collect()
    }
}

impl Default for PageClassifier {
    fn default() -> Self {
        Self::new(FormRegistry::with_known_forms())
    }
}
