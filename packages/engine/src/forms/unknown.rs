//! Fallback handler for pages without a registered form code.

use super::handler::FormHandler;
use crate::fields;
use crate::types::{ExtractedPage, FormType, UnknownPage};

/// Handler for unrecognized forms.
///
/// Never extracts a personnel number or name; such pages cannot be
/// attributed to an employee and are always treated as company-wide.
/// Makes a best-effort extraction of the explicit form code and of a
/// plausible period.
pub struct UnknownFormHandler;

impl FormHandler for UnknownFormHandler {
    fn form_type(&self) -> FormType {
        FormType::Unknown
    }

    fn has_personnel_numbers(&self) -> bool {
        false
    }

    fn is_first_page(&self, _text: &str) -> bool {
        // Every unknown page is its own logical document.
        true
    }

    fn extract_metadata(&self, text: &str, page_index: usize) -> ExtractedPage {
        ExtractedPage::Unknown(UnknownPage {
            form_code: fields::extract_form_code(text),
            date: fields::extract_plausible_period(text),
            page_index,
            raw_text: text.to_string(),
        })
    }
}
