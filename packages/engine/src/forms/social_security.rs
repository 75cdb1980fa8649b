//! Handler for the social security notice form (LOMS05).

use super::handler::FormHandler;
use crate::fields;
use crate::types::{ExtractedPage, FormType, SocialSecurityPage};

/// Literal title printed on the first page of a social security notice.
const FORM_TITLE: &str = "Sozialversicherungsnachweis";

/// Handler for LOMS05 social security notices.
///
/// Employee-scoped like the salary form, but carries no employee name
/// and no monetary fields.
pub struct SocialSecurityHandler;

impl FormHandler for SocialSecurityHandler {
    fn form_type(&self) -> FormType {
        FormType::SocialSecurity
    }

    fn has_personnel_numbers(&self) -> bool {
        true
    }

    fn is_first_page(&self, text: &str) -> bool {
        fields::has_personnel_number_label(text) || text.contains(FORM_TITLE)
    }

    fn extract_metadata(&self, text: &str, page_index: usize) -> ExtractedPage {
        ExtractedPage::SocialSecurity(SocialSecurityPage {
            personnel_number: fields::extract_personnel_number(text),
            date: fields::extract_period(text),
            page_index,
            raw_text: text.to_string(),
            is_first_page: self.is_first_page(text),
        })
    }
}
