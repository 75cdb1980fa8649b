//! Handler for the salary statement form (LOGN17).

use super::handler::FormHandler;
use crate::fields;
use crate::types::{ExtractedPage, FormType, SalaryPage};

/// Literal title printed on the first page of a salary statement.
const FORM_TITLE: &str = "Lohn-/Gehaltsabrechnung";

/// Handler for LOGN17 salary statements.
///
/// The richest variant: besides personnel number and period it extracts
/// the gross amount, the net amount, the IBAN and (heuristically) the
/// employee name.
pub struct SalaryHandler;

impl FormHandler for SalaryHandler {
    fn form_type(&self) -> FormType {
        FormType::Salary
    }

    fn has_personnel_numbers(&self) -> bool {
        true
    }

    fn is_first_page(&self, text: &str) -> bool {
        fields::has_personnel_number_label(text) || text.contains(FORM_TITLE)
    }

    fn extract_metadata(&self, text: &str, page_index: usize) -> ExtractedPage {
        ExtractedPage::Salary(SalaryPage {
            personnel_number: fields::extract_personnel_number(text),
            employee_name: fields::extract_employee_name(text),
            date: fields::extract_period(text),
            gross_amount: fields::extract_gross_amount(text),
            net_amount: fields::extract_net_amount(text),
            iban: fields::extract_iban(text),
            page_index,
            raw_text: text.to_string(),
            is_first_page: self.is_first_page(text),
        })
    }
}
