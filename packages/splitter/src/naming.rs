//! Output filename construction.
//!
//! Filenames encode the group kind, period, and (for employee
//! documents) the personnel number. Absent period components are
//! omitted together with their separator, so the name never carries
//! placeholder segments.

use lohnsplit_engine::{DateInfo, PersonnelGroup};

use crate::error::{Result, SplitError};

/// Filename for a per-employee document.
///
/// Full form is `PERSONNEL-{year}-{month}-{number}.pdf`; period
/// components drop out individually when absent. A group without a
/// usable personnel number cannot be named and is a generation error.
pub fn personnel_filename(group: &PersonnelGroup) -> Result<String> {
    let number = group.personnel_number.trim();
    if number.is_empty() {
        return Err(SplitError::MissingPersonnelNumber);
    }

    let mut parts = vec!["PERSONNEL".to_string()];
    if let Some(year) = group.date.year.as_deref() {
        parts.push(year.to_string());
    }
    if let Some(month) = group.date.month.as_deref() {
        parts.push(month.to_string());
    }
    parts.push(number.to_string());

    Ok(format!("{}.pdf", parts.join("-")))
}

/// Filename for a company-wide document bucket.
///
/// Full form is `COMPANY-{year}-{month}.pdf`; a bucket without a
/// period is simply `COMPANY.pdf`.
#[must_use]
pub fn company_filename(date: Option<&DateInfo>) -> String {
    let mut parts = vec!["COMPANY".to_string()];
    if let Some(date) = date {
        if let Some(year) = date.year.as_deref() {
            parts.push(year.to_string());
        }
        if let Some(month) = date.month.as_deref() {
            parts.push(month.to_string());
        }
    }
    format!("{}.pdf", parts.join("-"))
}
