//! Shared field-level text extractors.
//!
//! Every extractor is a pure function of the page text and degrades to
//! `None` (or an empty [`DateInfo`]) when its pattern does not match.
//! Source documents vary in layout and completeness; a miss is expected
//! behavior, never an error.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::{GERMAN_MONTHS, MIN_PLAUSIBLE_YEAR};
use crate::types::DateInfo;

/// Label alternation preceding a personnel number on DATEV forms.
const PERSONNEL_LABELS: &str = r"personalnummer|personal-nr\.|pers\.-nr\.|pn";

/// Label alternation preceding an explicit form number.
const FORM_NUMBER_LABELS: &str = r"form\.-nr\.|formular-nr\.|f\.-nr\.";

/// German currency amount: `.` as thousands separator, `,` before cents.
const CURRENCY_AMOUNT: &str = r"\d{1,3}(?:\.\d{3})*,\d{2}";

/// Personnel number: a 4-6 digit run following one of the known labels.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PERSONNEL_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(?i:{PERSONNEL_LABELS})\s*:?\s*(\d{{4,6}})\b"
    ))
    .expect("valid regex")
});

/// Presence check for a personnel-number label (page-break signal).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PERSONNEL_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"\b(?i:{PERSONNEL_LABELS})")).expect("valid regex"));

/// Period: a German month name immediately followed by a 4-digit year.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PERIOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b({})\s+(\d{{4}})\b",
        GERMAN_MONTHS.join("|")
    ))
    .expect("valid regex")
});

/// Explicit form-number marker followed by an alphanumeric code.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static FORM_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(?i:{FORM_NUMBER_LABELS})\s*:?\s*([A-Za-z0-9]+)"
    ))
    .expect("valid regex")
});

/// German IBAN: `DE` plus 20 digits, optionally space-separated.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static IBAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bDE(?:\s?\d){20}\b").expect("valid regex"));

/// First currency amount following the "Gehalt" line item.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static GROSS_AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?s)\bGehalt\b.*?({CURRENCY_AMOUNT})\b")).expect("valid regex")
});

/// First currency amount following an IBAN-shaped token group.
///
/// A bank reference number may sit between IBAN and amount; the lazy gap
/// skips it because a plain digit run never matches the currency shape.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NET_AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?s)\bDE(?:\s?\d){{20}}\b.*?({CURRENCY_AMOUNT})\b"
    ))
    .expect("valid regex")
});

/// Employee name heuristic: text after the personnel-number label and a
/// one-character code marker, up to (excluding) a capitalized token ending
/// in a street suffix. Positional, fragile by construction; a layout
/// deviation yields `None`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static EMPLOYEE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(?i:{PERSONNEL_LABELS})\s*:?\s*\d{{4,6}}\s+[A-Z]\s+((?:[A-ZÄÖÜ][a-zäöüß]+(?:-[A-ZÄÖÜ][a-zäöüß]+)?\s+)+?)[A-ZÄÖÜ][a-zäöüß]*(?:straße|strasse|weg|platz|allee|gasse|ring)\b"
    ))
    .expect("valid regex")
});

/// Extract the first personnel number following a known label.
#[must_use]
pub fn extract_personnel_number(text: &str) -> Option<String> {
    PERSONNEL_NUMBER_RE
        .captures(text)
        .map(|caps| caps[1].to_string())
}

/// True if the text contains a personnel-number label at all.
#[must_use]
pub fn has_personnel_number_label(text: &str) -> bool {
    PERSONNEL_LABEL_RE.is_match(text)
}

/// Extract the first (month, year) period.
#[must_use]
pub fn extract_period(text: &str) -> DateInfo {
    match PERIOD_RE.captures(text) {
        Some(caps) => DateInfo::new(&caps[1], &caps[2]),
        None => DateInfo::empty(),
    }
}

/// Extract the first plausible (month, year) period.
///
/// Years below [`MIN_PLAUSIBLE_YEAR`] are skipped so footnote references
/// to historical dates cannot be mistaken for the statement period.
#[must_use]
pub fn extract_plausible_period(text: &str) -> DateInfo {
    for caps in PERIOD_RE.captures_iter(text) {
        let year_ok = caps[2]
            .parse::<u16>()
            .is_ok_and(|year| year >= MIN_PLAUSIBLE_YEAR);
        if year_ok {
            return DateInfo::new(&caps[1], &caps[2]);
        }
    }
    DateInfo::empty()
}

/// Extract the first explicit form code, uppercased.
#[must_use]
pub fn extract_form_code(text: &str) -> Option<String> {
    FORM_CODE_RE
        .captures(text)
        .map(|caps| caps[1].to_uppercase())
}

/// Extract the first IBAN, with embedded spaces stripped.
#[must_use]
pub fn extract_iban(text: &str) -> Option<String> {
    IBAN_RE
        .find(text)
        .map(|m| m.as_str().split_whitespace().collect())
}

/// Extract the gross amount (first currency amount after "Gehalt").
#[must_use]
pub fn extract_gross_amount(text: &str) -> Option<String> {
    GROSS_AMOUNT_RE
        .captures(text)
        .map(|caps| normalize_amount(&caps[1]))
}

/// Extract the net amount (first currency amount after the IBAN).
#[must_use]
pub fn extract_net_amount(text: &str) -> Option<String> {
    NET_AMOUNT_RE
        .captures(text)
        .map(|caps| normalize_amount(&caps[1]))
}

/// Extract the employee name via the positional street-token heuristic.
#[must_use]
pub fn extract_employee_name(text: &str) -> Option<String> {
    EMPLOYEE_NAME_RE
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|name| !name.is_empty())
}

/// Convert a German-formatted amount to a canonical decimal string.
///
/// Removes `.` thousands separators and replaces the `,` decimal
/// separator with `.`.
#[must_use]
pub fn normalize_amount(raw: &str) -> String {
    raw.replace('.', "").replace(',', ".")
}
