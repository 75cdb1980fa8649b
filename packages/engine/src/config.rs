//! Configuration constants for the extraction engine.

/// DATEV form code for salary statements (Lohn-/Gehaltsabrechnung).
pub const FORM_CODE_SALARY: &str = "LOGN17";

/// DATEV form code for social security notices (Sozialversicherungsnachweis).
pub const FORM_CODE_SOCIAL_SECURITY: &str = "LOMS05";

/// Sentinel employee name used when no name could be extracted for a group.
pub const UNKNOWN_EMPLOYEE_NAME: &str = "Unknown";

/// Earliest year accepted when scanning unknown pages for a period.
///
/// Unknown forms often carry footnote references to historical dates
/// (legal bases, contribution tables). Years below this floor are skipped
/// so they cannot be mistaken for the statement period.
pub const MIN_PLAUSIBLE_YEAR: u16 = 2020;

/// German month names as they appear on DATEV payroll forms.
pub const GERMAN_MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];
