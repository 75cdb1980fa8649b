//! Core data types for page extraction and grouping.
//!
//! An [`ExtractedPage`] is created once per source page, in page order, and
//! never mutated afterwards. The grouping step consumes the ordered page
//! sequence and produces [`PersonnelGroup`] and [`CompanyGroup`] values
//! that own the pages assigned to them.

use serde::Serialize;

use crate::config::{FORM_CODE_SALARY, FORM_CODE_SOCIAL_SECURITY};

/// The known form variants a page can be classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormType {
    /// Salary statement (LOGN17).
    Salary,

    /// Social security notice (LOMS05).
    SocialSecurity,

    /// Any page without a registered form code.
    Unknown,
}

impl FormType {
    /// The DATEV form code this variant is registered under.
    ///
    /// `Unknown` has no code of its own.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Salary => Some(FORM_CODE_SALARY),
            Self::SocialSecurity => Some(FORM_CODE_SOCIAL_SECURITY),
            Self::Unknown => None,
        }
    }

    /// Look up a form type by its (already uppercased) form code.
    ///
    /// Unregistered codes map to `Unknown`.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            FORM_CODE_SALARY => Self::Salary,
            FORM_CODE_SOCIAL_SECURITY => Self::SocialSecurity,
            _ => Self::Unknown,
        }
    }

    /// Stable lowercase name for logging and manifest output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::SocialSecurity => "social_security",
            Self::Unknown => "unknown",
        }
    }
}

/// The period a page or group pertains to.
///
/// Month is a German month name literal; neither field is validated
/// against a calendar beyond presence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DateInfo {
    /// German month name (e.g. "Oktober").
    pub month: Option<String>,

    /// Four-digit year as a string (e.g. "2025").
    pub year: Option<String>,
}

impl DateInfo {
    /// Create a date with both fields set.
    #[must_use]
    pub fn new(month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            month: Some(month.into()),
            year: Some(year.into()),
        }
    }

    /// Create a date with neither field set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// True if both month and year are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.month.is_some() && self.year.is_some()
    }

    /// The (month, year) pair, if complete.
    #[must_use]
    pub fn as_pair(&self) -> Option<(&str, &str)> {
        match (self.month.as_deref(), self.year.as_deref()) {
            (Some(month), Some(year)) => Some((month, year)),
            _ => None,
        }
    }
}

/// A salary statement page (LOGN17).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryPage {
    /// Personnel number, present on the first page of an employee document.
    pub personnel_number: Option<String>,

    /// Employee name, extracted via a positional heuristic.
    pub employee_name: Option<String>,

    /// Statement period.
    pub date: DateInfo,

    /// Gross amount as a canonical decimal string (e.g. "3500.00").
    pub gross_amount: Option<String>,

    /// Net amount as a canonical decimal string.
    pub net_amount: Option<String>,

    /// IBAN with embedded spaces stripped.
    pub iban: Option<String>,

    /// Zero-based position in the source document.
    pub page_index: usize,

    /// The page's raw text as supplied by the text source.
    pub raw_text: String,

    /// True if the page matches the salary form's page-break signal.
    pub is_first_page: bool,
}

/// A social security notice page (LOMS05). Carries no employee name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialSecurityPage {
    /// Personnel number, present on the first page of an employee document.
    pub personnel_number: Option<String>,

    /// Statement period.
    pub date: DateInfo,

    /// Zero-based position in the source document.
    pub page_index: usize,

    /// The page's raw text as supplied by the text source.
    pub raw_text: String,

    /// True if the page matches the form's page-break signal.
    pub is_first_page: bool,
}

/// A page without a registered form code. Always company-wide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownPage {
    /// The detected form code, if an explicit marker was present.
    pub form_code: Option<String>,

    /// Best-effort period, filtered for plausibility.
    pub date: DateInfo,

    /// Zero-based position in the source document.
    pub page_index: usize,

    /// The page's raw text as supplied by the text source.
    pub raw_text: String,
}

/// A classified page, discriminated by form type.
///
/// Unknown pages are always company-wide and always count as first pages;
/// the other variants are employee-scoped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "form_type", rename_all = "snake_case")]
pub enum ExtractedPage {
    /// Salary statement (LOGN17).
    Salary(SalaryPage),

    /// Social security notice (LOMS05).
    SocialSecurity(SocialSecurityPage),

    /// Unregistered or unmarked form.
    Unknown(UnknownPage),
}

impl ExtractedPage {
    /// The form type tag of this page.
    #[must_use]
    pub fn form_type(&self) -> FormType {
        match self {
            Self::Salary(_) => FormType::Salary,
            Self::SocialSecurity(_) => FormType::SocialSecurity,
            Self::Unknown(_) => FormType::Unknown,
        }
    }

    /// Zero-based position in the source document.
    #[must_use]
    pub fn page_index(&self) -> usize {
        match self {
            Self::Salary(page) => page.page_index,
            Self::SocialSecurity(page) => page.page_index,
            Self::Unknown(page) => page.page_index,
        }
    }

    /// The page's raw text.
    #[must_use]
    pub fn raw_text(&self) -> &str {
        match self {
            Self::Salary(page) => &page.raw_text,
            Self::SocialSecurity(page) => &page.raw_text,
            Self::Unknown(page) => &page.raw_text,
        }
    }

    /// True iff the variant cannot carry a personnel number.
    ///
    /// This flag, not the form tag, drives grouping decisions.
    #[must_use]
    pub fn is_company_wide(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// True if the page starts a new logical document.
    #[must_use]
    pub fn is_first_page(&self) -> bool {
        match self {
            Self::Salary(page) => page.is_first_page,
            Self::SocialSecurity(page) => page.is_first_page,
            Self::Unknown(_) => true,
        }
    }

    /// The personnel number carried by this page, if any.
    #[must_use]
    pub fn personnel_number(&self) -> Option<&str> {
        match self {
            Self::Salary(page) => page.personnel_number.as_deref(),
            Self::SocialSecurity(page) => page.personnel_number.as_deref(),
            Self::Unknown(_) => None,
        }
    }

    /// The employee name carried by this page, if any.
    #[must_use]
    pub fn employee_name(&self) -> Option<&str> {
        match self {
            Self::Salary(page) => page.employee_name.as_deref(),
            Self::SocialSecurity(_) | Self::Unknown(_) => None,
        }
    }

    /// The period extracted from this page.
    #[must_use]
    pub fn date(&self) -> &DateInfo {
        match self {
            Self::Salary(page) => &page.date,
            Self::SocialSecurity(page) => &page.date,
            Self::Unknown(page) => &page.date,
        }
    }
}

/// All pages belonging to one employee, in original page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonnelGroup {
    /// Personnel number (non-empty group key).
    pub personnel_number: String,

    /// Employee name from the group's first page, or the "Unknown" sentinel.
    pub employee_name: String,

    /// Period from the group's first page.
    pub date: DateInfo,

    /// Pages assigned to this employee, in original page order.
    pub pages: Vec<ExtractedPage>,
}

impl PersonnelGroup {
    /// Zero-based source page indices of this group, in page order.
    #[must_use]
    pub fn page_indices(&self) -> Vec<usize> {
        self.pages.iter().map(ExtractedPage::page_index).collect()
    }

    /// The first salary-variant page in this group, if any.
    #[must_use]
    pub fn first_salary_page(&self) -> Option<&SalaryPage> {
        self.pages.iter().find_map(|page| match page {
            ExtractedPage::Salary(salary) => Some(salary),
            _ => None,
        })
    }
}

/// Company-wide pages sharing one period (or no period at all).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyGroup {
    /// The bucket's period: explicit, inferred, or absent.
    pub date: Option<DateInfo>,

    /// Pages assigned to this bucket, in original page order.
    pub pages: Vec<ExtractedPage>,
}

impl CompanyGroup {
    /// Zero-based source page indices of this group, in page order.
    #[must_use]
    pub fn page_indices(&self) -> Vec<usize> {
        self.pages.iter().map(ExtractedPage::page_index).collect()
    }
}

/// The two output collections produced by one grouping invocation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupedPages {
    /// One group per distinct personnel number.
    pub personnel_groups: Vec<PersonnelGroup>,

    /// Company-wide buckets, one per period plus at most one undated bucket.
    pub company_groups: Vec<CompanyGroup>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_type_codes() {
        assert_eq!(FormType::Salary.code(), Some("LOGN17"));
        assert_eq!(FormType::SocialSecurity.code(), Some("LOMS05"));
        assert_eq!(FormType::Unknown.code(), None);
    }

    #[test]
    fn test_form_type_from_code() {
        assert_eq!(FormType::from_code("LOGN17"), FormType::Salary);
        assert_eq!(FormType::from_code("LOMS05"), FormType::SocialSecurity);
        assert_eq!(FormType::from_code("LOST01"), FormType::Unknown);
        assert_eq!(FormType::from_code(""), FormType::Unknown);
    }

    #[test]
    fn test_date_info_completeness() {
        assert!(DateInfo::new("Oktober", "2025").is_complete());
        assert!(!DateInfo::empty().is_complete());
        assert!(!DateInfo {
            month: Some("Oktober".to_string()),
            year: None,
        }
        .is_complete());
    }

    #[test]
    fn test_date_info_as_pair() {
        let date = DateInfo::new("Oktober", "2025");
        assert_eq!(date.as_pair(), Some(("Oktober", "2025")));
        assert_eq!(DateInfo::empty().as_pair(), None);
    }

    #[test]
    fn test_unknown_page_is_company_wide_and_first() {
        let page = ExtractedPage::Unknown(UnknownPage {
            form_code: None,
            date: DateInfo::empty(),
            page_index: 3,
            raw_text: "irrelevant".to_string(),
        });

        assert!(page.is_company_wide());
        assert!(page.is_first_page());
        assert_eq!(page.personnel_number(), None);
        assert_eq!(page.page_index(), 3);
    }

    #[test]
    fn test_employee_pages_are_not_company_wide() {
        let page = ExtractedPage::SocialSecurity(SocialSecurityPage {
            personnel_number: Some("12345".to_string()),
            date: DateInfo::empty(),
            page_index: 0,
            raw_text: String::new(),
            is_first_page: true,
        });

        assert!(!page.is_company_wide());
        assert_eq!(page.personnel_number(), Some("12345"));
    }

    #[test]
    fn test_first_salary_page_skips_other_variants() {
        let social = ExtractedPage::SocialSecurity(SocialSecurityPage {
            personnel_number: Some("12345".to_string()),
            date: DateInfo::empty(),
            page_index: 0,
            raw_text: String::new(),
            is_first_page: true,
        });
        let salary = ExtractedPage::Salary(SalaryPage {
            personnel_number: Some("12345".to_string()),
            employee_name: Some("Max Mustermann".to_string()),
            date: DateInfo::new("Oktober", "2025"),
            gross_amount: Some("3500.00".to_string()),
            net_amount: Some("2100.50".to_string()),
            iban: Some("DE89370400440532013000".to_string()),
            page_index: 1,
            raw_text: String::new(),
            is_first_page: true,
        });

        let group = PersonnelGroup {
            personnel_number: "12345".to_string(),
            employee_name: "Max Mustermann".to_string(),
            date: DateInfo::new("Oktober", "2025"),
            pages: vec![social, salary],
        };

        let first = group.first_salary_page().unwrap();
        assert_eq!(first.page_index, 1);
        assert_eq!(group.page_indices(), vec![0, 1]);
    }

    #[test]
    fn test_extracted_page_serialization_tag() {
        let page = ExtractedPage::Unknown(UnknownPage {
            form_code: Some("LOST01".to_string()),
            date: DateInfo::empty(),
            page_index: 0,
            raw_text: String::new(),
        });

        let json = serde_json::to_string(&page).unwrap();
        assert!(json.contains("\"form_type\":\"unknown\""));
        assert!(json.contains("\"form_code\":\"LOST01\""));
    }
}
