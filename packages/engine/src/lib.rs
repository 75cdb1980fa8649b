//! Lohnsplit extraction engine - Classify and group DATEV payroll PDF pages.
//!
//! This crate is the pure core of the lohnsplit tool: given the plain
//! text of each page of a payroll PDF, it classifies every page into a
//! known form variant, extracts structured fields, and reassembles the
//! page sequence into per-employee and company-wide logical documents,
//! inferring missing periods from sibling pages.
//!
//! It performs no I/O. Field-level extraction misses are never errors;
//! they degrade to absent fields by design, because source documents
//! vary in layout and completeness.
//!
//! # Example
//!
//! ```
//! use lohnsplit_engine::{group_by_personnel, PageClassifier};
//!
//! let classifier = PageClassifier::default();
//! let pages = classifier.classify_all(&[
//!     "Form.-Nr. LOGN17 Personalnummer 12345 Gehalt 3.500,00",
//!     "Form.-Nr. LOGN17 Fortsetzung",
//! ]);
//!
//! let grouped = group_by_personnel(pages);
//! assert_eq!(grouped.personnel_groups.len(), 1);
//! assert_eq!(grouped.personnel_groups[0].page_indices(), vec![0, 1]);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Form codes, month names, plausibility constants
//! - [`types`]: Core data types (`ExtractedPage`, groups, `DateInfo`)
//! - [`fields`]: Shared regex-based field extractors
//! - [`forms`]: Per-variant form handlers and their registry
//! - [`detector`]: Marker-only form detection and page classification
//! - [`grouping`]: Single-pass grouping with continuation tracking

pub mod config;
pub mod detector;
pub mod fields;
pub mod forms;
pub mod grouping;
pub mod types;

// Re-export the main pipeline entry points
pub use detector::{detect_form_type, PageClassifier};
pub use grouping::group_by_personnel;

// Re-export commonly used items
pub use forms::{FormHandler, FormRegistry};
pub use types::{
    CompanyGroup, DateInfo, ExtractedPage, FormType, GroupedPages, PersonnelGroup, SalaryPage,
    SocialSecurityPage, UnknownPage,
};
