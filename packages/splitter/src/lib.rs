//! Lohnsplit - Split DATEV payroll PDFs into per-employee documents.
//!
//! This crate wraps the pure [`lohnsplit_engine`] pipeline with the
//! I/O it needs in practice: reading the source PDF, writing one PDF
//! per employee and per company-wide bucket, exporting a SEPA transfer
//! CSV, and recording a JSON manifest of the run.
//!
//! # Architecture
//!
//! The splitter is organized into several modules:
//!
//! - [`error`]: Error types and Result alias
//! - [`pdf`]: PDF loading, text extraction, and page assembly
//! - [`naming`]: Output filename construction
//! - [`sepa`]: SEPA transfer CSV export
//! - [`manifest`]: Run manifest generation
//! - [`splitter`]: End-to-end split pipeline
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod error;
pub mod manifest;
pub mod naming;
pub mod pdf;
pub mod sepa;
pub mod splitter;

// Re-export main functions
pub use splitter::split_document;

// Re-export commonly used items
pub use error::{Result, SplitError};
pub use manifest::Manifest;
