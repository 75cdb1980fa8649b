//! Run manifest, written as `manifest.json` next to the output PDFs.
//!
//! The manifest records what the run produced and from where, so a
//! follow-up step (or a human) can audit the split without reopening
//! the source PDF.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use lohnsplit_engine::{CompanyGroup, PersonnelGroup};
use serde::Serialize;

use crate::error::Result;
use crate::naming;

/// Summary of one splitter run.
#[derive(Debug, Serialize)]
pub struct Manifest {
    /// Source PDF path as given on the command line.
    pub input: String,

    /// Number of pages in the source PDF.
    pub page_count: usize,

    /// Per-employee documents written.
    pub personnel_documents: Vec<PersonnelEntry>,

    /// Company-wide documents written.
    pub company_documents: Vec<CompanyEntry>,

    /// Number of data rows in the SEPA CSV.
    pub sepa_rows: usize,
}

/// Manifest entry for one per-employee document.
#[derive(Debug, Serialize)]
pub struct PersonnelEntry {
    /// Output filename, relative to the output directory.
    pub file: String,

    pub personnel_number: String,
    pub employee_name: String,

    /// German month name of the statement period, if known.
    pub month: Option<String>,

    /// Year of the statement period, if known.
    pub year: Option<String>,

    /// Zero-based source page indices, in page order.
    pub pages: Vec<usize>,
}

impl PersonnelEntry {
    pub(crate) fn from_group(group: &PersonnelGroup) -> Result<Self> {
        Ok(Self {
            file: naming::personnel_filename(group)?,
            personnel_number: group.personnel_number.clone(),
            employee_name: group.employee_name.clone(),
            month: group.date.month.clone(),
            year: group.date.year.clone(),
            pages: group.page_indices(),
        })
    }
}

/// Manifest entry for one company-wide document.
#[derive(Debug, Serialize)]
pub struct CompanyEntry {
    /// Output filename, relative to the output directory.
    pub file: String,

    /// German month name of the bucket's period, if any.
    pub month: Option<String>,

    /// Year of the bucket's period, if any.
    pub year: Option<String>,

    /// Zero-based source page indices, in page order.
    pub pages: Vec<usize>,
}

impl CompanyEntry {
    pub(crate) fn from_group(group: &CompanyGroup) -> Self {
        Self {
            file: naming::company_filename(group.date.as_ref()),
            month: group.date.as_ref().and_then(|date| date.month.clone()),
            year: group.date.as_ref().and_then(|date| date.year.clone()),
            pages: group.page_indices(),
        }
    }
}

/// Write the manifest as pretty-printed JSON.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
/// This ensures partial writes don't corrupt existing files on crash.
pub fn write_manifest(manifest: &Manifest, output_dir: &Path) -> Result<PathBuf> {
    let output_file = output_dir.join("manifest.json");
    let temp_file = output_dir.join(".manifest.json.tmp");

    let content = serde_json::to_string_pretty(manifest)?;

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.write_all(b"\n")?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(&output_file)?;
    }

    fs::rename(&temp_file, &output_file)?;

    Ok(output_file)
}
