//! End-to-end split pipeline.
//!
//! Loads the source PDF, runs the engine's classify/group pipeline over
//! the page texts, and materializes the outputs: one PDF per employee,
//! one PDF per company-wide bucket, the SEPA CSV, and the manifest.

use std::fs::{self, File};
use std::path::Path;

use lohnsplit_engine::{group_by_personnel, GroupedPages, PageClassifier};
use lopdf::Document;
use tracing::{debug, info};

use crate::error::Result;
use crate::manifest::{CompanyEntry, Manifest, PersonnelEntry};
use crate::{pdf, sepa};

/// Split `input` into grouped documents under `output_dir`.
///
/// Returns the manifest describing everything that was written. The
/// output directory is created if missing; existing files with the
/// same names are overwritten.
pub fn split_document(input: &Path, output_dir: &Path) -> Result<Manifest> {
    let document = pdf::load_document(input)?;
    let texts = pdf::extract_page_texts(&document)?;
    info!(pages = texts.len(), "Loaded input PDF");

    let classifier = PageClassifier::default();
    let pages = classifier.classify_all(&texts);
    let grouped = group_by_personnel(pages);
    info!(
        personnel_groups = grouped.personnel_groups.len(),
        company_groups = grouped.company_groups.len(),
        "Grouped pages"
    );

    fs::create_dir_all(output_dir)?;
    write_outputs(&document, &grouped, input, texts.len(), output_dir)
}

fn write_outputs(
    document: &Document,
    grouped: &GroupedPages,
    input: &Path,
    page_count: usize,
    output_dir: &Path,
) -> Result<Manifest> {
    let mut personnel_documents = Vec::with_capacity(grouped.personnel_groups.len());
    for group in &grouped.personnel_groups {
        let entry = PersonnelEntry::from_group(group)?;
        let bytes = pdf::assemble_pages(document, &entry.pages, &entry.file)?;
        fs::write(output_dir.join(&entry.file), bytes)?;
        debug!(file = %entry.file, pages = entry.pages.len(), "Wrote personnel document");
        personnel_documents.push(entry);
    }

    let mut company_documents = Vec::with_capacity(grouped.company_groups.len());
    for group in &grouped.company_groups {
        let entry = CompanyEntry::from_group(group);
        let bytes = pdf::assemble_pages(document, &entry.pages, &entry.file)?;
        fs::write(output_dir.join(&entry.file), bytes)?;
        debug!(file = %entry.file, pages = entry.pages.len(), "Wrote company document");
        company_documents.push(entry);
    }

    let sepa_file = File::create(output_dir.join("sepa.csv"))?;
    let sepa_rows = sepa::write_sepa_csv(sepa_file, &grouped.personnel_groups)?;
    debug!(rows = sepa_rows, "Wrote SEPA CSV");

    let manifest = Manifest {
        input: input.display().to_string(),
        page_count,
        personnel_documents,
        company_documents,
        sepa_rows,
    };
    crate::manifest::write_manifest(&manifest, output_dir)?;

    Ok(manifest)
}
