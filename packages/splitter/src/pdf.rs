//! PDF input and assembly built on lopdf.
//!
//! The splitter only needs two capabilities from the PDF layer: the
//! plain text of every page in stable page order, and a new document
//! containing exactly the pages of one group. Text extraction does not
//! preserve layout, only token adjacency, which is all the engine's
//! patterns require.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use lopdf::Document;

use crate::error::{Result, SplitError};

/// Load a PDF document from a file path.
pub fn load_document(path: &Path) -> Result<Document> {
    if !path.is_file() {
        return Err(SplitError::InputNotFound(path.display().to_string()));
    }
    let bytes = fs::read(path)?;
    load_from_bytes(&bytes)
}

/// Load a PDF document from an in-memory buffer.
///
/// An empty buffer is a validation error, surfaced before lopdf is asked
/// to parse anything.
pub fn load_from_bytes(bytes: &[u8]) -> Result<Document> {
    if bytes.is_empty() {
        return Err(SplitError::EmptyInput);
    }
    Ok(Document::load_mem(bytes)?)
}

/// Extract the plain text of every page, in page order.
///
/// The returned vector index matches the zero-based page index used
/// throughout the engine. Failure on any single page fails the whole
/// call, with the offending page index attached.
pub fn extract_page_texts(document: &Document) -> Result<Vec<String>> {
    let pages = document.get_pages();
    let mut texts = Vec::with_capacity(pages.len());

    for (position, page_number) in pages.keys().enumerate() {
        let text = document
            .extract_text(&[*page_number])
            .map_err(|source| SplitError::PageText {
                page_index: position,
                source,
            })?;
        texts.push(text);
    }

    Ok(texts)
}

/// Produce a new document containing exactly the pages at the given
/// zero-based indices, in ascending index order, serialized to bytes.
///
/// `label` names the group in the error raised when it has no pages.
pub fn assemble_pages(source: &Document, page_indices: &[usize], label: &str) -> Result<Vec<u8>> {
    if page_indices.is_empty() {
        return Err(SplitError::EmptyGroup(label.to_string()));
    }

    let total = source.get_pages().len() as u32;
    let keep: HashSet<usize> = page_indices.iter().copied().collect();
    let delete: Vec<u32> = (1..=total)
        .filter(|number| !keep.contains(&((number - 1) as usize)))
        .collect();

    let mut document = source.clone();
    if !delete.is_empty() {
        document.delete_pages(&delete);
    }
    document.prune_objects();
    document.renumber_objects();
    document.compress();

    let mut bytes = Vec::new();
    document.save_to(&mut bytes)?;
    Ok(bytes)
}
