//! End-to-end integration tests for the split pipeline.
//!
//! Builds a small payroll PDF in memory with lopdf, runs the full
//! split, and checks every output artifact: the per-employee PDFs, the
//! company document, the SEPA CSV, and the manifest.

use std::fs;
use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use lohnsplit_splitter::split_document;

/// Build an in-memory PDF with one text line per page.
fn build_pdf(page_texts: &[&str]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let kids: Vec<Object> = page_texts
        .iter()
        .map(|text| {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 11.into()]),
                    Operation::new("Td", vec![50.into(), 780.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            });
            page_id.into()
        })
        .collect();

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// Write the standard four-page payroll fixture to `path`.
///
/// Pages: salary first page and continuation for 12345, an unregistered
/// company-wide notice, and a salary page for a second employee. All
/// text is ASCII because the fixture font uses the standard encoding.
fn write_fixture(path: &Path) {
    let mut doc = build_pdf(&[
        "Form.-Nr. LOGN17 Lohn-/Gehaltsabrechnung Oktober 2025 \
         Personalnummer 12345 M Max Mustermann Musterstrasse 5 10115 Berlin \
         Gehalt 3.500,00 DE89 3704 0044 0532 0130 00 2.100,50",
        "Form.-Nr. LOGN17 Fortsetzung Oktober 2025 Steuerbrutto 3.500,00",
        "Formular-Nr. LOST01 Lohnsteueranmeldung Oktober 2025",
        "Form.-Nr. LOGN17 Lohn-/Gehaltsabrechnung Oktober 2025 \
         Personalnummer 67890 F Erika Musterfrau Beispielweg 2 80331 Muenchen \
         Gehalt 4.000,00 DE02 1203 0000 0000 2020 51 2.500,00",
    ]);
    doc.save(path).expect("fixture PDF should save");
}

#[test]
fn test_split_produces_expected_documents() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("payroll.pdf");
    let output = dir.path().join("out");
    write_fixture(&input);

    let manifest = split_document(&input, &output).expect("split should succeed");

    assert_eq!(manifest.page_count, 4);
    assert_eq!(manifest.personnel_documents.len(), 2);
    assert_eq!(manifest.company_documents.len(), 1);
    assert_eq!(manifest.sepa_rows, 2);

    // Personnel documents come out in personnel number order
    let first = &manifest.personnel_documents[0];
    assert_eq!(first.file, "PERSONNEL-2025-Oktober-12345.pdf");
    assert_eq!(first.employee_name, "Max Mustermann");
    assert_eq!(first.pages, vec![0, 1]);

    let second = &manifest.personnel_documents[1];
    assert_eq!(second.file, "PERSONNEL-2025-Oktober-67890.pdf");
    assert_eq!(second.employee_name, "Erika Musterfrau");
    assert_eq!(second.pages, vec![3]);

    let company = &manifest.company_documents[0];
    assert_eq!(company.file, "COMPANY-2025-Oktober.pdf");
    assert_eq!(company.pages, vec![2]);
}

#[test]
fn test_split_writes_valid_pdfs() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("payroll.pdf");
    let output = dir.path().join("out");
    write_fixture(&input);

    split_document(&input, &output).expect("split should succeed");

    let max = Document::load(output.join("PERSONNEL-2025-Oktober-12345.pdf")).unwrap();
    assert_eq!(max.get_pages().len(), 2);
    let page_one = max.get_pages().keys().copied().collect::<Vec<_>>();
    let text = max.extract_text(&page_one[..1]).unwrap();
    assert!(text.contains("Max Mustermann"));

    let erika = Document::load(output.join("PERSONNEL-2025-Oktober-67890.pdf")).unwrap();
    assert_eq!(erika.get_pages().len(), 1);

    let company = Document::load(output.join("COMPANY-2025-Oktober.pdf")).unwrap();
    assert_eq!(company.get_pages().len(), 1);
    let text = company.extract_text(&[1]).unwrap();
    assert!(text.contains("Lohnsteueranmeldung"));
}

#[test]
fn test_split_writes_sepa_csv() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("payroll.pdf");
    let output = dir.path().join("out");
    write_fixture(&input);

    split_document(&input, &output).expect("split should succeed");

    let csv = fs::read_to_string(output.join("sepa.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "\"beneficiary_name\",\"iban\",\"amount\",\"currency\",\"reference\""
    );
    assert_eq!(
        lines.next().unwrap(),
        "\"Max Mustermann\",\"DE89370400440532013000\",\"2100.50\",\"EUR\",\"Gehalt Oktober 2025 (12345)\""
    );
    assert_eq!(
        lines.next().unwrap(),
        "\"Erika Musterfrau\",\"DE02120300000000202051\",\"2500.00\",\"EUR\",\"Gehalt Oktober 2025 (67890)\""
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn test_split_writes_manifest_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("payroll.pdf");
    let output = dir.path().join("out");
    write_fixture(&input);

    split_document(&input, &output).expect("split should succeed");

    let content = fs::read_to_string(output.join("manifest.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(json["page_count"], 4);
    assert_eq!(json["sepa_rows"], 2);
    assert_eq!(
        json["personnel_documents"][0]["personnel_number"],
        "12345"
    );
    assert_eq!(json["company_documents"][0]["pages"][0], 2);
}

#[test]
fn test_split_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = split_document(&dir.path().join("missing.pdf"), dir.path());
    assert!(result.is_err());
}

#[test]
fn test_cli_runs_end_to_end() {
    use assert_cmd::Command;
    use predicates::prelude::*;

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("payroll.pdf");
    let output = dir.path().join("out");
    write_fixture(&input);

    Command::cargo_bin("lohnsplit")
        .unwrap()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to:"))
        .stdout(predicate::str::contains("PERSONNEL-2025-Oktober-12345.pdf"));

    assert!(output.join("sepa.csv").is_file());
}

#[test]
fn test_cli_reports_missing_input() {
    use assert_cmd::Command;
    use predicates::prelude::*;

    Command::cargo_bin("lohnsplit")
        .unwrap()
        .arg("no-such-file.pdf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}
