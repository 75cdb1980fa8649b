//! SEPA transfer CSV export.
//!
//! One row per personnel group that contains at least one salary page.
//! Rows with a missing IBAN or net amount are still emitted with empty
//! fields, so the operator sees which transfers need manual completion
//! instead of silently losing them.

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};
use lohnsplit_engine::PersonnelGroup;

use crate::error::Result;

const HEADER: [&str; 5] = ["beneficiary_name", "iban", "amount", "currency", "reference"];
const CURRENCY: &str = "EUR";

/// Write the SEPA CSV for the given personnel groups.
///
/// Groups without any salary page are skipped. Returns the number of
/// data rows written.
pub fn write_sepa_csv<W: Write>(out: W, groups: &[PersonnelGroup]) -> Result<usize> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(out);
    writer.write_record(HEADER)?;

    let mut rows = 0;
    for group in groups {
        let Some(salary) = group.first_salary_page() else {
            continue;
        };

        let reference = payment_reference(group);
        writer.write_record([
            group.employee_name.as_str(),
            salary.iban.as_deref().unwrap_or(""),
            salary.net_amount.as_deref().unwrap_or(""),
            CURRENCY,
            reference.as_str(),
        ])?;
        rows += 1;
    }

    writer.flush()?;
    Ok(rows)
}

/// The payment reference line for one group.
///
/// Uses the group period when complete, falling back to the bare
/// personnel number.
fn payment_reference(group: &PersonnelGroup) -> String {
    match group.date.as_pair() {
        Some((month, year)) => {
            format!("Gehalt {month} {year} ({})", group.personnel_number)
        }
        None => format!("Gehalt ({})", group.personnel_number),
    }
}
