//! Page grouping: reassemble classified pages into logical documents.
//!
//! A single forward pass over the ordered page sequence, with exactly one
//! piece of cross-iteration state: the current personnel context. A
//! continuation page (no personnel number of its own, not company-wide)
//! is attributed to the most recently established context. There is no
//! backtracking; a later page can never change where an earlier page was
//! routed. The grouper never fails: it always produces a valid (possibly
//! empty) pair of collections.

use std::collections::BTreeMap;

use crate::config::UNKNOWN_EMPLOYEE_NAME;
use crate::types::{CompanyGroup, DateInfo, ExtractedPage, GroupedPages, PersonnelGroup};

/// Fold accumulator for the routing pass.
#[derive(Debug, Default)]
struct GroupAccumulator {
    /// The personnel number whose document we are currently inside.
    current_personnel: Option<String>,

    /// Employee pages keyed by personnel number, in original page order.
    personnel_pages: BTreeMap<String, Vec<ExtractedPage>>,

    /// Company-wide pages (and orphaned leading continuations).
    company_pages: Vec<ExtractedPage>,
}

impl GroupAccumulator {
    /// Route one page, updating the personnel context as needed.
    fn route(mut self, page: ExtractedPage) -> Self {
        // The company-wide flag takes precedence over any personnel
        // number physically present in the text.
        if page.is_company_wide() {
            self.company_pages.push(page);
            return self;
        }

        if let Some(number) = page.personnel_number() {
            self.current_personnel = Some(number.to_string());
        }

        match self.current_personnel.clone() {
            Some(number) => {
                self.personnel_pages.entry(number).or_default().push(page);
            }
            None => {
                // Continuation page before any personnel context was
                // established: fall back to the company bucket.
                tracing::debug!(
                    page_index = page.page_index(),
                    "continuation page without personnel context"
                );
                self.company_pages.push(page);
            }
        }
        self
    }
}

/// Partition an ordered page sequence into personnel and company groups.
///
/// Pages within each group keep their original order. Emitted group order
/// is deterministic (sorted by personnel number, then by company period)
/// but intentionally not first-seen order.
#[must_use]
pub fn group_by_personnel(pages: Vec<ExtractedPage>) -> GroupedPages {
    let accumulated = pages
        .into_iter()
        .fold(GroupAccumulator::default(), GroupAccumulator::route);

    let personnel_groups: Vec<PersonnelGroup> = accumulated
        .personnel_pages
        .into_iter()
        .map(|(number, pages)| {
            // Name and date come from the group's first page only.
            let first = &pages[0];
            PersonnelGroup {
                employee_name: first
                    .employee_name()
                    .unwrap_or(UNKNOWN_EMPLOYEE_NAME)
                    .to_string(),
                date: first.date().clone(),
                personnel_number: number,
                pages,
            }
        })
        .collect();

    let inferred = infer_shared_period(&personnel_groups);
    let company_groups = bucket_company_pages(accumulated.company_pages, inferred);

    GroupedPages {
        personnel_groups,
        company_groups,
    }
}

/// The period shared by every personnel group, if they all agree on one
/// identical complete (month, year) pair.
fn infer_shared_period(groups: &[PersonnelGroup]) -> Option<(String, String)> {
    let mut iter = groups.iter();
    let (month, year) = iter.next()?.date.as_pair()?;
    for group in iter {
        if group.date.as_pair() != Some((month, year)) {
            tracing::debug!("personnel groups disagree on period, no inference");
            return None;
        }
    }
    Some((month.to_string(), year.to_string()))
}

/// Bucket company pages by explicit period, inferred period, or no date.
fn bucket_company_pages(
    pages: Vec<ExtractedPage>,
    inferred: Option<(String, String)>,
) -> Vec<CompanyGroup> {
    let mut buckets: BTreeMap<Option<(String, String)>, Vec<ExtractedPage>> = BTreeMap::new();

    for page in pages {
        let key = page
            .date()
            .as_pair()
            .map(|(month, year)| (month.to_string(), year.to_string()))
            .or_else(|| inferred.clone());
        buckets.entry(key).or_default().push(page);
    }

    buckets
        .into_iter()
        .map(|(key, pages)| CompanyGroup {
            date: key.map(|(month, year)| DateInfo::new(month, year)),
            pages,
        })
        .collect()
}
