//! Merge template-defined items with previously persisted items.
//!
//! Matching is by exact `(category, title)` equality. Template order drives
//! the output; persisted items that match nothing in the template are
//! preserved and appended, never dropped.

use siaga_core::models::{ReadinessItem, ReadinessTemplate};
use tracing::debug;

/// Reconcile a template against persisted items into a working checklist.
///
/// For every item definition in template order: a matching persisted item is
/// used verbatim (comments and verifier fields included); otherwise a fresh
/// `tidak_tersedia` item is synthesized. When several persisted items share
/// a `(category, title)` the first in submission order wins and the rest are
/// kept as extras. Persisted items from retired categories are appended
/// after the templated output in their original order.
///
/// An empty or unavailable template yields the persisted items unchanged.
pub fn reconcile(template: &ReadinessTemplate, persisted: Vec<ReadinessItem>) -> Vec<ReadinessItem> {
    if template.is_empty() {
        debug!(
            assessment_type = %template.assessment_type,
            "empty template, keeping persisted items as-is"
        );
        return persisted;
    }

    let mut slots: Vec<Option<ReadinessItem>> = persisted.into_iter().map(Some).collect();
    let mut working = Vec::new();
    let mut synthesized = 0usize;

    for category in &template.categories {
        for definition in &category.items {
            let matched = slots.iter_mut().find_map(|slot| {
                let is_match = slot
                    .as_ref()
                    .is_some_and(|i| i.category == category.id && i.title == definition.title);
                if is_match {
                    slot.take()
                } else {
                    None
                }
            });

            match matched {
                Some(item) => working.push(item),
                None => {
                    synthesized += 1;
                    working.push(ReadinessItem::fresh(&category.id, &definition.title));
                }
            }
        }
    }

    // Unmatched persisted items (retired categories, renamed titles,
    // duplicates) stay visible after the templated entries.
    let extras: Vec<ReadinessItem> = slots.into_iter().flatten().collect();
    debug!(
        synthesized,
        preserved_extras = extras.len(),
        "reconciled template against persisted items"
    );
    working.extend(extras);

    working
}
