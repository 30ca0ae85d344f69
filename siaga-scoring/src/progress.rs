//! Weighted completion percentages over readiness items.
//!
//! `lengkap` counts fully, `parsial` counts half. The verifier variant
//! counts verifier statuses only and reports 0 until something is verified.

use siaga_core::constants::PARTIAL_WEIGHT;
use siaga_core::models::{
    AssessmentStatus, CategoryProgress, ProgressSnapshot, ReadinessItem, VerificationProgress,
};

fn weighted_percentage(completed: usize, partial: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let weighted = completed as f64 + partial as f64 * PARTIAL_WEIGHT;
    ((weighted / total as f64) * 100.0).round() as u8
}

/// Submitter-side progress over a set of items.
pub fn progress(items: &[ReadinessItem]) -> ProgressSnapshot {
    let completed = items
        .iter()
        .filter(|i| i.user_status == AssessmentStatus::Lengkap)
        .count();
    let partial = items
        .iter()
        .filter(|i| i.user_status == AssessmentStatus::Parsial)
        .count();
    let total = items.len();

    ProgressSnapshot {
        completed,
        partial,
        total,
        percentage: weighted_percentage(completed, partial, total),
    }
}

/// Verifier-side progress over a set of items.
///
/// Only items with a verifier status count. An unverified checklist reports
/// 0 even when submitter statuses would yield partial credit.
pub fn verification_progress(items: &[ReadinessItem]) -> VerificationProgress {
    let completed = items
        .iter()
        .filter(|i| i.verifier_status == Some(AssessmentStatus::Lengkap))
        .count();
    let partial = items
        .iter()
        .filter(|i| i.verifier_status == Some(AssessmentStatus::Parsial))
        .count();
    let verified = items.iter().filter(|i| i.is_verified()).count();
    let total = items.len();

    let percentage = if verified == 0 {
        0
    } else {
        weighted_percentage(completed, partial, total)
    };

    VerificationProgress {
        completed,
        partial,
        total,
        verified,
        percentage,
    }
}

/// Per-category breakdown, categories in first-seen item order.
pub fn progress_by_category(items: &[ReadinessItem]) -> Vec<CategoryProgress> {
    let mut categories: Vec<&str> = Vec::new();
    for item in items {
        if !categories.contains(&item.category.as_str()) {
            categories.push(&item.category);
        }
    }

    categories
        .into_iter()
        .map(|category| {
            let scoped: Vec<ReadinessItem> = items
                .iter()
                .filter(|i| i.category == category)
                .cloned()
                .collect();
            CategoryProgress {
                category: category.to_string(),
                progress: progress(&scoped),
            }
        })
        .collect()
}
