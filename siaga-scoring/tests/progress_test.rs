use siaga_core::models::{AssessmentStatus, ReadinessItem};
use siaga_scoring::{progress, progress_by_category, verification_progress};

fn make_item(category: &str, title: &str, status: AssessmentStatus) -> ReadinessItem {
    let mut item = ReadinessItem::fresh(category, title);
    item.user_status = status;
    item
}

// ── Submitter progress ───────────────────────────────────────────────────

#[test]
fn empty_item_set_reports_zero() {
    let snapshot = progress(&[]);
    assert_eq!(snapshot.completed, 0);
    assert_eq!(snapshot.partial, 0);
    assert_eq!(snapshot.total, 0);
    assert_eq!(snapshot.percentage, 0);
}

#[test]
fn weighted_percentage_rounds() {
    // 2 lengkap + 1 parsial of 4 => round(((2 + 0.5) / 4) * 100) == 63
    let items = vec![
        make_item("administrative", "A", AssessmentStatus::Lengkap),
        make_item("administrative", "B", AssessmentStatus::Lengkap),
        make_item("administrative", "C", AssessmentStatus::Parsial),
        make_item("administrative", "D", AssessmentStatus::TidakTersedia),
    ];

    let snapshot = progress(&items);
    assert_eq!(snapshot.completed, 2);
    assert_eq!(snapshot.partial, 1);
    assert_eq!(snapshot.total, 4);
    assert_eq!(snapshot.percentage, 63);
}

#[test]
fn all_complete_is_one_hundred() {
    let items = vec![
        make_item("administrative", "A", AssessmentStatus::Lengkap),
        make_item("administrative", "B", AssessmentStatus::Lengkap),
    ];
    assert_eq!(progress(&items).percentage, 100);
}

// ── Verifier progress ────────────────────────────────────────────────────

#[test]
fn unverified_checklist_reports_zero_regardless_of_user_status() {
    let items = vec![
        make_item("administrative", "A", AssessmentStatus::Lengkap),
        make_item("administrative", "B", AssessmentStatus::Lengkap),
    ];

    let vp = verification_progress(&items);
    assert_eq!(vp.verified, 0);
    assert_eq!(vp.percentage, 0, "no partial credit from user statuses");
}

#[test]
fn verifier_statuses_drive_the_percentage() {
    let mut a = make_item("administrative", "A", AssessmentStatus::TidakTersedia);
    a.verifier_status = Some(AssessmentStatus::Lengkap);
    let mut b = make_item("administrative", "B", AssessmentStatus::Lengkap);
    b.verifier_status = Some(AssessmentStatus::Parsial);

    let vp = verification_progress(&[a, b]);
    assert_eq!(vp.completed, 1);
    assert_eq!(vp.partial, 1);
    assert_eq!(vp.verified, 2);
    // round(((1 + 0.5) / 2) * 100) == 75
    assert_eq!(vp.percentage, 75);
}

#[test]
fn partially_verified_checklist_counts_unverified_in_total() {
    let mut a = make_item("administrative", "A", AssessmentStatus::Lengkap);
    a.verifier_status = Some(AssessmentStatus::Lengkap);
    let b = make_item("administrative", "B", AssessmentStatus::Lengkap);

    let vp = verification_progress(&[a, b]);
    assert_eq!(vp.verified, 1);
    assert_eq!(vp.total, 2);
    assert_eq!(vp.percentage, 50);
}

// ── Per-category breakdown ───────────────────────────────────────────────

#[test]
fn categories_keep_first_seen_order() {
    let items = vec![
        make_item("teknis", "T1", AssessmentStatus::Lengkap),
        make_item("administrative", "A1", AssessmentStatus::TidakTersedia),
        make_item("teknis", "T2", AssessmentStatus::TidakTersedia),
    ];

    let breakdown = progress_by_category(&items);
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0].category, "teknis");
    assert_eq!(breakdown[0].progress.total, 2);
    assert_eq!(breakdown[0].progress.percentage, 50);
    assert_eq!(breakdown[1].category, "administrative");
    assert_eq!(breakdown[1].progress.percentage, 0);
}
