use chrono::Utc;
use proptest::prelude::*;
use siaga_core::models::{AssessmentStatus, ReadinessItem, RiskEntry, RiskScore};
use siaga_scoring::{aggregate, bands, progress, snapshots, verification_progress};

fn arb_status() -> impl Strategy<Value = AssessmentStatus> {
    prop_oneof![
        Just(AssessmentStatus::Lengkap),
        Just(AssessmentStatus::Parsial),
        Just(AssessmentStatus::TidakTersedia),
    ]
}

fn make_item(user: AssessmentStatus, verifier: Option<AssessmentStatus>) -> ReadinessItem {
    let mut item = ReadinessItem::fresh("administrative", "Dokumen");
    item.user_status = user;
    item.verifier_status = verifier;
    item
}

fn make_entry(level: u8) -> RiskEntry {
    RiskEntry {
        id: uuid::Uuid::new_v4().to_string(),
        sasaran: "Sasaran".to_string(),
        kode: "R-01".to_string(),
        taksonomi: "Operasional".to_string(),
        peristiwa_risiko: "Peristiwa".to_string(),
        sumber_risiko: "Internal".to_string(),
        dampak_kualitatif: "Dampak".to_string(),
        dampak_kuantitatif: "Nilai".to_string(),
        kontrol_eksisting: "Kontrol".to_string(),
        risiko_awal: RiskScore::new(1, 1, level),
        risiko_saat_ini: None,
        resiko_akhir: RiskScore::new(1, 1, 1),
        created_at: Utc::now(),
    }
}

proptest! {
    // Every in-range score lands in exactly one band.
    #[test]
    fn bands_partition_the_score_range(score in 1u8..=25) {
        let band = bands::classify(score).unwrap();
        let matches = siaga_core::models::RiskBand::ALL
            .iter()
            .filter(|b| **b == band)
            .count();
        prop_assert_eq!(matches, 1);
    }

    #[test]
    fn out_of_range_scores_always_fail(score in 26u8..=255) {
        prop_assert!(bands::classify(score).is_err());
    }

    #[test]
    fn percentage_bounded(statuses in proptest::collection::vec(arb_status(), 0..40)) {
        let items: Vec<ReadinessItem> =
            statuses.into_iter().map(|s| make_item(s, None)).collect();
        let snapshot = progress(&items);
        prop_assert!(snapshot.percentage <= 100);
        prop_assert_eq!(snapshot.total, items.len());
    }

    #[test]
    fn verification_percentage_zero_without_verifier_statuses(
        statuses in proptest::collection::vec(arb_status(), 0..40)
    ) {
        let items: Vec<ReadinessItem> =
            statuses.into_iter().map(|s| make_item(s, None)).collect();
        prop_assert_eq!(verification_progress(&items).percentage, 0);
    }

    // total always equals banded + invalid, for any mix of levels.
    #[test]
    fn aggregate_counts_every_entry_once(levels in proptest::collection::vec(0u8..=30, 0..50)) {
        let entries: Vec<RiskEntry> = levels.into_iter().map(make_entry).collect();
        let summary = aggregate(&entries, snapshots::initial);
        prop_assert_eq!(summary.total, entries.len());
        prop_assert_eq!(summary.per_band.sum() + summary.invalid, summary.total);
    }
}
