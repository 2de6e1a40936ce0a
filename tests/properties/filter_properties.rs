use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use janitor::staleness::{ApplicationRecord, FilterOutcome, StalenessFilter, compile, filter};

fn instant(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

// Timestamps within a small window so collisions with the cutoff are common.
fn record_strategy() -> impl Strategy<Value = ApplicationRecord> {
    (
        "[a-z]{1,3}(-[a-z]{1,3})?",
        prop::option::weighted(0.9, 1_600_000_000i64..1_600_000_050),
    )
        .prop_map(|(name, secs)| ApplicationRecord::new(name, secs.map(instant)))
}

fn records_strategy() -> impl Strategy<Value = Vec<ApplicationRecord>> {
    prop::collection::vec(record_strategy(), 0..40)
}

fn cutoff_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (1_600_000_000i64..1_600_000_050).prop_map(instant)
}

/// True if `needle` appears in `haystack` in the same relative order.
fn is_subsequence(needle: &[&str], haystack: &[&str]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|n| rest.any(|h| h == n))
}

proptest! {
    #[test]
    fn record_at_cutoff_is_never_stale(records in records_strategy(), cutoff in cutoff_strategy()) {
        let outcome = filter(&records, cutoff, None);
        prop_assert!(outcome.stale.iter().all(|app| app.last_update < cutoff));
    }

    #[test]
    fn every_timestamped_record_before_cutoff_is_reported(
        records in records_strategy(),
        cutoff in cutoff_strategy(),
    ) {
        let outcome = filter(&records, cutoff, None);
        let expected = records
            .iter()
            .filter(|r| r.last_update.is_some_and(|t| t < cutoff))
            .count();
        prop_assert_eq!(outcome.stale.len(), expected);
    }

    #[test]
    fn excluded_names_never_reported(
        records in records_strategy(),
        cutoff in cutoff_strategy(),
        pattern in "[a-z]{1,2}",
    ) {
        let exclusion = compile(&pattern).unwrap();
        let outcome = filter(&records, cutoff, exclusion.as_ref());
        prop_assert!(outcome.stale.iter().all(|app| !app.name.contains(pattern.as_str())));
        prop_assert!(outcome.malformed.iter().all(|m| !m.name.contains(pattern.as_str())));
    }

    #[test]
    fn result_is_ordered_subsequence(records in records_strategy(), cutoff in cutoff_strategy()) {
        let outcome = filter(&records, cutoff, None);
        let input: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        let output: Vec<&str> = outcome.stale.iter().map(|a| a.name.as_str()).collect();
        prop_assert!(is_subsequence(&output, &input));
    }

    #[test]
    fn filter_is_idempotent(records in records_strategy(), cutoff in cutoff_strategy()) {
        let exclusion = compile("^a").unwrap();
        let first = filter(&records, cutoff, exclusion.as_ref());
        let second = filter(&records, cutoff, exclusion.as_ref());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn malformed_records_do_not_disturb_others(
        records in records_strategy(),
        cutoff in cutoff_strategy(),
    ) {
        let well_formed: Vec<_> = records.iter().filter(|r| r.last_update.is_some()).cloned().collect();
        let with_broken = filter(&records, cutoff, None);
        let without = filter(&well_formed, cutoff, None);
        prop_assert_eq!(&with_broken.stale, &without.stale);
        prop_assert_eq!(
            with_broken.malformed.len(),
            records.len() - well_formed.len()
        );
    }

    #[test]
    fn paging_matches_single_pass(
        records in records_strategy(),
        cutoff in cutoff_strategy(),
        split in 0usize..40,
    ) {
        let split = split.min(records.len());
        let whole = filter(&records, cutoff, None);

        let pass = StalenessFilter::new(cutoff, None);
        let mut paged = FilterOutcome::default();
        pass.apply(&records[..split], &mut paged);
        pass.apply(&records[split..], &mut paged);

        prop_assert_eq!(whole, paged);
    }
}
