use crate::domain::models::{ItemEntry, ResolvedItem};

pub const TOTAL_SHARE: f64 = 100.0;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ResolveError {
    #[error("enter at least one item name")]
    EmptyInput,
    #[error("specified weights exceed 100% (current: {total}%)")]
    OverAllocated { total: f64 },
    #[error("no item ended up with a positive share")]
    NoValidItems,
}

/// Normalizes raw entries into shares that sum to 100.
///
/// Entries with a positive weight keep it. Entries without one (or with `0`)
/// split whatever is left of 100 evenly. Anything that ends at `<= 0` is
/// dropped, so a fully allocated wheel silently discards unweighted rows.
/// The over-allocation check is strict: a total of exactly 100 is accepted.
///
/// When every active entry is weighted and the weights add up to less than
/// 100, they are scaled proportionally so the wheel has no unowned arc.
pub fn resolve(entries: &[ItemEntry]) -> Result<Vec<ResolvedItem>, ResolveError> {
    let active: Vec<&ItemEntry> = entries.iter().filter(|e| e.is_active()).collect();
    if active.is_empty() {
        return Err(ResolveError::EmptyInput);
    }

    let specified_total: f64 = active
        .iter()
        .filter_map(|e| e.weight)
        .filter(|w| *w > 0.0)
        .sum();
    if specified_total > TOTAL_SHARE {
        return Err(ResolveError::OverAllocated {
            total: specified_total,
        });
    }

    let unspecified_count = active.iter().filter(|e| is_unspecified(e)).count();
    let remaining = TOTAL_SHARE - specified_total;
    let fill = if unspecified_count > 0 {
        remaining / unspecified_count as f64
    } else {
        0.0
    };

    let mut resolved: Vec<ResolvedItem> = active
        .into_iter()
        .filter_map(|e| {
            let share = if is_unspecified(e) {
                fill
            } else {
                e.weight.unwrap_or(0.0)
            };
            (share > 0.0).then(|| ResolvedItem::new(e.name.clone(), share))
        })
        .collect();

    if resolved.is_empty() {
        return Err(ResolveError::NoValidItems);
    }
    // nothing left to absorb the remainder: stretch explicit weights to 100
    if unspecified_count == 0 && specified_total < TOTAL_SHARE {
        let scale = TOTAL_SHARE / specified_total;
        for item in &mut resolved {
            item.share *= scale;
        }
        tracing::debug!(specified_total, scale, "rescaled under-allocated wheel");
    }
    tracing::debug!(
        items = resolved.len(),
        specified_total,
        unspecified_count,
        "resolved wheel"
    );
    Ok(resolved)
}

fn is_unspecified(entry: &ItemEntry) -> bool {
    entry.weight.map(|w| w == 0.0).unwrap_or(true)
}

/// Checks a fixed item list (e.g. a preset wheel) the way `resolve` output
/// is guaranteed to look: non-empty, positive shares, total of 100.
pub fn validate_resolved(items: &[ResolvedItem]) -> Result<(), ResolveError> {
    if items.is_empty() || items.iter().any(|i| i.name.trim().is_empty()) {
        return Err(ResolveError::EmptyInput);
    }
    if items.iter().any(|i| i.share <= 0.0) {
        return Err(ResolveError::NoValidItems);
    }
    let total: f64 = items.iter().map(|i| i.share).sum();
    if total > TOTAL_SHARE + 1e-6 {
        return Err(ResolveError::OverAllocated { total });
    }
    if (total - TOTAL_SHARE).abs() > 1e-6 {
        return Err(ResolveError::NoValidItems);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{resolve, validate_resolved, ResolveError};
    use crate::domain::models::{ItemEntry, ResolvedItem};
    use proptest::prelude::*;

    fn e(name: &str, weight: Option<f64>) -> ItemEntry {
        ItemEntry::new(name, weight)
    }

    fn shares(items: &[ResolvedItem]) -> Vec<(&str, f64)> {
        items.iter().map(|i| (i.name.as_str(), i.share)).collect()
    }

    #[test]
    fn splits_leftover_between_unweighted_items() {
        let out = resolve(&[e("A", Some(50.0)), e("B", None), e("C", None)]).unwrap();
        assert_eq!(shares(&out), vec![("A", 50.0), ("B", 25.0), ("C", 25.0)]);
    }

    #[test]
    fn explicit_weights_are_kept_in_order() {
        let out = resolve(&[e("z", Some(70.0)), e("a", Some(10.0)), e("m", Some(20.0))]).unwrap();
        assert_eq!(shares(&out), vec![("z", 70.0), ("a", 10.0), ("m", 20.0)]);
    }

    #[test]
    fn no_weights_means_equal_shares() {
        let out = resolve(&[e("a", None), e("b", Some(0.0)), e("c", None), e("d", None)]).unwrap();
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|i| (i.share - 25.0).abs() < 1e-9));
    }

    #[test]
    fn over_allocation_reports_total() {
        let err = resolve(&[e("X", Some(60.0)), e("Y", Some(60.0))]).unwrap_err();
        assert_eq!(err, ResolveError::OverAllocated { total: 120.0 });
        assert_eq!(
            err.to_string(),
            "specified weights exceed 100% (current: 120%)"
        );
    }

    #[test]
    fn over_allocation_wins_over_unweighted_rows() {
        let err = resolve(&[e("X", Some(90.0)), e("Y", Some(20.0)), e("Z", None)]).unwrap_err();
        assert!(matches!(err, ResolveError::OverAllocated { .. }));
    }

    #[test]
    fn blank_names_are_inactive() {
        assert_eq!(
            resolve(&[e("", Some(10.0)), e("   ", None), e("\t", Some(50.0))]),
            Err(ResolveError::EmptyInput)
        );
        assert_eq!(resolve(&[]), Err(ResolveError::EmptyInput));
    }

    #[test]
    fn blank_rows_do_not_take_a_share() {
        let out = resolve(&[e("a", None), e(" ", None), e("b", None)]).unwrap();
        assert_eq!(shares(&out), vec![("a", 50.0), ("b", 50.0)]);
    }

    #[test]
    fn exactly_full_drops_unweighted_rows() {
        let out = resolve(&[e("a", Some(40.0)), e("b", Some(60.0)), e("c", None)]).unwrap();
        assert_eq!(shares(&out), vec![("a", 40.0), ("b", 60.0)]);
    }

    #[test]
    fn negative_weights_are_dropped() {
        let out = resolve(&[e("a", Some(-5.0)), e("b", Some(30.0)), e("c", None)]).unwrap();
        assert_eq!(shares(&out), vec![("b", 30.0), ("c", 70.0)]);
    }

    #[test]
    fn only_negative_weights_leave_nothing() {
        assert_eq!(
            resolve(&[e("a", Some(-1.0)), e("b", Some(-2.0))]),
            Err(ResolveError::NoValidItems)
        );
    }

    #[test]
    fn under_allocated_explicit_weights_scale_to_full_wheel() {
        let out = resolve(&[e("a", Some(30.0)), e("b", Some(20.0))]).unwrap();
        assert_eq!(out[0].name, "a");
        assert!((out[0].share - 60.0).abs() < 1e-9);
        assert!((out[1].share - 40.0).abs() < 1e-9);
    }

    #[test]
    fn negative_rows_do_not_count_as_unweighted_when_scaling() {
        let out = resolve(&[e("a", Some(-3.0)), e("b", Some(25.0))]).unwrap();
        assert_eq!(shares(&out), vec![("b", 100.0)]);
    }

    #[test]
    fn under_allocated_wheel_wins_by_weight_ratio() {
        use crate::services::wheel::winner_index;
        let items = resolve(&[e("a", Some(30.0)), e("b", Some(20.0))]).unwrap();
        let steps = 36_000;
        let mut wins = [0usize; 2];
        for i in 0..steps {
            let angle = i as f64 * 360.0 / steps as f64;
            wins[winner_index(&items, angle)] += 1;
        }
        let a = wins[0] as f64 / steps as f64;
        assert!((a - 0.6).abs() < 0.005, "a won {}", a);
    }

    #[test]
    fn names_keep_surrounding_whitespace() {
        let out = resolve(&[e(" spaced ", None)]).unwrap();
        assert_eq!(out[0].name, " spaced ");
        assert_eq!(out[0].share, 100.0);
    }

    #[test]
    fn duplicate_names_stay_separate() {
        let out = resolve(&[e("a", None), e("a", None)]).unwrap();
        assert_eq!(shares(&out), vec![("a", 50.0), ("a", 50.0)]);
    }

    #[test]
    fn validate_resolved_accepts_full_wheel() {
        let items = vec![ResolvedItem::new("Doom", 80.0), ResolvedItem::new("Escape", 20.0)];
        assert!(validate_resolved(&items).is_ok());
    }

    #[test]
    fn validate_resolved_rejects_partial_wheel() {
        let items = vec![ResolvedItem::new("a", 30.0)];
        assert_eq!(validate_resolved(&items), Err(ResolveError::NoValidItems));
        assert_eq!(validate_resolved(&[]), Err(ResolveError::EmptyInput));
    }

    fn entry_strategy() -> impl Strategy<Value = ItemEntry> {
        (
            "[a-z]{1,6}",
            prop_oneof![Just(None), Just(Some(0.0)), (0.5f64..30.0).prop_map(Some)],
        )
            .prop_map(|(name, weight)| ItemEntry::new(name, weight))
    }

    proptest! {
        #[test]
        fn unweighted_rows_fill_the_wheel(
            base in prop::collection::vec(entry_strategy(), 1..20)
        ) {
            let mut entries = base;
            entries.push(ItemEntry::new("filler", None));
            let specified: f64 = entries.iter().filter_map(|e| e.weight).filter(|w| *w > 0.0).sum();
            match resolve(&entries) {
                Ok(items) => {
                    let total: f64 = items.iter().map(|i| i.share).sum();
                    prop_assert!(specified <= 100.0);
                    prop_assert!((total - 100.0).abs() < 1e-6);
                    prop_assert!(items.iter().all(|i| i.share > 0.0 && i.share <= 100.0));
                }
                Err(ResolveError::OverAllocated { total }) => {
                    prop_assert!(total > 100.0);
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }

        #[test]
        fn explicit_only_wheels_sum_to_full_share(
            weights in prop::collection::vec(0.5f64..9.0, 1..10)
        ) {
            let entries: Vec<ItemEntry> = weights
                .iter()
                .enumerate()
                .map(|(i, w)| ItemEntry::new(format!("w{}", i), Some(*w)))
                .collect();
            let items = resolve(&entries).unwrap();
            let total: f64 = items.iter().map(|i| i.share).sum();
            prop_assert!((total - 100.0).abs() < 1e-6);
            prop_assert_eq!(items.len(), weights.len());
        }

        #[test]
        fn resolution_is_deterministic(entries in prop::collection::vec(entry_strategy(), 0..12)) {
            prop_assert_eq!(resolve(&entries), resolve(&entries));
        }
    }
}
