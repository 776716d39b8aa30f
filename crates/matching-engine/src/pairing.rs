//! Pair discovery over a pool of intents.
//!
//! Three access patterns over the same predicate: an exhaustive all-pairs
//! scan, a single-intent lookup, and a greedy conflict-free bulk matcher.
//! All three are pure synchronous computations over an in-memory pool; the
//! pool itself is never mutated.

use cow_intents_types::{CompatiblePair, Intent};

use crate::is_compatible;

/// Every compatible pair in the pool.
///
/// Scans all unordered pairs `(i, j)` with `i < j` in input order. An
/// intent may appear in several returned pairs; callers wanting exclusive
/// settlement must use [`find_disjoint_matches`] instead.
pub fn find_all_compatible_pairs(intents: &[Intent]) -> Vec<CompatiblePair> {
    let mut pairs = Vec::new();
    for i in 0..intents.len() {
        for j in (i + 1)..intents.len() {
            if is_compatible(&intents[i], &intents[j]) {
                pairs.push(CompatiblePair::new(intents[i].clone(), intents[j].clone()));
            }
        }
    }
    pairs
}

/// First intent in the pool compatible with a newly arrived one.
///
/// Deterministic given a deterministic pool order. Returns a borrow into
/// the pool; the caller clones when it builds a pair to settle.
pub fn find_match_for_intent<'a>(
    new_intent: &Intent,
    existing: &'a [Intent],
) -> Option<&'a Intent> {
    existing
        .iter()
        .find(|candidate| is_compatible(new_intent, candidate))
}

/// Greedy conflict-free matching: no intent appears in more than one pair.
///
/// First-fit in input order: for each unmatched `i`, pair it with the first
/// later unmatched compatible `j` and stop scanning for that `i`. The
/// result is order-dependent and not a maximum matching; a different input
/// ordering can match a different, possibly larger set. Settled pairs leave
/// the pool, so the next cycle picks up what this one left unmatched.
pub fn find_disjoint_matches(intents: &[Intent]) -> Vec<CompatiblePair> {
    let mut pairs = Vec::new();
    let mut used = vec![false; intents.len()];

    for i in 0..intents.len() {
        if used[i] {
            continue;
        }
        for j in (i + 1)..intents.len() {
            if used[j] {
                continue;
            }
            if is_compatible(&intents[i], &intents[j]) {
                pairs.push(CompatiblePair::new(intents[i].clone(), intents[j].clone()));
                used[i] = true;
                used[j] = true;
                break;
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use cow_intents_types::{IntentStatus, Uint128};

    fn make_test_intent(
        id: &str,
        sell_token: &str,
        buy_token: &str,
        sell_amount: u128,
        min_buy_amount: u128,
    ) -> Intent {
        Intent::new(
            id,
            sell_token,
            buy_token,
            Uint128::new(sell_amount),
            Uint128::new(min_buy_amount),
            1,
        )
    }

    // ==================== All-Pairs Scan Tests ====================

    #[test]
    fn test_all_pairs_finds_single_match() {
        let a = make_test_intent("a", "USDC", "WETH", 100, 1);
        let b = make_test_intent("b", "WETH", "USDC", 1, 90);

        let pairs = find_all_compatible_pairs(&[a, b]);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].ids(), ("a", "b"));
    }

    #[test]
    fn test_all_pairs_does_not_exclude_overlaps() {
        // Two sellers both compatible with one buyer: both pairs reported
        let s1 = make_test_intent("s1", "USDC", "WETH", 100, 1);
        let s2 = make_test_intent("s2", "USDC", "WETH", 95, 1);
        let buyer = make_test_intent("buyer", "WETH", "USDC", 1, 90);

        let pairs = find_all_compatible_pairs(&[s1, s2, buyer]);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].ids(), ("s1", "buyer"));
        assert_eq!(pairs[1].ids(), ("s2", "buyer"));
    }

    #[test]
    fn test_all_pairs_chain_mismatch_excluded() {
        let a = make_test_intent("a", "USDC", "WETH", 100, 1);
        let mut b = make_test_intent("b", "WETH", "USDC", 1, 90);
        b.chain_id = 2;

        assert!(find_all_compatible_pairs(&[a, b]).is_empty());
    }

    #[test]
    fn test_all_pairs_empty_and_singleton() {
        assert!(find_all_compatible_pairs(&[]).is_empty());

        let a = make_test_intent("a", "USDC", "WETH", 100, 1);
        assert!(find_all_compatible_pairs(&[a]).is_empty());
    }

    // ==================== Single-Intent Lookup Tests ====================

    #[test]
    fn test_lookup_returns_first_in_pool_order() {
        let new_intent = make_test_intent("new", "USDC", "WETH", 100, 1);
        let first = make_test_intent("first", "WETH", "USDC", 1, 90);
        let second = make_test_intent("second", "WETH", "USDC", 1, 80);

        let pool = vec![first, second];
        let hit = find_match_for_intent(&new_intent, &pool).unwrap();
        assert_eq!(hit.id, "first");
    }

    #[test]
    fn test_lookup_skips_incompatible_candidates() {
        let new_intent = make_test_intent("new", "USDC", "WETH", 100, 1);
        let too_greedy = make_test_intent("greedy", "WETH", "USDC", 1, 150);
        let ok = make_test_intent("ok", "WETH", "USDC", 1, 90);

        let pool = vec![too_greedy, ok];
        let hit = find_match_for_intent(&new_intent, &pool).unwrap();
        assert_eq!(hit.id, "ok");
    }

    #[test]
    fn test_lookup_none_on_empty_or_unmatched_pool() {
        let new_intent = make_test_intent("new", "USDC", "WETH", 100, 1);
        assert!(find_match_for_intent(&new_intent, &[]).is_none());

        let same_direction = make_test_intent("other", "USDC", "WETH", 100, 1);
        assert!(find_match_for_intent(&new_intent, &[same_direction]).is_none());
    }

    // ==================== Greedy Disjoint Matching Tests ====================

    #[test]
    fn test_disjoint_consumes_shared_candidate_once() {
        // A-B compatible and B-C compatible, A-C not: B is taken by A, so C
        // stays unmatched
        let a = make_test_intent("a", "USDC", "WETH", 100, 1);
        let b = make_test_intent("b", "WETH", "USDC", 1, 90);
        let c = make_test_intent("c", "USDC", "WETH", 100, 1);

        let pairs = find_disjoint_matches(&[a, b, c]);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].ids(), ("a", "b"));
    }

    #[test]
    fn test_disjoint_no_index_reused() {
        let s1 = make_test_intent("s1", "USDC", "WETH", 100, 1);
        let s2 = make_test_intent("s2", "USDC", "WETH", 95, 1);
        let b1 = make_test_intent("b1", "WETH", "USDC", 1, 90);
        let b2 = make_test_intent("b2", "WETH", "USDC", 1, 90);

        let pairs = find_disjoint_matches(&[s1, s2, b1, b2]);
        assert_eq!(pairs.len(), 2);

        let mut seen = std::collections::HashSet::new();
        for pair in &pairs {
            assert!(seen.insert(pair.a.id.clone()), "intent paired twice");
            assert!(seen.insert(pair.b.id.clone()), "intent paired twice");
        }
    }

    #[test]
    fn test_disjoint_is_first_fit_in_input_order() {
        // s1 scans forward and takes b1 even though b2 would also fit
        let s1 = make_test_intent("s1", "USDC", "WETH", 100, 1);
        let b1 = make_test_intent("b1", "WETH", "USDC", 1, 90);
        let b2 = make_test_intent("b2", "WETH", "USDC", 1, 80);

        let pairs = find_disjoint_matches(&[s1, b1, b2]);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].ids(), ("s1", "b1"));
    }

    #[test]
    fn test_disjoint_excludes_non_pending() {
        let a = make_test_intent("a", "USDC", "WETH", 100, 1);
        let mut b = make_test_intent("b", "WETH", "USDC", 1, 90);
        b.status = IntentStatus::Matched;

        assert!(find_disjoint_matches(&[a, b]).is_empty());
    }

    #[test]
    fn test_disjoint_empty_and_singleton() {
        assert!(find_disjoint_matches(&[]).is_empty());

        let a = make_test_intent("a", "USDC", "WETH", 100, 1);
        assert!(find_disjoint_matches(&[a]).is_empty());
    }

    #[test]
    fn test_no_finder_pairs_non_pending_intents() {
        let mut a = make_test_intent("a", "USDC", "WETH", 100, 1);
        let b = make_test_intent("b", "WETH", "USDC", 1, 90);
        a.status = IntentStatus::Failed;

        let pool = vec![a.clone(), b.clone()];
        assert!(find_all_compatible_pairs(&pool).is_empty());
        assert!(find_disjoint_matches(&pool).is_empty());
        assert!(find_match_for_intent(&a, &[b]).is_none());
    }
}
