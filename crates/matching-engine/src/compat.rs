//! The pairwise compatibility predicate.

use cow_intents_types::Intent;

/// Decide whether two intents form a Coincidence of Wants.
///
/// True iff all of:
/// 1. the intents mirror each other (each sells what the other buys),
/// 2. `a.sell_amount` covers `b.min_buy_amount`,
/// 3. `b.sell_amount` covers `a.min_buy_amount`,
/// 4. both settle on the same chain,
/// 5. both are still pending.
///
/// The floor checks are thresholds, not exact matches: any pair where both
/// floors are met is accepted. Comparisons are exact integer comparisons
/// over smallest-unit amounts. Pure and side-effect free; swapping the
/// arguments swaps the roles in rules 2 and 3 and yields the same boolean.
pub fn is_compatible(a: &Intent, b: &Intent) -> bool {
    a.sell_token == b.buy_token
        && a.buy_token == b.sell_token
        && a.sell_amount >= b.min_buy_amount
        && b.sell_amount >= a.min_buy_amount
        && a.chain_id == b.chain_id
        && a.is_pending()
        && b.is_pending()
}
