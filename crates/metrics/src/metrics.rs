use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, register_int_gauge,
    Histogram, IntCounter, IntCounterVec, IntGauge,
};

lazy_static! {
    // ═══════════════════════════════════════════════════════════════════════════
    // INTENT METRICS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Total number of intents fetched from the store
    pub static ref INTENTS_FETCHED: IntCounter = register_int_counter!(
        "cow_intents_intents_fetched_total",
        "Total number of intents fetched from the intent store"
    )
    .unwrap();

    /// Total number of malformed intents discarded at the store boundary
    pub static ref INTENTS_DISCARDED: IntCounter = register_int_counter!(
        "cow_intents_intents_discarded_total",
        "Total number of malformed intents discarded"
    )
    .unwrap();

    /// Number of open intents seen at the last fetch
    pub static ref OPEN_INTENTS: IntGauge = register_int_gauge!(
        "cow_intents_intents_open",
        "Number of open intents at the last fetch"
    )
    .unwrap();

    // ═══════════════════════════════════════════════════════════════════════════
    // MATCHING METRICS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Total number of compatible pairs found
    pub static ref PAIRS_FOUND: IntCounter = register_int_counter!(
        "cow_intents_pairs_found_total",
        "Total number of compatible intent pairs found"
    )
    .unwrap();

    /// Pair scan latency histogram (in milliseconds)
    pub static ref MATCHING_LATENCY: Histogram = register_histogram!(
        "cow_intents_matching_latency_ms",
        "Pair scan latency in milliseconds",
        vec![1.0, 5.0, 10.0, 50.0, 100.0, 250.0, 500.0]
    )
    .unwrap();

    // ═══════════════════════════════════════════════════════════════════════════
    // SETTLEMENT METRICS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Total number of settlement submissions sent to the ledger
    pub static ref SETTLEMENTS_SUBMITTED: IntCounter = register_int_counter!(
        "cow_intents_settlements_submitted_total",
        "Total number of settlement submissions"
    )
    .unwrap();

    /// Total number of settlements confirmed on-chain
    pub static ref SETTLEMENTS_SETTLED: IntCounter = register_int_counter!(
        "cow_intents_settlements_settled_total",
        "Total number of settlements confirmed"
    )
    .unwrap();

    /// Settlements skipped or lost to a competing solver, by staleness kind
    pub static ref SETTLEMENTS_STALE: IntCounterVec = register_int_counter_vec!(
        "cow_intents_settlements_stale_total",
        "Total settlements abandoned as stale",
        &["kind"]
    )
    .unwrap();

    /// Hard settlement failures by reason
    pub static ref SETTLEMENTS_FAILED: IntCounterVec = register_int_counter_vec!(
        "cow_intents_settlements_failed_total",
        "Total settlements that failed",
        &["reason"]
    )
    .unwrap();

    /// Settlement duration histogram (in milliseconds)
    pub static ref SETTLEMENT_DURATION: Histogram = register_histogram!(
        "cow_intents_settlement_duration_ms",
        "Settlement duration in milliseconds",
        vec![100.0, 500.0, 1000.0, 5000.0, 10000.0, 30000.0, 60000.0]
    )
    .unwrap();

    // ═══════════════════════════════════════════════════════════════════════════
    // CYCLE METRICS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Total number of solver cycles run
    pub static ref CYCLES_RUN: IntCounter = register_int_counter!(
        "cow_intents_cycles_run_total",
        "Total number of solver cycles run"
    )
    .unwrap();

    /// Total number of cycles aborted by a store fetch failure
    pub static ref CYCLES_FAILED: IntCounter = register_int_counter!(
        "cow_intents_cycles_failed_total",
        "Total number of solver cycles that failed"
    )
    .unwrap();

    /// Cycle duration histogram (in milliseconds)
    pub static ref CYCLE_DURATION: Histogram = register_histogram!(
        "cow_intents_cycle_duration_ms",
        "Solver cycle duration in milliseconds",
        vec![10.0, 50.0, 100.0, 500.0, 1000.0, 5000.0, 10000.0]
    )
    .unwrap();

    // ═══════════════════════════════════════════════════════════════════════════
    // SYSTEM METRICS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Error-level log events by originating module
    pub static ref ERROR_EVENTS: IntCounterVec = register_int_counter_vec!(
        "cow_intents_error_events_total",
        "Total error-level log events by target module",
        &["target"]
    )
    .unwrap();
}
