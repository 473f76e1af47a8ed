use crate::models::{PoolMetrics, RiskReason};

/// Fallback summary when no risk condition triggers.
pub const STABLE_SUMMARY: &str = "Pool metrics appear stable.";

/// How many triggered reasons the summary line carries.
const SUMMARY_REASON_LIMIT: usize = 3;

// Detection thresholds, applied to raw metrics (not sub-scores).
const UNSUSTAINABLE_YIELD_RATE: f64 = 1.0;
const HIGH_VOLATILITY: f64 = 0.2;
const HIGH_CONCENTRATION: f64 = 0.3;
const RAPID_YIELD_SWING: f64 = 0.2;
const LOW_TVL_USD: f64 = 100_000.0;

/// Ordered table of risk predicates. Order is observable: `reasons` preserves
/// it and the summary truncates to the first three entries.
const REASON_CHECKS: [(fn(&PoolMetrics) -> bool, RiskReason); 6] = [
    (
        |m| m.current_yield_rate > UNSUSTAINABLE_YIELD_RATE,
        RiskReason::UnsustainableYield,
    ),
    (
        |m| m.token_volatility_30d > HIGH_VOLATILITY,
        RiskReason::HighTokenVolatility,
    ),
    (|m| !m.audit_flag, RiskReason::NoExternalAudit),
    (
        |m| m.holder_concentration > HIGH_CONCENTRATION,
        RiskReason::HighHolderConcentration,
    ),
    (
        |m| m.yield_rate_change_24h.abs() > RAPID_YIELD_SWING,
        RiskReason::RapidYieldSwings,
    ),
    (
        |m| m.total_value_locked < LOW_TVL_USD,
        RiskReason::LowTotalValueLocked,
    ),
];

/// Evaluate every risk predicate against the raw metrics, collecting the
/// triggered reasons in fixed priority order.
pub fn derive_reasons(metrics: &PoolMetrics) -> Vec<RiskReason> {
    REASON_CHECKS
        .iter()
        .filter(|(triggered, _)| triggered(metrics))
        .map(|(_, reason)| *reason)
        .collect()
}

/// Render the short human-readable summary: the first three triggered
/// reasons joined with "; ", or the stable fallback.
pub fn summarize(reasons: &[RiskReason]) -> String {
    if reasons.is_empty() {
        return STABLE_SUMMARY.to_string();
    }
    reasons
        .iter()
        .take(SUMMARY_REASON_LIMIT)
        .map(|reason| reason.message())
        .collect::<Vec<_>>()
        .join("; ")
}
