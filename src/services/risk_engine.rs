use tracing::debug;

use crate::models::{PoolMetrics, RiskAssessment, RiskComponents};
use crate::services::explainability::{derive_reasons, summarize};
use crate::utils::math::{clamp, sigmoid};

// Aggregation weights. Empirically chosen constants; must sum to exactly 1.0.
const W_TVL: f64 = 0.22;
const W_AUDIT: f64 = 0.18;
const W_AGE: f64 = 0.12;
const W_CONCENTRATION: f64 = 0.12;
const W_LIQUIDITY: f64 = 0.12;
const W_YIELD_CHANGE: f64 = 0.12;
const W_VOLATILITY_YIELD: f64 = 0.12;

pub(crate) const WEIGHT_SUM: f64 = W_TVL
    + W_AUDIT
    + W_AGE
    + W_CONCENTRATION
    + W_LIQUIDITY
    + W_YIELD_CHANGE
    + W_VOLATILITY_YIELD;

// Sub-score shaping constants.
const TVL_LOG_DIVISOR: f64 = 5.0;
const AGE_SCALE_DAYS: f64 = 30.0;
const LIQUIDITY_SCALE_USD: f64 = 1000.0;
const YIELD_SWING_FULL_PENALTY: f64 = 0.5;
const VOLATILITY_STEEPNESS: f64 = 5.0;
const VOLATILITY_MIDPOINT: f64 = 0.1;
const SUSTAINABLE_YIELD_BASELINE: f64 = 0.2;

/// Stateless safety scoring engine for yield-bearing pools.
///
/// `evaluate` is a pure function of its input: no I/O, no shared state, no
/// dependence on call order or wall-clock time. Any number of callers may
/// score pools concurrently without coordination.
pub struct RiskEngine;

impl RiskEngine {
    pub fn new() -> Self {
        debug_assert!(
            (WEIGHT_SUM - 1.0).abs() < 1e-12,
            "aggregation weights must sum to 1.0"
        );
        Self
    }

    /// Score a single pool, producing the aggregate safety score, the eight
    /// normalized sub-scores, and the triggered reason codes.
    pub fn evaluate(&self, metrics: &PoolMetrics) -> RiskAssessment {
        let components = Self::derive_components(metrics);

        // Linear combination, except the last term: the conjunction of high
        // volatility and an unsustainably high yield collapses it toward
        // zero, while a sustainable yield caps the loss regardless of
        // volatility. Multiplicative on purpose; flattening it to a sum
        // changes qualitative behavior.
        let raw = W_TVL * components.tvl
            + W_AUDIT * components.audit
            + W_AGE * components.age
            + W_CONCENTRATION * components.concentration
            + W_LIQUIDITY * components.liquidity
            + W_YIELD_CHANGE * components.yield_change
            + W_VOLATILITY_YIELD * (1.0 - components.volatility) * (1.0 - components.yield_level);

        // Under valid input `raw` already lies in [0, 1]; the clamp is a
        // safety net so malformed upstream data can never push the score
        // outside [0, 100].
        let score = clamp(raw * 100.0, 0.0, 100.0).round() as u8;

        let reasons = derive_reasons(metrics);
        let summary = summarize(&reasons);

        debug!(score, reasons = reasons.len(), "pool risk evaluated");

        RiskAssessment {
            score,
            components,
            reasons,
            summary,
        }
    }

    /// Map each raw metric onto a [0, 1] sub-score where 1 = safer. Each
    /// sub-score depends only on its own input field(s).
    fn derive_components(metrics: &PoolMetrics) -> RiskComponents {
        // Log-compress TVL so the curve scales from thousands to billions.
        let tvl = sigmoid(
            (metrics.total_value_locked + 1.0).log10() / TVL_LOG_DIVISOR,
            1.0,
            1.0,
        );

        let audit = if metrics.audit_flag { 1.0 } else { 0.0 };

        let age = sigmoid(metrics.age_days as f64 / AGE_SCALE_DAYS, 1.0, 1.0);

        let concentration = 1.0 - metrics.holder_concentration;

        let liquidity = sigmoid(metrics.liquidity_depth / LIQUIDITY_SCALE_USD, 1.0, 1.0);

        let yield_change = 1.0
            - clamp(
                metrics.yield_rate_change_24h.abs() / YIELD_SWING_FULL_PENALTY,
                0.0,
                1.0,
            );

        let volatility = 1.0
            - sigmoid(
                metrics.token_volatility_30d,
                VOLATILITY_STEEPNESS,
                VOLATILITY_MIDPOINT,
            );

        // Yield relative to a sustainable baseline; only used to scale the
        // volatility interaction penalty.
        let yield_level = clamp(
            metrics.current_yield_rate / SUSTAINABLE_YIELD_BASELINE,
            0.0,
            1.0,
        );

        RiskComponents {
            tvl,
            audit,
            age,
            concentration,
            liquidity,
            yield_change,
            volatility,
            yield_level,
        }
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        assert!((WEIGHT_SUM - 1.0).abs() < 1e-12);
    }

    fn metrics() -> PoolMetrics {
        PoolMetrics {
            total_value_locked: 890_000_000.0,
            current_yield_rate: 0.038,
            yield_rate_change_24h: 0.001,
            token_volatility_30d: 0.02,
            age_days: 1500,
            audit_flag: true,
            holder_concentration: 0.10,
            liquidity_depth: 12_000_000.0,
        }
    }

    #[test]
    fn test_components_are_normalized() {
        let components = RiskEngine::derive_components(&metrics());
        for value in components.as_array() {
            assert!((0.0..=1.0).contains(&value), "component out of range: {value}");
        }
    }

    #[test]
    fn test_audit_component_is_binary() {
        let mut m = metrics();
        assert_eq!(RiskEngine::derive_components(&m).audit, 1.0);
        m.audit_flag = false;
        assert_eq!(RiskEngine::derive_components(&m).audit, 0.0);
    }

    #[test]
    fn test_concentration_component_is_complement() {
        let mut m = metrics();
        m.holder_concentration = 0.25;
        let components = RiskEngine::derive_components(&m);
        assert!((components.concentration - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_yield_change_penalty_saturates() {
        let mut m = metrics();
        m.yield_rate_change_24h = 30.0;
        assert_eq!(RiskEngine::derive_components(&m).yield_change, 0.0);
        m.yield_rate_change_24h = -30.0;
        assert_eq!(RiskEngine::derive_components(&m).yield_change, 0.0);
        m.yield_rate_change_24h = 0.0;
        assert_eq!(RiskEngine::derive_components(&m).yield_change, 1.0);
    }

    #[test]
    fn test_interaction_term_zeroed_by_unsustainable_yield() {
        // With yield at or above the baseline the interaction contributes
        // nothing, however volatile the token is.
        let mut high = metrics();
        high.current_yield_rate = 3.5;
        high.token_volatility_30d = 0.9;
        let mut calm = high.clone();
        calm.token_volatility_30d = 0.0;
        assert_eq!(
            RiskEngine::new().evaluate(&high).score,
            RiskEngine::new().evaluate(&calm).score
        );
    }

    #[test]
    fn test_score_bounded_even_for_out_of_domain_input() {
        // Defensive clamp: malformed upstream data must not escape [0, 100].
        let m = PoolMetrics {
            total_value_locked: f64::MAX,
            current_yield_rate: 0.0,
            yield_rate_change_24h: 0.0,
            token_volatility_30d: 0.0,
            age_days: u32::MAX,
            audit_flag: true,
            holder_concentration: -5.0,
            liquidity_depth: f64::MAX,
        };
        let assessment = RiskEngine::new().evaluate(&m);
        assert!(assessment.score <= 100);
    }
}
