use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Raw observed metrics for a single yield-bearing pool, as supplied by the
/// data-ingestion layer. All monetary fields are USD. Rates are decimal
/// fractions (0.05 = 5%); the ingestion layer is responsible for converting
/// percentages before constructing this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolMetrics {
    /// Total value locked in the pool, USD.
    pub total_value_locked: f64,
    /// Current advertised yield rate as a decimal fraction.
    pub current_yield_rate: f64,
    /// Signed relative change of the yield rate over the last 24h.
    pub yield_rate_change_24h: f64,
    /// 30-day volatility of the reward token.
    pub token_volatility_30d: f64,
    /// Pool age in days.
    pub age_days: u32,
    /// Whether the protocol has a recognized external audit.
    pub audit_flag: bool,
    /// Share of the pool held by the top holders, in [0, 1].
    pub holder_concentration: f64,
    /// USD-equivalent slippage capacity of the pool.
    pub liquidity_depth: f64,
}

impl PoolMetrics {
    /// Boundary validation for externally supplied metrics. The scoring
    /// engine itself is total over finite input; callers that cannot trust
    /// their source should validate here before evaluating.
    pub fn validate(&self) -> Result<(), AppError> {
        Self::require_finite("total_value_locked", self.total_value_locked)?;
        Self::require_finite("current_yield_rate", self.current_yield_rate)?;
        Self::require_finite("yield_rate_change_24h", self.yield_rate_change_24h)?;
        Self::require_finite("token_volatility_30d", self.token_volatility_30d)?;
        Self::require_finite("holder_concentration", self.holder_concentration)?;
        Self::require_finite("liquidity_depth", self.liquidity_depth)?;

        Self::require_non_negative("total_value_locked", self.total_value_locked)?;
        Self::require_non_negative("current_yield_rate", self.current_yield_rate)?;
        Self::require_non_negative("token_volatility_30d", self.token_volatility_30d)?;
        Self::require_non_negative("liquidity_depth", self.liquidity_depth)?;

        if !(0.0..=1.0).contains(&self.holder_concentration) {
            return Err(AppError::MetricOutOfRange {
                field: "holder_concentration",
                reason: format!("expected [0, 1], got {}", self.holder_concentration),
            });
        }

        Ok(())
    }

    fn require_finite(field: &'static str, value: f64) -> Result<(), AppError> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(AppError::NonFiniteMetric { field, value })
        }
    }

    fn require_non_negative(field: &'static str, value: f64) -> Result<(), AppError> {
        if value >= 0.0 {
            Ok(())
        } else {
            Err(AppError::MetricOutOfRange {
                field,
                reason: format!("expected >= 0, got {}", value),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stable_pool() -> PoolMetrics {
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
    fn test_valid_metrics_pass_validation() {
        assert!(stable_pool().validate().is_ok());
    }

    #[test]
    fn test_non_finite_metric_rejected() {
        let mut pool = stable_pool();
        pool.token_volatility_30d = f64::NAN;
        assert!(matches!(
            pool.validate(),
            Err(AppError::NonFiniteMetric { field: "token_volatility_30d", .. })
        ));
    }

    #[test]
    fn test_negative_tvl_rejected() {
        let mut pool = stable_pool();
        pool.total_value_locked = -1.0;
        assert!(matches!(
            pool.validate(),
            Err(AppError::MetricOutOfRange { field: "total_value_locked", .. })
        ));
    }

    #[test]
    fn test_concentration_above_one_rejected() {
        let mut pool = stable_pool();
        pool.holder_concentration = 1.5;
        assert!(pool.validate().is_err());
    }

    #[test]
    fn test_json_field_names_are_camel_case() {
        let json = serde_json::to_value(stable_pool()).unwrap();
        assert!(json.get("totalValueLocked").is_some());
        assert!(json.get("yieldRateChange24h").is_some());
        assert!(json.get("auditFlag").is_some());
    }
}
