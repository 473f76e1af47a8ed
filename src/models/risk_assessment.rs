use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// The eight normalized safety sub-scores, each in [0, 1] with 1 = safer.
/// `yield_level` is not a safety signal on its own; it only feeds the
/// volatility/yield interaction penalty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskComponents {
    pub tvl: f64,
    pub audit: f64,
    pub age: f64,
    pub concentration: f64,
    pub liquidity: f64,
    pub yield_change: f64,
    pub volatility: f64,
    pub yield_level: f64,
}

impl RiskComponents {
    pub fn as_array(&self) -> [f64; 8] {
        [
            self.tvl,
            self.audit,
            self.age,
            self.concentration,
            self.liquidity,
            self.yield_change,
            self.volatility,
            self.yield_level,
        ]
    }
}

/// Machine-generated flag for one specific risk condition, detected from raw
/// (not normalized) metric thresholds. Variants are listed in their fixed
/// evaluation priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskReason {
    UnsustainableYield,
    HighTokenVolatility,
    NoExternalAudit,
    HighHolderConcentration,
    RapidYieldSwings,
    LowTotalValueLocked,
}

impl RiskReason {
    pub const fn message(&self) -> &'static str {
        match self {
            RiskReason::UnsustainableYield => "Yield rate is unusually high (>100%)",
            RiskReason::HighTokenVolatility => "High reward token volatility",
            RiskReason::NoExternalAudit => "No external audit detected",
            RiskReason::HighHolderConcentration => "High token holder concentration",
            RiskReason::RapidYieldSwings => "Rapid yield-rate swings in last 24h",
            RiskReason::LowTotalValueLocked => "Low total value locked",
        }
    }
}

impl fmt::Display for RiskReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for RiskReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Coarse banding of a safety score for display and alert routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskStatus {
    Safe,
    Caution,
    Risky,
}

impl RiskStatus {
    pub fn from_score(score: u8) -> Self {
        match score {
            70..=u8::MAX => RiskStatus::Safe,
            50..=69 => RiskStatus::Caution,
            _ => RiskStatus::Risky,
        }
    }
}

/// Result of scoring one pool: the aggregate safety score, its component
/// breakdown, and the triggered reason codes. Freshly constructed per
/// evaluation, a pure function of the input metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Aggregate safety score in [0, 100]; higher is safer.
    pub score: u8,
    pub components: RiskComponents,
    /// Triggered reason codes, in fixed priority order.
    pub reasons: Vec<RiskReason>,
    /// First three reasons joined with "; ", or a fixed fallback when none
    /// triggered.
    pub summary: String,
}

impl RiskAssessment {
    pub fn status(&self) -> RiskStatus {
        RiskStatus::from_score(self.score)
    }
}
