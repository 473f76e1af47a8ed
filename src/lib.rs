pub mod models;
pub mod services;
pub mod utils;
pub mod error;

pub use error::types::*;
pub use models::{PoolMetrics, RiskAssessment, RiskComponents, RiskReason, RiskStatus};
pub use services::risk_engine::RiskEngine;
