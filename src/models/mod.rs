pub mod pool_metrics;
pub mod risk_assessment;

pub use pool_metrics::*;
pub use risk_assessment::*;
