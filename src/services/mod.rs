pub mod risk_engine;
pub mod explainability;

pub use risk_engine::*;
pub use explainability::*;
