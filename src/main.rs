use std::io::Read;

use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pool_risk_engine::{AppError, PoolMetrics, RiskEngine};

#[derive(Deserialize)]
#[serde(untagged)]
enum MetricsInput {
    Many(Vec<PoolMetrics>),
    One(PoolMetrics),
}

/// Reads pool metrics as JSON on stdin (a single object or an array),
/// validates them, and writes the risk assessments as a JSON array on stdout.
fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let pools = match serde_json::from_str::<MetricsInput>(&input)? {
        MetricsInput::Many(pools) => pools,
        MetricsInput::One(pool) => vec![pool],
    };
    info!("Scoring {} pool(s)", pools.len());

    let engine = RiskEngine::new();
    let mut assessments = Vec::with_capacity(pools.len());
    for pool in &pools {
        pool.validate()?;
        assessments.push(engine.evaluate(pool));
    }

    println!("{}", serde_json::to_string_pretty(&assessments)?);
    Ok(())
}
