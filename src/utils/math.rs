/// Logistic sigmoid `1 / (1 + e^(-k * (x - x0)))`.
///
/// Monotonically increasing in `x` for `k > 0`, saturating toward 0 as
/// `x -> -inf` and 1 as `x -> +inf`. Total over finite input: an overflowing
/// exponent yields `f64::INFINITY` and the result saturates to 0.0 instead of
/// erroring.
pub fn sigmoid(x: f64, k: f64, x0: f64) -> f64 {
    1.0 / (1.0 + (-k * (x - x0)).exp())
}

/// Clamp `x` into `[lo, hi]`. Total function, no error cases.
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    x.max(lo).min(hi)
}
