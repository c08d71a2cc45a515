//! Rounding rules shared by every estimator
//!
//! Probability results are whole percentages, physical quantities (°C, mm)
//! carry one decimal. Ties round toward positive infinity, so `-2.5` becomes
//! `-2` and `39.5` becomes `40`.

/// Decimal places used for percentage results
pub const PERCENT_DECIMALS: u32 = 0;

/// Decimal places used for temperature and rainfall results
pub const PHYSICAL_DECIMALS: u32 = 1;

/// Round to the nearest integer, ties toward positive infinity
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Round to `decimals` places, ties toward positive infinity
#[inline]
pub fn round_to(x: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    round_half_up(x * scale) / scale
}

/// Convert a fraction in `[0, 1]` to a whole percentage
#[inline]
pub fn to_percent(fraction: f64) -> f64 {
    round_half_up(fraction * 100.0)
}

/// Round a physical quantity to one decimal
#[inline]
pub fn round_physical(x: f64) -> f64 {
    round_to(x, PHYSICAL_DECIMALS)
}
