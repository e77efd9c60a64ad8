//! Age-keyed series for chart rendering

use crate::projection::ProjectionResult;

/// The monthly income lines, each keyed by age
#[derive(Debug, Clone)]
pub struct IncomeSeries {
    /// Disability benefit alone
    pub disability: Vec<(u8, f64)>,

    /// Disability plus retirement withdrawals
    pub with_retirement: Vec<(u8, f64)>,

    /// Disability plus retirement plus Social Security
    pub with_social_security: Vec<(u8, f64)>,
}

/// Balance over age
pub fn balance_series(result: &ProjectionResult) -> Vec<(u8, f64)> {
    result
        .years
        .iter()
        .map(|r| (r.age, r.balance_end_of_year))
        .collect()
}

/// The set of income-over-age lines
pub fn income_series(result: &ProjectionResult) -> IncomeSeries {
    IncomeSeries {
        disability: result
            .years
            .iter()
            .map(|r| (r.age, r.disability_monthly))
            .collect(),
        with_retirement: result
            .years
            .iter()
            .map(|r| (r.age, r.combined_monthly_no_ss))
            .collect(),
        with_social_security: result
            .years
            .iter()
            .map(|r| (r.age, r.combined_monthly_with_ss))
            .collect(),
    }
}
