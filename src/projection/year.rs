//! Output records for a projection run

use serde::{Deserialize, Serialize};

/// A single year of projection output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    /// Age during this projection year
    pub age: u8,

    /// Account balance at the end of the year, floored at zero
    pub balance_end_of_year: f64,

    /// Amount withdrawn during the year (zero through retirement age)
    pub annual_withdrawal: f64,

    /// Monthly disability benefit
    pub disability_monthly: f64,

    /// Monthly income from account withdrawals
    pub retirement_monthly: f64,

    /// Disability plus retirement income per month
    pub combined_monthly_no_ss: f64,

    /// Disability plus retirement plus Social Security per month
    pub combined_monthly_with_ss: f64,
}

/// Complete projection output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Retirement age the run was configured with (for the summary)
    pub retirement_age: u8,

    /// Withdrawal rate the run was configured with (for the summary)
    pub withdrawal_rate: f64,

    /// One record per age, ascending
    pub years: Vec<YearRecord>,
}

impl ProjectionResult {
    pub fn new(retirement_age: u8, withdrawal_rate: f64) -> Self {
        Self {
            retirement_age,
            withdrawal_rate,
            years: Vec::new(),
        }
    }

    /// Append a year record
    pub fn add_year(&mut self, record: YearRecord) {
        self.years.push(record);
    }

    /// Record for a specific age, if within the projected span
    pub fn at_age(&self, age: u8) -> Option<&YearRecord> {
        self.years.iter().find(|r| r.age == age)
    }

    /// Summary statistics keyed to the retirement age
    ///
    /// Monthly income at retirement is the disability benefit plus the first
    /// year's withdrawal from the balance held at retirement age.
    pub fn summary(&self) -> ProjectionSummary {
        let balance_at_retirement = self
            .at_age(self.retirement_age)
            .map(|r| r.balance_end_of_year)
            .unwrap_or(0.0);
        let disability_monthly = self
            .years
            .first()
            .map(|r| r.disability_monthly)
            .unwrap_or(0.0);
        let monthly_withdrawal = balance_at_retirement * self.withdrawal_rate / 12.0;

        ProjectionSummary {
            years_projected: self.years.len() as u32,
            balance_at_retirement,
            monthly_income_at_retirement: disability_monthly + monthly_withdrawal,
            final_balance: self.years.last().map(|r| r.balance_end_of_year).unwrap_or(0.0),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years_projected: u32,
    pub balance_at_retirement: f64,
    pub monthly_income_at_retirement: f64,
    pub final_balance: f64,
}
