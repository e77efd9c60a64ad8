//! Disability compensation rate tables and benefit resolution
//!
//! Monthly amounts follow the published compensation schedule (2025 rates).
//! The married and single schedules are identical except at the 100 percent
//! rating, where the married rate is higher.

use serde::{Deserialize, Serialize};

use crate::error::RoadmapError;

/// Marital status for rate table selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    Married,
    Single,
}

/// Monthly compensation rates by disability rating
///
/// Stored as (rating, single_rate, married_rate). The rating domain is
/// exactly the eleven multiples of 10 from 0 through 100; any other rating
/// is rejected at lookup.
#[derive(Debug, Clone)]
pub struct DisabilityRateTable {
    rates: Vec<(u8, f64, f64)>,
}

impl Default for DisabilityRateTable {
    fn default() -> Self {
        Self::rates_2025()
    }
}

impl DisabilityRateTable {
    /// 2025 monthly compensation rates
    pub fn rates_2025() -> Self {
        Self {
            rates: vec![
                (0, 0.00, 0.00),
                (10, 171.23, 171.23),
                (20, 338.49, 338.49),
                (30, 529.83, 529.83),
                (40, 755.28, 755.28),
                (50, 1075.16, 1075.16),
                (60, 1350.90, 1350.90),
                (70, 1701.48, 1701.48),
                (80, 1980.46, 1980.46),
                (90, 2232.75, 2232.75),
                (100, 3627.22, 3877.22),
            ],
        }
    }

    /// Look up the monthly amount for a rating and marital status
    pub fn monthly_amount(&self, rating: u8, marital: MaritalStatus) -> Result<f64, RoadmapError> {
        for (tabulated, single, married) in &self.rates {
            if *tabulated == rating {
                return Ok(match marital {
                    MaritalStatus::Married => *married,
                    MaritalStatus::Single => *single,
                });
            }
        }
        Err(RoadmapError::InvalidRating(rating))
    }

    /// The tabulated ratings, in ascending order
    pub fn ratings(&self) -> Vec<u8> {
        self.rates.iter().map(|(rating, _, _)| *rating).collect()
    }
}

/// Where the monthly disability benefit comes from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BenefitSource {
    /// Rate table lookup by rating and marital status
    Table { rating: u8, marital: MaritalStatus },
    /// Caller-supplied monthly amount, used as-is (may be zero)
    Custom(f64),
}

impl BenefitSource {
    /// Resolve to the fixed monthly amount used for the whole projection
    ///
    /// The custom path returns its amount unmodified without consulting the
    /// table, so a rating is only checked when the table is actually used.
    pub fn resolve(&self, table: &DisabilityRateTable) -> Result<f64, RoadmapError> {
        match self {
            BenefitSource::Table { rating, marital } => table.monthly_amount(*rating, *marital),
            BenefitSource::Custom(amount) => Ok(*amount),
        }
    }
}
