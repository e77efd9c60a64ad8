//! Projection parameter set and its boundary validation

use serde::{Deserialize, Serialize};

use crate::benefits::SocialSecurity;
use crate::error::RoadmapError;

/// Final age included in every projection
pub const FINAL_AGE: u8 = 100;

/// Minimum supported current age
pub const MIN_CURRENT_AGE: u8 = 18;

/// One-time addition to the balance at a specific age
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LumpSum {
    /// Age at which the amount is added, before that year's growth
    pub age: u8,

    /// Amount added to the balance
    pub amount: f64,
}

/// Immutable input for one projection run
///
/// Constructed fresh from user input or deserialized from a saved scenario,
/// then validated once at the boundary. The engine trusts these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParameters {
    /// Current age of the planner
    pub current_age: u8,

    /// Target retirement age; contributions stop after this year
    pub retirement_age: u8,

    /// Account balance at the start of the projection
    pub starting_balance: f64,

    /// Monthly contribution while accumulating
    pub monthly_contribution: f64,

    /// Annual growth rate applied to the balance every year
    pub growth_rate: f64,

    /// Fraction of the balance withdrawn annually after retirement
    pub withdrawal_rate: f64,

    /// Annual inflation rate; accepted and carried but not applied to any
    /// calculation (withdrawals follow a constant-percentage-of-balance rule)
    pub inflation_rate: f64,

    /// Employer match as a fraction of the monthly contribution, in [0, 1]
    pub employer_match_percent: f64,

    /// Monthly ceiling on the employer match amount
    pub employer_match_cap: f64,

    /// Resolved monthly disability benefit, constant across all years
    pub disability_benefit: f64,

    /// Optional one-time contribution at a specific age
    #[serde(default)]
    pub lump_sum: Option<LumpSum>,

    /// Optional Social Security benefit added to income from its start age
    #[serde(default)]
    pub social_security: Option<SocialSecurity>,
}

impl ProjectionParameters {
    /// Monthly employer match: a fraction of the contribution, capped
    pub fn monthly_employer_match(&self) -> f64 {
        (self.monthly_contribution * self.employer_match_percent).min(self.employer_match_cap)
    }

    /// Validate every range constraint at the construction boundary
    ///
    /// Violations abort the run before any year record is produced.
    pub fn validate(&self) -> Result<(), RoadmapError> {
        if self.current_age < MIN_CURRENT_AGE {
            return Err(range_error(format!(
                "current_age {} is below the minimum of {}",
                self.current_age, MIN_CURRENT_AGE
            )));
        }
        if self.retirement_age <= self.current_age {
            return Err(range_error(format!(
                "retirement_age {} must exceed current_age {}",
                self.retirement_age, self.current_age
            )));
        }
        if self.retirement_age > FINAL_AGE {
            return Err(range_error(format!(
                "retirement_age {} exceeds the projection horizon of {}",
                self.retirement_age, FINAL_AGE
            )));
        }
        if self.starting_balance < 0.0 {
            return Err(range_error(format!(
                "starting_balance {} is negative",
                self.starting_balance
            )));
        }
        if self.monthly_contribution < 0.0 {
            return Err(range_error(format!(
                "monthly_contribution {} is negative",
                self.monthly_contribution
            )));
        }
        if self.growth_rate < 0.0 || self.withdrawal_rate < 0.0 || self.inflation_rate < 0.0 {
            return Err(range_error(format!(
                "rates must be non-negative (growth {}, withdrawal {}, inflation {})",
                self.growth_rate, self.withdrawal_rate, self.inflation_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.employer_match_percent) {
            return Err(range_error(format!(
                "employer_match_percent {} must be within [0, 1]",
                self.employer_match_percent
            )));
        }
        if self.employer_match_cap < 0.0 {
            return Err(range_error(format!(
                "employer_match_cap {} is negative",
                self.employer_match_cap
            )));
        }
        if self.disability_benefit < 0.0 {
            return Err(range_error(format!(
                "disability_benefit {} is negative",
                self.disability_benefit
            )));
        }

        if let Some(lump) = &self.lump_sum {
            if lump.amount < 0.0 {
                return Err(range_error(format!("lump sum amount {} is negative", lump.amount)));
            }
            if lump.age < self.current_age || lump.age > self.retirement_age {
                return Err(range_error(format!(
                    "lump sum age {} must be within [{}, {}]",
                    lump.age, self.current_age, self.retirement_age
                )));
            }
        }

        if let Some(ss) = &self.social_security {
            if ss.monthly_amount < 0.0 {
                return Err(range_error(format!(
                    "social security amount {} is negative",
                    ss.monthly_amount
                )));
            }
            if ss.start_age < self.retirement_age || ss.start_age > FINAL_AGE {
                return Err(range_error(format!(
                    "social security start age {} must be within [{}, {}]",
                    ss.start_age, self.retirement_age, FINAL_AGE
                )));
            }
        }

        Ok(())
    }
}

fn range_error(detail: String) -> RoadmapError {
    RoadmapError::InvalidParameterRange(detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_params() -> ProjectionParameters {
        ProjectionParameters {
            current_age: 30,
            retirement_age: 65,
            starting_balance: 40_000.0,
            monthly_contribution: 400.0,
            growth_rate: 0.07,
            withdrawal_rate: 0.04,
            inflation_rate: 0.025,
            employer_match_percent: 1.0,
            employer_match_cap: 400.0,
            disability_benefit: 1701.48,
            lump_sum: None,
            social_security: None,
        }
    }

    #[test]
    fn test_valid_params_pass() {
        assert!(test_params().validate().is_ok());
    }

    #[test]
    fn test_age_ordering_rejected() {
        let mut params = test_params();
        params.retirement_age = 30;
        assert!(matches!(
            params.validate(),
            Err(RoadmapError::InvalidParameterRange(_))
        ));

        params = test_params();
        params.current_age = 17;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_negative_amounts_rejected() {
        let mut params = test_params();
        params.starting_balance = -1.0;
        assert!(params.validate().is_err());

        params = test_params();
        params.growth_rate = -0.01;
        assert!(params.validate().is_err());

        params = test_params();
        params.employer_match_cap = -100.0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_match_percent_bounds() {
        let mut params = test_params();
        params.employer_match_percent = 1.5;
        assert!(params.validate().is_err());

        params.employer_match_percent = 0.0;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_match_cap_binds() {
        let mut params = test_params();
        params.monthly_contribution = 1000.0;
        params.employer_match_percent = 1.0;
        params.employer_match_cap = 400.0;

        assert_eq!(params.monthly_employer_match(), 400.0);
    }

    #[test]
    fn test_match_below_cap() {
        let params = test_params();
        // 400 * 1.0 = 400, exactly at the cap
        assert_eq!(params.monthly_employer_match(), 400.0);

        let mut half = test_params();
        half.employer_match_percent = 0.5;
        assert_eq!(half.monthly_employer_match(), 200.0);
    }

    #[test]
    fn test_lump_sum_bounds() {
        let mut params = test_params();
        params.lump_sum = Some(LumpSum { age: 40, amount: 10_000.0 });
        assert!(params.validate().is_ok());

        params.lump_sum = Some(LumpSum { age: 29, amount: 10_000.0 });
        assert!(params.validate().is_err());

        params.lump_sum = Some(LumpSum { age: 66, amount: 10_000.0 });
        assert!(params.validate().is_err());

        params.lump_sum = Some(LumpSum { age: 40, amount: -5.0 });
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_social_security_bounds() {
        let mut params = test_params();
        params.social_security = Some(SocialSecurity {
            monthly_amount: 2200.0,
            start_age: 67,
        });
        assert!(params.validate().is_ok());

        params.social_security = Some(SocialSecurity {
            monthly_amount: 2200.0,
            start_age: 64,
        });
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_scenario_roundtrip_keeps_fields() {
        let mut params = test_params();
        params.lump_sum = Some(LumpSum { age: 45, amount: 25_000.0 });
        params.social_security = Some(SocialSecurity {
            monthly_amount: 2200.0,
            start_age: 67,
        });

        let encoded = serde_json::to_string(&params).unwrap();
        let decoded: ProjectionParameters = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, params);
    }
}
