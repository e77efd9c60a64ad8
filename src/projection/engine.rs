//! Core projection engine: one pass per year from current age to the horizon

use log::debug;

use crate::plan::{ProjectionParameters, FINAL_AGE};

use super::year::{ProjectionResult, YearRecord};

/// Project the account balance and income streams for every age from
/// `current_age` through age 100 inclusive.
///
/// The run is deterministic and total: parameters are trusted (validated at
/// the construction boundary), every year emits exactly one record, and the
/// full series is recomputed on each call.
pub fn project(params: &ProjectionParameters) -> ProjectionResult {
    debug!(
        "projecting ages {}..={}, retirement at {}",
        params.current_age, FINAL_AGE, params.retirement_age
    );

    let mut result = ProjectionResult::new(params.retirement_age, params.withdrawal_rate);
    let mut balance = params.starting_balance;

    for age in params.current_age..=FINAL_AGE {
        if let Some(lump) = params.lump_sum {
            if age == lump.age {
                balance += lump.amount;
            }
        }

        let (annual_withdrawal, retirement_monthly) = if age <= params.retirement_age {
            let total_monthly = params.monthly_contribution + params.monthly_employer_match();
            balance = balance * (1.0 + params.growth_rate) + total_monthly * 12.0;
            (0.0, 0.0)
        } else {
            // Withdrawal comes off the balance carried in from the prior
            // year, before this year's growth is applied.
            let withdrawal = balance * params.withdrawal_rate;
            balance = (balance * (1.0 + params.growth_rate) - withdrawal).max(0.0);
            (withdrawal, withdrawal / 12.0)
        };

        let combined_monthly_no_ss = params.disability_benefit + retirement_monthly;
        let ss_monthly = params
            .social_security
            .map(|ss| ss.monthly_income_at(age))
            .unwrap_or(0.0);

        result.add_year(YearRecord {
            age,
            balance_end_of_year: balance,
            annual_withdrawal,
            disability_monthly: params.disability_benefit,
            retirement_monthly,
            combined_monthly_no_ss,
            combined_monthly_with_ss: combined_monthly_no_ss + ss_monthly,
        });
    }

    result
}
