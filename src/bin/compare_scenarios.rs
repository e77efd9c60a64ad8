//! Project a set of withdrawal-rate scenarios concurrently and compare
//! outcomes side by side

use std::time::Instant;

use retirement_roadmap::{
    BenefitSource, DisabilityRateTable, MaritalStatus, ProjectionParameters, ScenarioStore,
    SocialSecurity,
};

fn base_params() -> anyhow::Result<ProjectionParameters> {
    let table = DisabilityRateTable::rates_2025();
    let source = BenefitSource::Table {
        rating: 70,
        marital: MaritalStatus::Single,
    };

    Ok(ProjectionParameters {
        current_age: 35,
        retirement_age: 62,
        starting_balance: 80_000.0,
        monthly_contribution: 750.0,
        growth_rate: 0.065,
        withdrawal_rate: 0.04,
        inflation_rate: 0.025,
        employer_match_percent: 0.5,
        employer_match_cap: 300.0,
        disability_benefit: source.resolve(&table)?,
        lump_sum: None,
        social_security: Some(SocialSecurity {
            monthly_amount: 1900.0,
            start_age: 67,
        }),
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start = Instant::now();
    let base = base_params()?;

    let mut store = ScenarioStore::new();
    for (name, rate) in [
        ("withdraw_3pct", 0.03),
        ("withdraw_4pct", 0.04),
        ("withdraw_5pct", 0.05),
        ("withdraw_6pct", 0.06),
    ] {
        let mut params = base.clone();
        params.withdrawal_rate = rate;
        store.save(name, &params)?;
    }

    let results = store.project_all()?;
    println!(
        "Projected {} scenarios in {:?}\n",
        results.len(),
        start.elapsed()
    );

    println!(
        "{:<16} {:>18} {:>20} {:>18}",
        "Scenario", "At Retirement", "Monthly at Retire", "Balance at 100"
    );
    println!("{}", "-".repeat(76));

    for (name, result) in &results {
        let summary = result.summary();
        println!(
            "{:<16} {:>18} {:>20} {:>18}",
            name,
            format!("${:.2}", summary.balance_at_retirement),
            format!("${:.2}", summary.monthly_income_at_retirement),
            format!("${:.2}", summary.final_balance),
        );
    }

    Ok(())
}
