//! Retirement Roadmap CLI
//!
//! Runs a projection from a JSON parameter file (or a built-in sample plan)
//! and writes the full year-by-year table as CSV.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use retirement_roadmap::{
    project, report, BenefitSource, DisabilityRateTable, MaritalStatus, ProjectionParameters,
    SocialSecurity, FINAL_AGE,
};

#[derive(Debug, Parser)]
#[command(name = "retirement_roadmap", about = "Year-by-year retirement projection")]
struct Args {
    /// JSON file holding a saved parameter set (defaults to a sample plan)
    #[arg(long)]
    params: Option<PathBuf>,

    /// Output CSV path
    #[arg(long, default_value = "projection_output.csv")]
    output: PathBuf,

    /// Projection rows to print to the console
    #[arg(long, default_value_t = 24)]
    preview: usize,
}

fn sample_params() -> anyhow::Result<ProjectionParameters> {
    let table = DisabilityRateTable::rates_2025();
    let source = BenefitSource::Table {
        rating: 100,
        marital: MaritalStatus::Married,
    };

    let params = ProjectionParameters {
        current_age: 30,
        retirement_age: 65,
        starting_balance: 40_000.0,
        monthly_contribution: 400.0,
        growth_rate: 0.07,
        withdrawal_rate: 0.04,
        inflation_rate: 0.025,
        employer_match_percent: 1.0,
        employer_match_cap: 400.0,
        disability_benefit: source.resolve(&table)?,
        lump_sum: None,
        social_security: Some(SocialSecurity {
            monthly_amount: 2200.0,
            start_age: 67,
        }),
    };
    params.validate()?;
    Ok(params)
}

fn load_params(path: &Path) -> anyhow::Result<ProjectionParameters> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let params: ProjectionParameters = serde_json::from_reader(file)
        .with_context(|| format!("parsing {}", path.display()))?;
    params.validate()?;
    Ok(params)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    println!("Retirement Roadmap v0.1.0");
    println!("=========================\n");

    let params = match &args.params {
        Some(path) => load_params(path)?,
        None => sample_params()?,
    };

    println!("Plan:");
    println!(
        "  Ages: {} today, retiring at {}",
        params.current_age, params.retirement_age
    );
    println!("  Starting balance: ${:.2}", params.starting_balance);
    println!(
        "  Monthly contribution: ${:.2} (+${:.2} employer match)",
        params.monthly_contribution,
        params.monthly_employer_match()
    );
    println!("  Disability benefit: ${:.2}/month", params.disability_benefit);
    if let Some(ss) = &params.social_security {
        println!(
            "  Social Security: ${:.2}/month from age {}",
            ss.monthly_amount, ss.start_age
        );
    }
    println!();

    let result = project(&params);

    println!("Projection ({} years):", result.years.len());
    let table = report::render_table(&result);
    for line in table.lines().take(args.preview + 1) {
        println!("{}", line);
    }
    if result.years.len() > args.preview {
        println!("... ({} more years)", result.years.len() - args.preview);
    }

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    report::write_csv(&result, file)?;
    println!("\nFull results written to: {}", args.output.display());

    let summary = result.summary();
    println!("\nSummary at retirement age {}:", params.retirement_age);
    println!("  Projected savings: ${:.2}", summary.balance_at_retirement);
    println!(
        "  Monthly income (disability + withdrawals): ${:.2}",
        summary.monthly_income_at_retirement
    );
    println!(
        "  Balance at age {}: ${:.2}",
        FINAL_AGE, summary.final_balance
    );

    Ok(())
}
