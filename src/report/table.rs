//! Year-by-year table rendering and CSV export

use std::io::Write;

use csv::Writer;

use crate::error::RoadmapError;
use crate::projection::ProjectionResult;

/// Column headers shared by the console table and the CSV export
pub const CSV_HEADERS: [&str; 7] = [
    "Age",
    "Balance",
    "Annual Withdrawal",
    "Disability Monthly",
    "Retirement Monthly",
    "Combined w/o SS",
    "Combined w/ SS",
];

/// Monetary cell: leading currency symbol, two decimal places
fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Write the projection as delimited text, one row per year
pub fn write_csv<W: Write>(result: &ProjectionResult, writer: W) -> Result<(), RoadmapError> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(CSV_HEADERS)?;

    for row in &result.years {
        csv.write_record(&[
            row.age.to_string(),
            money(row.balance_end_of_year),
            money(row.annual_withdrawal),
            money(row.disability_monthly),
            money(row.retirement_monthly),
            money(row.combined_monthly_no_ss),
            money(row.combined_monthly_with_ss),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Render a fixed-width console table of the projection
pub fn render_table(result: &ProjectionResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>4} {:>16} {:>18} {:>18} {:>18} {:>16} {:>16}\n",
        CSV_HEADERS[0],
        CSV_HEADERS[1],
        CSV_HEADERS[2],
        CSV_HEADERS[3],
        CSV_HEADERS[4],
        CSV_HEADERS[5],
        CSV_HEADERS[6],
    ));

    for row in &result.years {
        out.push_str(&format!(
            "{:>4} {:>16} {:>18} {:>18} {:>18} {:>16} {:>16}\n",
            row.age,
            money(row.balance_end_of_year),
            money(row.annual_withdrawal),
            money(row.disability_monthly),
            money(row.retirement_monthly),
            money(row.combined_monthly_no_ss),
            money(row.combined_monthly_with_ss),
        ));
    }

    out
}
