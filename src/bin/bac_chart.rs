//! Print the reference BAC chart
//! Usage: cargo run --bin bac_chart -- [male|female] [--metric] [--json]

use safebac::bac::{default_chart, BacChart, ChartBand};
use safebac::config;
use safebac::models::Sex;

fn print_table(chart: &BacChart, metric: bool) {
    println!("Approximate peak BAC (%) for {} drinkers", chart.sex.as_str());

    let unit = if metric { "kg" } else { "lb" };
    let header: Vec<String> = chart
        .rows
        .first()
        .map(|row| row.cells.iter().map(|c| format!("{:>7}", c.drinks)).collect())
        .unwrap_or_default();
    println!("{:>8} |{}", unit, header.join(""));

    for row in &chart.rows {
        let weight = if metric { row.weight_kg } else { row.weight_lb };
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|c| format!("{:>7.3}", c.bac_percent))
            .collect();
        println!("{:>8} |{}", weight, cells.join(""));
    }

    println!();
    for band in ChartBand::ALL {
        let count = chart
            .rows
            .iter()
            .flat_map(|r| &r.cells)
            .filter(|c| c.band == band)
            .count();
        println!("{:>10}  {:<11} {} cells", band.as_str(), band.range_label(), count);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    config::init_logging()?;

    let args: Vec<String> = std::env::args().skip(1).collect();

    let sex = args
        .iter()
        .find_map(|a| Sex::from_str(a))
        .unwrap_or(Sex::Male);
    let metric = args.iter().any(|a| a == "--metric");
    let json = args.iter().any(|a| a == "--json");

    tracing::debug!(sex = sex.as_str(), metric, json, "Rendering chart");
    let chart = default_chart(sex);

    if json {
        println!("{}", serde_json::to_string_pretty(&chart)?);
    } else {
        print_table(&chart, metric);
    }

    Ok(())
}
