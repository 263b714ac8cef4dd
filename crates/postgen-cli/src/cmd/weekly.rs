use crate::output::print_json;
use anyhow::Context;
use chrono::NaiveDate;
use postgen_core::config::WeeklyConfig;
use postgen_core::{io, weekly};
use std::path::Path;

pub fn run(
    collection: &Path,
    out: Option<&Path>,
    config: &WeeklyConfig,
    today: NaiveDate,
    json: bool,
) -> anyhow::Result<()> {
    let mut doc = io::load_json(collection)
        .with_context(|| format!("failed to load collection {}", collection.display()))?;

    let count = weekly::generate_into(&mut doc, config, today)
        .context("failed to generate reservations")?;

    let dest = out.unwrap_or(collection);
    io::write_json_pretty(dest, &doc)
        .with_context(|| format!("failed to write {}", dest.display()))?;

    let mondays = weekly::monday_dates(config, today);

    if json {
        #[derive(serde::Serialize)]
        struct WeeklySummary<'a> {
            reservations: usize,
            target_label: &'a str,
            output: String,
            mondays: &'a [NaiveDate],
            customers: Vec<&'a str>,
        }

        return print_json(&WeeklySummary {
            reservations: count,
            target_label: &config.target_label,
            output: dest.display().to_string(),
            mondays: &mondays,
            customers: config.customers.iter().map(|c| c.name.as_str()).collect(),
        });
    }

    println!(
        "Generated {} reservations into '{}'",
        count, config.target_label
    );
    println!("File saved: {}", dest.display());
    println!(
        "Mondays: {}",
        mondays
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!(
        "Customers: {}",
        config
            .customers
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(())
}
