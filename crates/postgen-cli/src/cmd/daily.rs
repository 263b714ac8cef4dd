use crate::output::print_json;
use anyhow::Context;
use chrono::NaiveDate;
use postgen_core::config::DailyConfig;
use postgen_core::{daily, io};
use std::path::Path;

pub fn run(out: &Path, config: &DailyConfig, today: NaiveDate, json: bool) -> anyhow::Result<()> {
    let collection = daily::build(config, today).context("failed to build collection")?;

    io::write_json_pretty(out, &collection)
        .with_context(|| format!("failed to write {}", out.display()))?;

    let reservations = collection.item.len() - 2;

    if json {
        #[derive(serde::Serialize)]
        struct DailySummary<'a> {
            reservations: usize,
            items: usize,
            output: String,
            people: Vec<&'a str>,
            services: Vec<&'a str>,
            projected_pax: u32,
        }

        return print_json(&DailySummary {
            reservations,
            items: collection.item.len(),
            output: out.display().to_string(),
            people: config.people.iter().map(|p| p.name.as_str()).collect(),
            services: config.services.iter().map(|s| s.name.as_str()).collect(),
            projected_pax: daily::projected_pax(config),
        });
    }

    println!(
        "Generated {} reservation requests (+ login + verification)",
        reservations
    );
    println!("File saved: {}", out.display());
    println!("Rotation pattern:");
    println!(
        "  People: {} ({})",
        config.people.len(),
        config
            .people
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!(
        "  Services: {} ({})",
        config.services.len(),
        config
            .services
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!(
        "  Total pax if all created: {}",
        daily::projected_pax(config)
    );

    Ok(())
}
