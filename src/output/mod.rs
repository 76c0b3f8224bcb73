//! Output formatting for CLI display
//!
//! Formats records, statistics and navigation effects for the terminal.

use crate::IconRecord;
use crate::catalog::CatalogStats;
use crate::navigation::Effect;
use crate::slug::icon_path;
use colored::Colorize;

/// One-line listing entry for a record
#[must_use]
pub fn record_line(record: &IconRecord, quiet: bool) -> String {
    if quiet {
        icon_path(record)
    } else {
        format!(
            "  {} {} ({}, {}) {}",
            record.city.bold(),
            format!("[{}]", record.category).dimmed(),
            record.country,
            record.region,
            icon_path(record).cyan()
        )
    }
}

/// Multi-line detail view for a record
#[must_use]
pub fn record_detail(record: &IconRecord) -> String {
    let mut lines = vec![
        format!("{} {}", record.name.bold(), icon_path(record).cyan()),
        format!("  City:     {}", record.city),
        format!("  Country:  {}", record.country),
        format!("  Region:   {}", record.region),
        format!("  Category: {}", record.category),
        format!("  Image:    {}", record.image),
    ];
    if !record.tags.is_empty() {
        lines.push(format!("  Tags:     {}", record.tags.join(", ")));
    }
    if let Some(description) = &record.description {
        lines.push(format!("  {}", description.italic()));
    }
    lines.join("\n")
}

/// Statistics page
#[must_use]
pub fn stats(stats: &CatalogStats) -> String {
    let mut lines = vec![
        format!("{} icons from {} countries", stats.total_icons, stats.countries),
        format!("{} distinct tags", stats.distinct_tags),
        String::new(),
        "By region:".bold().to_string(),
    ];
    lines.extend(stats.by_region.iter().map(|(region, n)| format!("  {region}: {n}")));
    lines.push("By category:".bold().to_string());
    lines.extend(stats.by_category.iter().map(|(category, n)| format!("  {category}: {n}")));
    lines.push("Top countries:".bold().to_string());
    lines.extend(
        stats
            .top_countries
            .iter()
            .enumerate()
            .map(|(i, c)| format!("  {}. {} ({})", i + 1, c.country, c.icons)),
    );
    lines.join("\n")
}

/// Describe a navigation effect
#[must_use]
pub fn effect(effect: &Effect) -> String {
    match effect {
        Effect::Navigate { .. } => format!("-> {}", effect.to_string().green()),
        Effect::NotFound(_) => format!("-> {}", effect.to_string().red()),
    }
}
