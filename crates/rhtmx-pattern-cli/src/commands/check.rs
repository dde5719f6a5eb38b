use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use rhtmx_pattern::RouteTable;

pub fn execute(file: &Path) -> Result<()> {
    let table = RouteTable::from_file(file)
        .with_context(|| format!("route table {} is invalid", file.display()))?;

    println!(
        "{} {} ({} routes)",
        "✓".green().bold(),
        file.display(),
        table.len()
    );

    let width = table.names().map(str::len).max().unwrap_or(0);
    for (name, pattern) in table.iter() {
        let wildcards: Vec<&str> = pattern.wildcards().collect();
        println!(
            "  {:<width$}  {}  [{}]",
            name.cyan(),
            pattern,
            wildcards.join(", ").dimmed()
        );
    }

    Ok(())
}
