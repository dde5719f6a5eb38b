use std::path::Path;

use anyhow::{anyhow, Context, Result};
use rhtmx_pattern::RouteTable;

pub fn execute(file: &Path, name: &str, values: &[String], params: &[String]) -> Result<()> {
    let table = RouteTable::from_file(file)
        .with_context(|| format!("route table {} is invalid", file.display()))?;

    let url = if params.is_empty() {
        table.url_for(name, values)?
    } else {
        let pairs = parse_params(params)?;
        table.url_for_params(name, &pairs)?
    };

    println!("{url}");
    Ok(())
}

/// Splits `key=value` arguments at the first `=`
fn parse_params(params: &[String]) -> Result<Vec<(&str, &str)>> {
    params
        .iter()
        .map(|param| {
            param
                .split_once('=')
                .ok_or_else(|| anyhow!("expected KEY=VALUE, got {param:?}"))
        })
        .collect()
}
