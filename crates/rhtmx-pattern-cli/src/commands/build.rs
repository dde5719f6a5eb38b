use anyhow::{Context, Result};
use rhtmx_pattern::Pattern;

pub fn execute(raw: &str, values: &[String]) -> Result<()> {
    let pattern = Pattern::parse(raw).with_context(|| format!("cannot parse {raw:?}"))?;
    let url = pattern.build(values)?;

    println!("{url}");
    Ok(())
}
