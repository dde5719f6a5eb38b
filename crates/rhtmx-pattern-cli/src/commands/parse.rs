use anyhow::{Context, Result};
use colored::Colorize;
use rhtmx_pattern::{Pattern, Segment};
use serde::Serialize;

/// JSON view of a parsed pattern
#[derive(Serialize)]
struct PatternView<'a> {
    pattern: &'a str,
    method: Option<&'a str>,
    host: Option<&'a str>,
    segments: &'a [Segment],
    required: usize,
    trailing: bool,
}

impl<'a> From<&'a Pattern> for PatternView<'a> {
    fn from(pattern: &'a Pattern) -> Self {
        let arity = pattern.arity();
        Self {
            pattern: pattern.as_str(),
            method: pattern.method(),
            host: pattern.host(),
            segments: pattern.segments(),
            required: arity.required,
            trailing: arity.trailing,
        }
    }
}

pub fn execute(raw: &str, json: bool) -> Result<()> {
    let pattern = Pattern::parse(raw).with_context(|| format!("cannot parse {raw:?}"))?;

    if json {
        println!("{}", render_json(&pattern)?);
        return Ok(());
    }

    println!("{} {}", "Pattern:".green().bold(), pattern.as_str().cyan());
    println!("  method:   {}", pattern.method().unwrap_or("-"));
    println!("  host:     {}", pattern.host().unwrap_or("-"));
    println!("  segments:");
    for (idx, segment) in pattern.segments().iter().enumerate() {
        println!("    {idx:>2}  {:<10} {}", kind(segment).yellow(), describe(segment));
    }

    let arity = pattern.arity();
    if arity.trailing {
        println!("  values:   {}..={}", arity.required, arity.max());
    } else {
        println!("  values:   {}", arity.required);
    }

    Ok(())
}

pub(crate) fn render_json(pattern: &Pattern) -> Result<String> {
    Ok(serde_json::to_string_pretty(&PatternView::from(pattern))?)
}

pub(crate) fn kind(segment: &Segment) -> &'static str {
    match segment {
        Segment::Literal(_) => "literal",
        Segment::Single(_) => "wildcard",
        Segment::Rest(_) => "rest",
        Segment::EndAnchor => "end",
    }
}

fn describe(segment: &Segment) -> String {
    match segment {
        Segment::Literal(text) => format!("{text:?}"),
        other => other.to_string(),
    }
}
