use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use surge_table::Resolver;
use surge_table::resolver::PLACEHOLDER;

pub fn run(path: Option<&Path>) -> Result<(), String> {
    let table = super::load(path)?;

    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(vec!["Range", "Kind", "Effect"]);

    for entry in table.entries() {
        out.add_row(vec![
            entry.range.to_string(),
            entry.resolver.kind().to_string(),
            summary(&entry.resolver),
        ]);
    }

    println!("  {} — domain {}", table.name(), table.domain());
    println!("{out}");
    println!();
    println!("  {} entries", table.len());

    Ok(())
}

/// A one-line preview of what the resolver produces.
fn summary(resolver: &Resolver) -> String {
    let text = match resolver {
        Resolver::Text { text } => text.clone(),
        Resolver::Pick { template, pool } => {
            template.replacen(PLACEHOLDER, &format!("<{}: {}>", pool.name, pool.len()), 1)
        }
        Resolver::Dice { template, dice } => template.replacen(PLACEHOLDER, &dice.to_string(), 1),
        Resolver::OneOf { options } => format!("one of {} options", options.len()),
        Resolver::Joined { pool, .. } => format!("all of <{}>", pool.name),
    };
    truncate(&text.replace('\n', " "), 60)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars - 3).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}
