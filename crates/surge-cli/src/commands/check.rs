use std::path::Path;

pub fn run(path: &Path) -> Result<(), String> {
    let table = super::load(Some(path))?;

    println!("  All checks passed for '{}'.", table.name());
    println!("  {} entries covering {}", table.len(), table.domain());

    Ok(())
}
