use std::path::Path;

use surge_dice::SeededSource;

pub fn run(roll: i64, seed: Option<u64>, table: Option<&Path>) -> Result<(), String> {
    let table = super::load(table)?;
    let source = SeededSource::new(seed);

    match table.entry_for(roll) {
        Some(entry) => println!("  {} [{}]", entry.range, entry.resolver.kind()),
        None => println!("  {roll} is outside {}", table.domain()),
    }
    println!("{}", table.lookup(roll, &source));

    Ok(())
}
