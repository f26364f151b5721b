use colored::Colorize;

use surge_dice::{DiceExpr, SeededSource};

pub fn run(notation: &str, seed: Option<u64>) -> Result<(), String> {
    let dice = DiceExpr::parse(notation).map_err(|e| e.to_string())?;
    let source = SeededSource::new(seed);
    let result = dice.pool().roll(&source);

    println!("  {} {result}", format!("{dice}:").bold());
    if dice.count > 1 {
        println!("  highest {}, lowest {}", result.highest(), result.lowest());
    }
    Ok(())
}
