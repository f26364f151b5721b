pub mod check;
pub mod export;
pub mod lookup;
pub mod roll;
pub mod run;
pub mod table;

use std::path::Path;

use surge_table::{RangeTable, load_table, wild_magic_table};

/// Load the table from a file, or build the built-in one.
///
/// Any validation failure aborts the command before it serves a roll.
fn load(path: Option<&Path>) -> Result<RangeTable, String> {
    match path {
        Some(path) => load_table(path).map_err(|e| format!("{}: {e}", path.display())),
        None => wild_magic_table().map_err(|e| format!("built-in table is invalid: {e}")),
    }
}
