use std::path::Path;

pub fn run(output: Option<&Path>) -> Result<(), String> {
    let table = super::load(None)?;
    let content = table
        .to_def()
        .to_json_pretty()
        .map_err(|e| format!("JSON serialization error: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}
