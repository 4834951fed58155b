use anyhow::Result;
use deckguard_config::Config;
use std::path::Path;

pub fn handle(path: Option<&Path>, force: bool) -> Result<()> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(Config::config_path);

    write_default(&path, force)?;

    println!("✓ Created {}", path.display());
    println!("  Edit [[redaction.rules]] to change what gets redacted");

    Ok(())
}

/// Write the default config, refusing to clobber an existing file unless forced
fn write_default(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save(path)
}
