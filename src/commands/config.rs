//! Config subcommands handler

use std::path::Path;

use anyhow::{bail, Result};

use chatmd::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write the default configuration to `path` (or the default location).
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn handle_init(path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save_to(&config_path)?;
    println!("Config file created: {}", config_path.display());
    Ok(())
}
