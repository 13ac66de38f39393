use std::path::PathBuf;

use anyhow::{Context, Result};
use carenav_infrastructure::ConfigService;

pub fn service(path: Option<PathBuf>) -> Result<ConfigService> {
    match path {
        Some(path) => Ok(ConfigService::with_path(path)),
        None => ConfigService::new().context("Failed to resolve the config directory"),
    }
}

pub fn path(service: &ConfigService) {
    println!("{}", service.path().display());
}

pub fn show(service: &ConfigService) -> Result<()> {
    let config = service
        .load()
        .with_context(|| format!("Failed to load {}", service.path().display()))?;
    let rendered = toml::to_string_pretty(&config).context("Failed to render config")?;
    print!("{}", rendered);
    Ok(())
}
