use anyhow::Result;
use carenav_core::signal::SignalTable;
use carenav_infrastructure::ConfigService;
use serde_json::json;

/// Prints the signal decisions for `message` as JSON.
pub fn run(config: &ConfigService, message: &str) -> Result<()> {
    let config = config.load()?;
    let table = SignalTable::default()
        .with_location_patterns(&config.signals.extra_location_patterns)?;

    let report = json!({
        "signals": table.signals(message),
        "requires_location": table.requires_location(message),
        "list_reference": table.parse_list_reference(message),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
