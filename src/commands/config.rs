//! Config command - load settings through the shared configuration manager

use oop_patterns::adapters::ConfigManager;
use oop_patterns::config::AppConfig;
use oop_patterns::output::{ConfigReport, OutputMode};

/// Load a JSON file and print the setting selected by `keys`
///
/// Falls back to `config_manager.default_file` from the global config when
/// no file is given.
pub fn config(
    file: Option<&str>,
    keys: &[String],
    app_config: &AppConfig,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let Some(file) = file.or(app_config.config_manager.default_file.as_deref()) else {
        anyhow::bail!(
            "no configuration file given. Use --file or set config_manager.default_file"
        );
    };

    // Two lookups, one manager
    let loader = ConfigManager::instance();
    let reader = ConfigManager::instance();
    let same_instance = std::ptr::eq(loader, reader);
    log::debug!("configuration manager lookups share an instance: {same_instance}");

    loader.load_config(file)?;
    let value = reader.get_setting(keys)?;

    let report = ConfigReport {
        file: file.to_string(),
        same_instance,
        keys: keys.to_vec(),
        value,
    };
    report.render(output_mode);
    Ok(())
}
