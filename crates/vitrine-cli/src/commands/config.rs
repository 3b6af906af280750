use anyhow::Result;

use vitrine_core::AppConfig;

pub fn run(config: &AppConfig) -> Result<()> {
    println!("Config file: {}", AppConfig::config_path().display());
    println!();

    let content = toml::to_string_pretty(config)?;
    println!("{}", content);

    Ok(())
}
