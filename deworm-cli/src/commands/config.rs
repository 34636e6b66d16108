use anyhow::Result;
use deworm_core::config::DewormConfig;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let config_path = DewormConfig::config_path()?;

    if !config_path.exists() {
        DewormConfig::create_default_config(&config_path)?;
        println!("{}", format!("Created {}", config_path.display()).green());
    }

    let config = DewormConfig::load_from(&config_path)?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Exports:    {}", config.output_dir().display());
    println!(
        "  Timezone:   {}",
        config.timezone.as_deref().unwrap_or("(system)")
    );

    Ok(())
}
