use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This creates the config directory (if missing) and writes the default
/// configuration file with the built-in modes and threshold.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.test)?;

    let cfg = Config::load()?;

    println!("⚙️  Initializing tablecheck…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!(
        "   Modes       : {}",
        cfg.modes
            .iter()
            .map(|m| m.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("   Threshold   : {} min", cfg.threshold_minutes);

    Ok(())
}
