use std::path::PathBuf;

use clap::Subcommand;
use tomata_core::SessionConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show {
        /// Config file path (defaults to ~/.config/tomata/config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the config file path
    Path,
    /// Write a config file populated with the defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show { config } => {
            let config = match &config {
                Some(path) => SessionConfig::load(path)?,
                None => SessionConfig::load_default()?,
            };
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => match SessionConfig::default_path() {
            Some(path) => println!("{}", path.display()),
            None => return Err("no config directory available on this platform".into()),
        },
        ConfigAction::Init { force } => {
            let path = SessionConfig::default_path()
                .ok_or("no config directory available on this platform")?;
            if path.exists() && !force {
                return Err(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )
                .into());
            }
            SessionConfig::default().save(&path)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}
