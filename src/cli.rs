use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{AppConfig, CONFIG_FILE_NAME};
use crate::console::Console;
use crate::session::{GradeSession, ProfileSession};

/// Classbook - terminal grade analyzer and profile builder
#[derive(Parser)]
#[command(name = "classbook")]
#[command(about = "Student grade analyzer and personal profile builder")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Configuration directory path
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
}

impl Cli {
    /// Path of the configuration file to load
    pub fn config_path(&self) -> Result<PathBuf> {
        let dir = match self.config_dir {
            Some(ref dir) => dir.clone(),
            None => AppConfig::default_dir()
                .ok_or_else(|| anyhow!("Cannot find config directory"))?,
        };
        Ok(dir.join(CONFIG_FILE_NAME))
    }

    /// Subcommand to run, the grade analyzer when none was given
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Grades)
    }
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Interactive student grade analyzer
    Grades,

    /// Build a personal profile from name, birth year and hobbies
    Profile,
}

/// Runs the selected command against the terminal
pub struct CliHandler {
    config: AppConfig,
}

impl CliHandler {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Grades => self.handle_grades(),
            Commands::Profile => self.handle_profile(),
        }
    }

    fn handle_grades(&self) -> Result<()> {
        let mut session = GradeSession::new(Console::stdio());
        session.run()?;
        Ok(())
    }

    fn handle_profile(&self) -> Result<()> {
        let mut session = ProfileSession::new(Console::stdio(), self.config.reference_year());
        if session.run()?.is_none() {
            tracing::info!("Input closed before the profile was complete");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_grades() {
        let cli = Cli::try_parse_from(["classbook"]).unwrap();
        assert_eq!(cli.command(), Commands::Grades);
        assert!(!cli.debug);
    }

    #[test]
    fn test_profile_with_global_flags() {
        let cli =
            Cli::try_parse_from(["classbook", "profile", "--debug", "--config-dir", "/tmp/cb"])
                .unwrap();
        assert_eq!(cli.command(), Commands::Profile);
        assert!(cli.debug);
        assert_eq!(
            cli.config_path().unwrap(),
            PathBuf::from("/tmp/cb").join(CONFIG_FILE_NAME)
        );
    }

    #[test]
    fn test_unknown_command() {
        assert!(Cli::try_parse_from(["classbook", "export"]).is_err());
    }
}
