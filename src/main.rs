use anyhow::Result;
use clap::Parser;
use classbook::cli::{Cli, CliHandler};
use classbook::config::AppConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configuration decides the log level, so load it before tracing is up
    let config = AppConfig::load(&cli.config_path()?).await?;
    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        config.log_level()?
    };

    // Logs go to stderr so prompts on stdout stay readable
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let handler = CliHandler::new(config);
    handler.handle_command(cli.command())?;

    Ok(())
}
