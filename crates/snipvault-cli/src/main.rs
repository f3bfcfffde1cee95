use clap::Parser;
use eyre::Result;

use snipvault_cli::cli::Cli;
use snipvault_cli::commands;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout().lock();
    match commands::run(cli, &mut stdout).await {
        Err(e) if commands::is_broken_pipe(&e) => Ok(()),
        result => result,
    }
}
