use clap::{CommandFactory, Parser};
use clap_complete::generate;
use mage_mock::cli::{Cli, Commands, Verbosity};
use mage_mock::ui::formatter::Formatter;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn initialize_tracing(verbosity: Verbosity) {
    let log_level = verbosity.to_log_level();
    let fallback_filter = format!("mage_mock={}", log_level);

    let use_json = std::env::var("MAGE_MOCK_JSON").is_ok();

    if use_json {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| fallback_filter.clone().into()),
            )
            .with(json_layer)
            .init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| fallback_filter.into()),
            )
            .with(fmt_layer)
            .init();
    }
}

fn main() -> miette::Result<()> {
    Formatter::configure_colors_from_env();

    let cli = Cli::parse();
    initialize_tracing(cli.verbosity());

    let result = match cli.command {
        Commands::Resolve(args) => mage_mock::cli::commands::resolve(args),
        Commands::Definition(args) => mage_mock::cli::commands::definition(args),
        Commands::Types(args) => mage_mock::cli::commands::types(args),
        Commands::Completions(args) => {
            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "mage-mock", &mut io::stdout());
            Ok(())
        }
    };

    if let Err(err) = &result {
        eprintln!("{}", Formatter::error(format!("Error: {err}")));
    }
    result
}
