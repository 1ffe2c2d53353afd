use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mage-mock")]
#[command(about = "Inspect mock generation for Magento-style applications", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            return Verbosity::Quiet;
        }
        match self.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Trace,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a short name such as `catalog/product` to its class name
    Resolve(ResolveArgs),

    /// Print the definition generated for a mock type
    Definition(DefinitionArgs),

    /// List host types that mocks can extend
    Types(TypesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Short name to resolve
    pub short_name: String,

    /// Resolve as a helper instead of a model
    #[arg(long)]
    pub helper: bool,

    /// Configuration file (defaults to .mage-mock.toml)
    #[arg(short, long, env = "MAGE_MOCK_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct DefinitionArgs {
    /// Name of the type to generate
    pub target: String,

    /// Parent type to extend
    #[arg(short, long, default_value = "")]
    pub extends: String,

    /// Generate an empty shell without call interception
    #[arg(long)]
    pub no_intercept: bool,

    /// Configuration file declaring extra host types
    #[arg(short, long, env = "MAGE_MOCK_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct TypesArgs {
    /// Configuration file (defaults to .mage-mock.toml)
    #[arg(short, long, env = "MAGE_MOCK_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Log verbosity selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Trace,
}

impl Verbosity {
    pub fn to_log_level(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "debug",
            Verbosity::Trace => "trace",
        }
    }
}
