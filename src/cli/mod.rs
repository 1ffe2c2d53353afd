pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, DefinitionArgs, ResolveArgs, TypesArgs, Verbosity,
};
