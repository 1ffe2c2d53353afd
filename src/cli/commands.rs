use crate::app;
use crate::cli::args::{DefinitionArgs, ResolveArgs, TypesArgs};
use crate::config::Config;
use crate::resolver::{ClassResolver, ConfigResolver};
use crate::runtime::definition::ClassDefinition;
use crate::runtime::factory::MockSpec;
use crate::runtime::types::TypeRegistry;
use crate::ui::formatter::Formatter;
use miette::Result;
use std::path::Path;

fn print_info(message: impl AsRef<str>) {
    println!("{}", Formatter::info(message));
}

fn print_success(message: impl AsRef<str>) {
    println!("{}", Formatter::success(message));
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

/// Registry seeded with base host types plus the config's `[[types]]`.
fn host_registry(config: &Config) -> Result<TypeRegistry> {
    let registry = TypeRegistry::with_host_types();
    app::declare_host_types(config, &registry)?;
    Ok(registry)
}

/// Execute the resolve command
pub fn resolve(args: ResolveArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let resolver = ConfigResolver::from_config(&config.framework);

    let class_name = if args.helper {
        resolver.helper_class_name(&args.short_name)?
    } else {
        resolver.model_class_name(&args.short_name)?
    };

    print_success(Formatter::format_resolution(&args.short_name, &class_name));
    Ok(())
}

/// Execute the definition command
pub fn definition(args: DefinitionArgs) -> Result<()> {
    let mut spec = MockSpec::new(args.target).extends(args.extends);
    if args.no_intercept {
        spec = spec.without_interception();
    }

    let config = load_config(args.config.as_deref())?;
    let registry = host_registry(&config)?;
    let definition = ClassDefinition::compose(&spec)?;
    let descriptor = registry.define(&definition)?;

    println!("{}", definition);
    print_info(format!("is-a: {}", descriptor.ancestry()));
    Ok(())
}

/// Execute the types command
pub fn types(args: TypesArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let registry = host_registry(&config)?;

    for descriptor in registry.descriptors() {
        println!("{}", Formatter::format_type(&descriptor));
    }
    Ok(())
}
