//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, GenerateArgs, OutputFormat};
use crate::config::{load_config, EntityConfig, ProjectConfig};
use crate::error::{Error, Result};
use crate::generator::{GeneratedInterfaces, GeneratorOptions, InterfaceGenerator};
use crate::loader::{load_samples, split_top_level_arrays};
use crate::output::{write_interfaces, OutputTarget, WriteReport};
use crate::schema::ConflictPolicy;
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Generate(args) => self.generate(args),
            Commands::Run { config, entity } => self.run_config(config, entity.as_deref()),
            Commands::Validate { config } => self.validate(config),
        }
    }

    /// Generate one entity from sample files given on the command line
    fn generate(&self, args: &GenerateArgs) -> Result<()> {
        let mut variations = Vec::new();
        for path in &args.samples {
            variations.extend(load_samples(path)?);
        }
        if args.split_arrays {
            variations = split_top_level_arrays(variations);
        }

        let mut options = GeneratorOptions::new();
        if let Some(header) = &args.header {
            options = options.with_header(header.clone());
        }
        if args.strict_shapes {
            options = options.with_conflict_policy(ConflictPolicy::Reject);
        }

        let output = InterfaceGenerator::new(&args.name)
            .with_options(options)
            .with_variations(variations)
            .generate()?;

        match args.format {
            OutputFormat::Json => {
                println!("{}", output.to_json_pretty()?);
            }
            OutputFormat::Ts if args.stdout => {
                print!("{}", output.render());
            }
            OutputFormat::Ts => {
                let mut target = OutputTarget::new(&args.output).with_backup(args.backup);
                if let Some(file_name) = &args.file_name {
                    target = target.with_file_name(file_name.clone());
                }
                let report = write_interfaces(&target, &args.name, &output.render())?;
                print_report(&output, &report);
            }
        }

        Ok(())
    }

    /// Generate every entity in a project config
    fn run_config(&self, path: &Path, only: Option<&str>) -> Result<()> {
        let config = load_config(path)?;

        let entities: Vec<&EntityConfig> = match only {
            Some(name) => vec![config
                .entity(name)
                .ok_or_else(|| Error::config(format!("Entity '{name}' not found in config")))?],
            None => config.entities.iter().collect(),
        };

        for entity in entities {
            let (output, report) = generate_entity(&config, entity)?;
            print_report(&output, &report);
        }

        Ok(())
    }

    /// Validate a project config and load its samples
    fn validate(&self, path: &Path) -> Result<()> {
        let config = load_config(path)?;

        for entity in &config.entities {
            let variations = entity.load_variations()?;
            if variations.is_empty() {
                return Err(Error::no_sample_data(&entity.name));
            }
            let target = config.target_for(entity).resolve_path(&entity.name)?;
            println!(
                "✓ {}: {} sample(s) -> {}",
                entity.name,
                variations.len(),
                target.display()
            );
        }

        println!("✓ Config is valid ({} entities)", config.entities.len());
        Ok(())
    }
}

/// Generate and write one entity from a project config
pub fn generate_entity(
    config: &ProjectConfig,
    entity: &EntityConfig,
) -> Result<(GeneratedInterfaces, WriteReport)> {
    let output = InterfaceGenerator::new(&entity.name)
        .with_options(config.generator_options())
        .with_variations(entity.load_variations()?)
        .generate()?;

    let report = write_interfaces(&config.target_for(entity), &entity.name, &output.render())?;
    Ok((output, report))
}

fn print_report(output: &GeneratedInterfaces, report: &WriteReport) {
    println!(
        "Generated {} interface(s) for {} in {}",
        output.declarations.len(),
        output.entity,
        report.path.display()
    );
    if let Some(backup) = &report.backup {
        println!("  previous file saved as {}", backup.display());
    }
    for diagnostic in &output.diagnostics {
        eprintln!("  warning: {diagnostic}");
    }
}
