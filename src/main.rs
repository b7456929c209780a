use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tech_catalog::{Catalog, Technology, VERSION};

#[derive(Parser)]
#[command(name = "tech-catalog")]
#[command(version = VERSION, about = "Inspect and edit a technology catalog JSON file.")]
struct CommandLine {
    /// Catalog JSON file
    #[arg(short, long, global = true, env = "TECH_CATALOG_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the catalog
    #[command(alias = "s")]
    Show,
    /// Write a new catalog with no technologies
    Init {
        #[arg(long = "stack-version")]
        stack_version: String,
        #[arg(long)]
        description: String,
    },
    /// Append a technology
    #[command(alias = "a")]
    Add { name: String, description: String },
    /// Replace the description of the first technology with this name (any case)
    #[command(alias = "u")]
    Update { name: String, description: String },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = CommandLine::parse();
    let path = cli
        .file
        .context("No catalog file given (use --file or TECH_CATALOG_FILE)")?;

    match cli.command {
        Commands::Show => run_show(&path),
        Commands::Init {
            stack_version,
            description,
        } => run_init(&path, stack_version, description),
        Commands::Add { name, description } => run_add(&path, name, description),
        Commands::Update { name, description } => run_update(&path, name, description),
    }
}

fn load(path: &Path) -> Result<Catalog> {
    Catalog::read_from_json(path)
        .with_context(|| format!("Failed to load catalog: {}", path.display()))
}

fn save(catalog: &Catalog, path: &Path) -> Result<()> {
    catalog
        .write_to_json(path)
        .with_context(|| format!("Failed to save catalog: {}", path.display()))
}

fn run_show(path: &Path) -> Result<()> {
    let catalog = load(path)?;

    println!("{} (version {})", catalog.description, catalog.version);
    if catalog.technologies.is_empty() {
        println!("  no technologies");
    }
    for tech in &catalog.technologies {
        println!("  - {}", tech);
    }
    Ok(())
}

fn run_init(path: &Path, version: String, description: String) -> Result<()> {
    let catalog = Catalog::new(version, description, Vec::new());
    save(&catalog, path)?;

    tracing::info!("Created catalog at {}", path.display());
    Ok(())
}

fn run_add(path: &Path, name: String, description: String) -> Result<()> {
    let mut catalog = load(path)?;
    catalog.technologies.push(Technology::new(name, description));
    save(&catalog, path)?;

    tracing::info!("Catalog now has {} technologies", catalog.technologies.len());
    Ok(())
}

fn run_update(path: &Path, name: String, description: String) -> Result<()> {
    let mut catalog = load(path)?;
    let candidate = Technology::new(name, description);

    if catalog.update_technology(Some(&candidate)) {
        save(&catalog, path)?;
        tracing::info!("Updated {}", candidate.name);
    } else {
        tracing::warn!("No technology named {} in catalog, nothing changed", candidate.name);
    }
    Ok(())
}
