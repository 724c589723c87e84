//! CLI administration tool for short-it.
//!
//! Inspects the link configuration without starting the server.
//!
//! # Usage
//!
//! ```bash
//! # Validate the document and show what it compiles to
//! cargo run --bin admin -- check
//!
//! # Print every compiled key
//! cargo run --bin admin -- list
//!
//! # Resolve a request the way the server would
//! cargo run --bin admin -- resolve short-it gh
//!
//! # Show the built-in aliases of a link type
//! cargo run --bin admin -- expand rtd
//!
//! # Write a fresh default document
//! cargo run --bin admin -- init
//! ```
//!
//! # Environment Variables
//!
//! - `CONFIG_PATH` (optional): link configuration document, overridden by `--config`

use short_it::application::services::ConfigService;
use short_it::application::services::redirect_service::{
    MULTI_LINK_NO_TYPE, SINGLE_LINK_WITH_TYPE,
};
use short_it::config::DEFAULT_CONFIG_PATH;
use short_it::domain::aliases::builtin_aliases;
use short_it::domain::entities::LinkConfig;
use short_it::domain::resolution::Outcome;
use short_it::domain::table::{CompiledLinks, CompiledTable};
use short_it::infrastructure::persistence::YamlConfigRepository;
use short_it::utils::normalize::normalize_segment;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing short-it.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Link configuration document
    #[arg(short, long, env = "CONFIG_PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Validate the document and summarize the compiled table
    Check,

    /// List every compiled key and its destinations
    List,

    /// Resolve a request like the server does
    Resolve {
        /// Project or simple link name
        project: String,

        /// Link type (omit for simple links and single-link projects)
        link_type: Option<String>,
    },

    /// Show the built-in aliases of a link type
    Expand {
        /// Link type name, e.g. "gh" or "rtd"
        link_type: String,
    },

    /// Write the default document
    Init {
        /// Skip confirmation prompt when the file exists
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let repository = Arc::new(YamlConfigRepository::new(cli.config.clone()));
    let service = ConfigService::new(repository);

    match cli.command {
        Commands::Check => {
            let config = load(&service).await?;
            check(&config, &cli.config);
        }
        Commands::List => {
            let config = load(&service).await?;
            list(&CompiledTable::from_config(&config));
        }
        Commands::Resolve { project, link_type } => {
            let config = load(&service).await?;
            resolve(
                &CompiledTable::from_config(&config),
                &project,
                link_type.as_deref(),
            );
        }
        Commands::Expand { link_type } => expand(&link_type),
        Commands::Init { yes } => init(&service, &cli.config, yes).await?,
    }

    Ok(())
}

/// Loads the document and applies built-in aliases, without writing it back.
async fn load(service: &ConfigService<YamlConfigRepository>) -> Result<LinkConfig> {
    let mut config = service
        .load()
        .await
        .context("Failed to load link configuration")?;
    config.resolve_builtin_aliases();
    Ok(config)
}

/// Prints warnings and a summary of the compiled table.
fn check(config: &LinkConfig, path: &std::path::Path) {
    println!("{}", "🔍 Config Check".bright_blue().bold());
    println!();
    println!("  File:     {}", path.display().to_string().cyan());
    println!(
        "  Domain:   {}",
        config.domain.as_deref().unwrap_or("(not set)").cyan()
    );
    println!("  Projects: {}", config.projects.len().to_string().bright_white());
    println!("  Simple:   {}", config.simple.len().to_string().bright_white());
    println!();

    let summary = CompiledTable::from_config(config).summary();
    println!("{}", "Compiled table:".bright_white().bold());
    println!("  Keys:        {}", summary.keys);
    println!("  Single-link: {}", summary.single);
    println!("  Multi-link:  {}", summary.multiple);
    println!("  Aliases:     {}", summary.aliases);
    println!();

    let warnings = config.warnings();
    if warnings.is_empty() {
        println!("{}", "✅ No problems found".green().bold());
    } else {
        println!(
            "{}",
            format!("⚠️  {} warning(s):", warnings.len()).yellow().bold()
        );
        for warning in &warnings {
            println!("  - {}", warning.yellow());
        }
    }
    println!();
}

/// Prints every key of the compiled table.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   blog  → https://blog.example.com
///   short-it
///     github, gh, git, src, sources, source, vcs → https://github.com/example/short-it
///     docs, wiki, documentation                  → https://short-it.readthedocs.io
/// ```
fn list(table: &CompiledTable) {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    if table.is_empty() {
        println!("{}", "  No links configured".yellow());
        println!();
        return;
    }

    for (key, links) in table.iter() {
        match links {
            CompiledLinks::Single(destination) => {
                println!("  {} → {}", key.cyan(), destination.bright_white());
            }
            CompiledLinks::Multiple(aliases) => {
                println!("  {}", key.cyan().bold());
                for (destination, names) in group_by_destination(aliases) {
                    println!(
                        "    {} → {}",
                        names.join(", ").bright_black(),
                        destination.bright_white()
                    );
                }
            }
        }
    }

    println!();
    println!("  Total: {}", table.len().to_string().bright_white().bold());
    println!();
}

/// Groups aliases by destination, keeping first-seen order.
fn group_by_destination(
    aliases: &indexmap::IndexMap<String, String>,
) -> Vec<(&str, Vec<&str>)> {
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();

    for (alias, destination) in aliases {
        match groups
            .iter()
            .position(|(known, _)| *known == destination.as_str())
        {
            Some(index) => groups[index].1.push(alias.as_str()),
            None => groups.push((destination.as_str(), vec![alias.as_str()])),
        }
    }

    groups
}

/// Resolves a request and prints the outcome.
fn resolve(table: &CompiledTable, project: &str, link_type: Option<&str>) {
    let project = normalize_segment(project);
    let link_type = link_type.map(normalize_segment);

    match table.resolve(&project, link_type.as_deref()) {
        Outcome::Found(destination) => {
            println!("{} {}", "✅ 307 →".green().bold(), destination.bright_white());
        }
        Outcome::NotFound => {
            println!("{}", "❌ 404 Not Found".red().bold());
        }
        Outcome::AmbiguousSingleLinkWithType => {
            println!(
                "{} {}",
                "⚠️  400".yellow().bold(),
                SINGLE_LINK_WITH_TYPE.yellow()
            );
        }
        Outcome::AmbiguousMultiLinkNoType => {
            println!(
                "{} {}",
                "⚠️  400".yellow().bold(),
                MULTI_LINK_NO_TYPE.yellow()
            );
        }
    }
}

/// Prints the built-in alias group of a link type.
fn expand(link_type: &str) {
    let link_type = normalize_segment(link_type);

    match builtin_aliases(&link_type) {
        Some(group) => {
            println!("{} {}", link_type.cyan().bold(), "expands to:".bright_white());
            println!("  {}", group.join(", "));
        }
        None => {
            println!(
                "{}",
                format!("'{link_type}' has no built-in aliases").yellow()
            );
        }
    }
}

/// Writes the default document, asking before overwriting.
async fn init(
    service: &ConfigService<YamlConfigRepository>,
    path: &std::path::Path,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "📝 Initialize Config".bright_blue().bold());
    println!();

    if path.exists() && !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite it?", path.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .reset()
        .await
        .context("Failed to write link configuration")?;

    println!(
        "{} {}",
        "✅ Wrote default config to".green().bold(),
        path.display().to_string().cyan()
    );
    println!();

    Ok(())
}
