//! Offline slug checking tool.
//!
//! Runs the same canonicalization, content rules and suggestion logic as the
//! service, without starting a server.
//!
//! # Usage
//!
//! ```bash
//! # Show the canonical form of some input
//! cargo run --bin slugctl -- canonicalize "Summer Sale 2025!"
//!
//! # Check input against the prohibited word list
//! cargo run --bin slugctl -- check "adm1n-panel"
//!
//! # Validate against a registry holding the given slugs
//! cargo run --bin slugctl -- suggest promo --taken promo --taken my-promo
//! ```

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

use slug_guard::prelude::*;

/// Offline slug checks for slug-guard.
#[derive(Parser)]
#[command(name = "slugctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical slug for the input
    Canonicalize {
        input: String,
    },

    /// Check the canonical slug against the prohibited word list
    Check {
        input: String,
    },

    /// Validate a slug and print suggestions if it is rejected
    Suggest {
        input: String,

        /// Slugs to treat as already registered
        #[arg(short, long)]
        taken: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Canonicalize { input } => {
            let slug = canonicalize(&input);
            if slug.is_empty() {
                println!("{}", "(empty)".dimmed());
            } else {
                println!("{}", slug.bright_white().bold());
            }
        }
        Commands::Check { input } => handle_check(&input),
        Commands::Suggest { input, taken } => handle_suggest(&input, &taken),
    }

    Ok(())
}

fn handle_check(input: &str) {
    let slug = canonicalize(input);
    let filter = ContentFilter::with_default_words();

    if filter.contains(&slug) {
        println!(
            "{} {}",
            "✗".red().bold(),
            format!("\"{slug}\" contains prohibited content").red()
        );
    } else {
        println!("{} \"{}\" is clean", "✓".green().bold(), slug);
    }
}

fn handle_suggest(input: &str, taken: &[String]) {
    let registry = InMemoryLinkRegistry::with_links(taken.iter().map(|id| {
        ShortLink::new(
            canonicalize(id),
            "https://example.com".to_string(),
            "http://localhost:8080",
        )
    }));
    let service = ValidationService::new(
        Arc::new(registry),
        Arc::new(ContentFilter::with_default_words()),
    );

    match service.validate_slug(input) {
        ValidationResult::Valid => {
            println!(
                "{} \"{}\" is available",
                "✓".green().bold(),
                canonicalize(input)
            );
        }
        ValidationResult::Invalid {
            reason,
            suggestions,
        } => {
            println!("{} {}", "✗".red().bold(), reason.red());
            if suggestions.is_empty() {
                return;
            }
            println!();
            println!("{}", "Suggestions:".bright_blue().bold());
            for suggestion in suggestions {
                println!("  {}", suggestion.bright_green());
            }
        }
    }
}
