// ABOUTME: Main entry point for the tana-deck program.
// ABOUTME: Provides CLI interface that builds the Tana Market deck and writes it to disk.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tana_deck::{Config, Deck, TANA_MARKET};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path of the PPTX file to write
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Document title stored in the file properties
    #[arg(long)]
    title: Option<String>,

    /// Document author stored in the file properties
    #[arg(long)]
    author: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the slide titles without writing a file
    Outline,
}

fn generate(cli: &Cli) -> anyhow::Result<PathBuf> {
    let mut config = Config::from_env()?;
    if let Some(output) = &cli.output {
        config.output = output.clone();
    }
    if let Some(title) = &cli.title {
        config.title = title.clone();
    }
    if let Some(author) = &cli.author {
        config.author = author.clone();
    }
    config.validate()?;

    let deck = Deck::tana_market()?;
    tana_deck::write_pptx(&deck, &config.output, &config.package_props())?;
    Ok(config.output)
}

fn outline() {
    for (i, record) in TANA_MARKET.iter().enumerate() {
        let kind = tana_deck::deck::slide_kind(i);
        println!(
            "{:>2}. [{}] {} ({} points)",
            i + 1,
            kind,
            record.title,
            record.points.len()
        );
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Outline) => outline(),
        None => match generate(&cli) {
            Ok(path) => println!("Successfully generated {}", path.display()),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}
