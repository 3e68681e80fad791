// ABOUTME: Main entry point for the pitchdeck program.
// ABOUTME: Provides CLI interface for presenting and exporting the deck.

use clap::{Args, Parser, Subcommand};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the interactive deck viewer
    Present(PresentArgs),

    /// Export the deck to a PPTX document
    Export,
}

#[derive(Args)]
struct PresentArgs {
    /// Port for the viewer page (the control channel uses the next port up)
    #[arg(short, long)]
    port: Option<u16>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = pitchdeck::Config::from_env();

    let slides = pitchdeck::catalog();
    pitchdeck::catalog::validate(slides)?;
    let state = Arc::new(Mutex::new(pitchdeck::ViewerState::new(slides.len())));

    let result = match &cli.command {
        Some(Commands::Present(args)) => {
            println!("Starting the deck viewer...");
            pitchdeck::serve(slides, state, config.get_serve_config(args.port))
        }
        Some(Commands::Export) => {
            println!("Exporting the deck...");
            let output = PathBuf::from(pitchdeck::EXPORT_FILE_NAME);
            pitchdeck::utils::validate_directory_writable(&PathBuf::from("."))?;
            pitchdeck::export_deck(slides, &state, &config.get_export_config(), &output).map(
                |path| {
                    println!("Deck exported to {:?}", path);
                },
            )
        }
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
