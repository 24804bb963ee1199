use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "app-bundler")]
#[command(about = "Assemble offline-installable application bundles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the bundle and compress it into a zip archive
    Build {
        /// Source checkout to package
        #[arg(long, default_value = ".")]
        source: PathBuf,

        /// Staging directory; the archive is written next to it
        #[arg(short, long, default_value = "./app-bundle")]
        output: PathBuf,

        /// Version string stamped into the bundle
        #[arg(long)]
        version: Option<String>,

        /// Skip the interactive version prompt
        #[arg(long)]
        no_prompt: bool,
    },
    /// Verify the source tree has everything the bundle needs
    Check {
        /// Source checkout to check
        #[arg(long, default_value = ".")]
        source: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            source,
            output,
            version,
            no_prompt,
        } => {
            match app_bundler::commands::build::run(&source, &output, version.as_deref(), no_prompt)
            {
                Ok(()) => {}
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            }
        }
        Commands::Check { source } => match app_bundler::commands::check::run(&source) {
            Ok(()) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
    }
}
