use clap::{Parser, Subcommand};
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;

use iba_import::{Pipeline, Settings};

#[derive(Parser)]
#[command(name = "iba-import", version, about = "Import IBA cocktail recipes as Markdown")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write one Markdown document per cocktail into DIRECTORY
    Build {
        directory: PathBuf,
        /// Only build the cocktail with this name
        name: Option<String>,
    },
    /// Print the scraped cocktails as JSON
    Json {
        /// Only print the cocktail with this name
        name: Option<String>,
    },
}

fn run(cli: Cli) -> iba_import::Result<()> {
    let pipeline = Pipeline::builder().settings(Settings::load()?).build()?;

    match cli.cmd {
        Command::Build { directory, name } => {
            let written = pipeline.build(&directory, name.as_deref())?;
            for path in written {
                println!("{}", path.display());
            }
        }
        Command::Json { name } => {
            println!("{}", pipeline.to_json(name.as_deref())?);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
