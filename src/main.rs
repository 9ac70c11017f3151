use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use conference_docx::{Error, StructuredPaper};

/// Lay out a structured paper (JSON) as a two-column conference DOCX.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Structured paper JSON (title, authors, abstract, keywords, sections, figures, references)
    paper: PathBuf,

    /// Image file; repeat in figure-index order (first --image is index 0)
    #[arg(short, long = "image", value_name = "FILE")]
    images: Vec<PathBuf>,

    /// Output path [default: derived from the paper title]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log layout progress
    #[arg(short, long)]
    verbose: bool,
}

fn with_path(e: std::io::Error, path: &Path) -> Error {
    Error::Io(std::io::Error::new(e.kind(), format!("{}: {}", e, path.display())))
}

fn read(path: &Path) -> Result<Vec<u8>, Error> {
    std::fs::read(path).map_err(|e| with_path(e, path))
}

fn run(cli: &Cli) -> Result<PathBuf, Error> {
    let json = std::fs::read_to_string(&cli.paper).map_err(|e| with_path(e, &cli.paper))?;
    let paper = StructuredPaper::from_json(&json)?;
    let images = cli.images.iter().map(|p| read(p)).collect::<Result<Vec<_>, _>>()?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(conference_docx::suggested_filename(&paper.title)));
    conference_docx::generate_to_file(&paper, &images, &output)?;
    Ok(output)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(&cli) {
        Ok(output) => {
            println!("{}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
