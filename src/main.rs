use clap::{Parser, Subcommand};
use diary_book::config::BookConfig;
use diary_book::types::Book;
use diary_book::{collect, config, output, render};
use std::error::Error;
use std::fs;
use std::path::PathBuf;

/// Shared input flags for commands that collect entries.
#[derive(clap::Args, Clone)]
struct InputArgs {
    /// Entry files (shell-expanded globs like diary/*/*.txt)
    paths: Vec<PathBuf>,

    /// Diary root directory to scan for entry files instead of, or in
    /// addition to, explicit paths
    #[arg(long)]
    source: Option<PathBuf>,
}

#[derive(Parser)]
#[command(name = "diary-book")]
#[command(about = "LaTeX book generator for plain-text diaries")]
#[command(long_about = "\
LaTeX book generator for plain-text diaries

Your filesystem is the data source. Folders become chapters, text files
become sections, and file names decide the order.

Content structure:

  diary/
  ├── config.toml                  # Book config (optional)
  ├── diary_alps/                  # Chapter folder → chapter \"Alps\"
  │   ├── 2023_01_01.txt           # Entry → section \"2023_01_01\"
  │   └── 2023_01_02.txt
  ├── diary_long_example/          # → chapter \"Long Example\"
  │   └── 2023_02_01.txt
  └── notes/                       # No prefix → chapter \"notes\"
      └── 2023_03_01.txt

Entries sort by file name inside each chapter and chapters sort by
derived title, so date-named files render chronologically regardless of
shell glob order.

Run 'diary-book gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: collect entries and write the LaTeX book
    Build {
        #[command(flatten)]
        input: InputArgs,

        /// Destination .tex file (prints to stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Custom preamble file replacing the built-in front matter
        #[arg(long)]
        preamble: Option<PathBuf>,
    },
    /// Validate entries and show the collected structure without writing
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Show the collected structure; --json prints the raw manifest
    Scan {
        #[command(flatten)]
        input: InputArgs,

        /// Print the collected book as pretty JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            input,
            output,
            preamble,
        } => {
            let (book, book_config) = collect_input(&input)?;
            let custom_preamble = match &preamble {
                Some(path) => Some(fs::read_to_string(path).map_err(|e| {
                    format!("failed to read preamble {}: {e}", path.display())
                })?),
                None => None,
            };
            let tex = render::render(&book, &book_config, custom_preamble.as_deref());
            match &output {
                Some(dest) => {
                    fs::write(dest, &tex)
                        .map_err(|e| format!("failed to write {}: {e}", dest.display()))?;
                    println!("{}", output::format_build_summary(&book, Some(dest.as_path())));
                }
                None => print!("{tex}"),
            }
        }
        Command::Check { input } => {
            let (book, _) = collect_input(&input)?;
            output::print_scan_output(&book);
            println!("==> Content is valid");
        }
        Command::Scan { input, json } => {
            let (book, _) = collect_input(&input)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&book)?);
            } else {
                output::print_scan_output(&book);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load config, resolve the input path list, and collect the book.
///
/// Config comes from the `--source` root when given, the working
/// directory otherwise.
fn collect_input(input: &InputArgs) -> Result<(Book, BookConfig), Box<dyn Error>> {
    let config_root = input
        .source
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let book_config = config::load_config(&config_root)?;

    let mut paths = input.paths.clone();
    if let Some(source) = &input.source {
        paths.extend(collect::discover(source, &book_config)?);
    }
    if paths.is_empty() {
        return Err("no input files (pass entry paths or --source <dir>)".into());
    }

    let book = collect::collect(&paths, &book_config)?;
    Ok((book, book_config))
}
