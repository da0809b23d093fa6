use clap::Parser;
use std::{
    env::{current_dir, split_paths},
    ffi::OsString,
    path::PathBuf,
    process::ExitCode,
};
use tracing_subscriber::EnvFilter;
use wordreader::{ArgumentWordSource, ReaderConfig, WordReader, runtime::config::DEFAULT_INCLUDE_WORD};

/// Read configuration words from the command line, following includes, and print one word per
/// line.
#[derive(Parser, Debug)]
#[command(name = "wordreader", version)]
struct Cli {
    /// The word that includes the file or URL following it.
    #[arg(long, default_value = DEFAULT_INCLUDE_WORD)]
    include_word: String,

    /// Don't treat words starting with '@' as includes.
    #[arg(long)]
    no_include_prefix: bool,

    /// Extra directories searched for relative include paths.  Each value may hold several
    /// directories separated the way the platform separates PATH entries.
    #[arg(long = "search-path", env = "WORDREADER_SEARCH_PATH")]
    search_paths: Vec<OsString>,

    /// Prefix every word with the location it was read from.
    #[arg(long)]
    trace: bool,

    /// The configuration words themselves.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = ReaderConfig::default().with_include_word(Some(cli.include_word));

    if cli.no_include_prefix {
        config = config.with_include_prefix(None);
    }

    for directory in search_path_list(&cli.search_paths) {
        config = config.with_search_path(directory);
    }

    // Relative includes on the command line are relative to where we were started.
    let source = ArgumentWordSource::new(cli.words, current_dir().ok());
    let mut reader = WordReader::with_config(source, config);

    loop {
        match reader.next_word() {
            Ok(Some(word)) if cli.trace => {
                println!("{}: {}", reader.line_location_description(), word)
            }
            Ok(Some(word)) => println!("{}", word),
            Ok(None) => return ExitCode::SUCCESS,

            Err(error) => {
                eprintln!("Error: {}", error);

                for location in reader.failure_trace().iter().skip(1) {
                    eprintln!("  included from {}", location);
                }

                return ExitCode::FAILURE;
            }
        }
    }
}

/// Expand the search path values into individual directories.
fn search_path_list(values: &[OsString]) -> Vec<PathBuf> {
    values
        .iter()
        .flat_map(|value| split_paths(value))
        .filter(|directory| !directory.as_os_str().is_empty())
        .collect()
}
