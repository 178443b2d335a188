use std::fs;
use std::io::{self, Read};

use asciipath::{PathError, TraversalOptions};
use facet::Facet;
use facet_args as args;
use tracing_subscriber::EnvFilter;

const BANNER: &str = "#########################################";

/// Follow ASCII line-art paths and print the letters along them
#[derive(Facet, Debug)]
struct Args {
    /// Maze files, processed in order (reads from stdin if none are given)
    #[facet(default, args::positional)]
    inputs: Vec<String>,

    /// Give up after visiting this many cells
    #[facet(default, args::named)]
    max_steps: Option<usize>,

    /// Log traversal details to stderr
    #[facet(args::named, args::short = 'v')]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "asciipath=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Input sources in processing order; `None` stands for stdin
fn sources(inputs: &[String]) -> Vec<Option<&str>> {
    if inputs.is_empty() {
        vec![None]
    } else {
        inputs.iter().map(|path| Some(path.as_str())).collect()
    }
}

fn read_source(source: Option<&str>) -> io::Result<String> {
    match source {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Text printed for one maze: the drawing followed by its outcome
fn report(input: &str, options: &TraversalOptions) -> Result<String, PathError> {
    let outcome = match asciipath::find_path_with_options(input, options)? {
        Some(result) => result.to_string(),
        None => "No path found.".to_string(),
    };
    Ok(format!("{}\n\n{}", input.trim_end(), outcome))
}

fn error_line(name: &str, err: &PathError) -> String {
    format!("{name}: {err}")
}

fn main() {
    let args: Args = match args::from_std_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    init_logging(args.verbose);

    let mut options = TraversalOptions::new();
    if let Some(max_steps) = args.max_steps {
        options = options.with_max_steps(max_steps);
    }

    let mut failed = false;
    for source in sources(&args.inputs) {
        let name = source.unwrap_or("<stdin>");
        tracing::info!(source = name, "following path");

        println!("{BANNER}");
        println!("File: {name}");

        let input = match read_source(source) {
            Ok(input) => input,
            Err(e) => {
                eprintln!("Failed to read {}: {}", name, e);
                failed = true;
                continue;
            }
        };

        match report(&input, &options) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("{}", error_line(name, &e));
                failed = true;
            }
        }
        println!("{BANNER}");
    }

    if failed {
        std::process::exit(1);
    }
}
