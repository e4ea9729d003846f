//! html-stitcher CLI
//!
//! Usage:
//!   html-stitcher [OPTIONS] <INPUT>
//!
//! Options:
//!   -o, --output <PATH>        File or directory to write outputs to
//!   -r, --root-glob <GLOB>     Root file pattern for directory mode
//!   -p, --partial-glob <GLOB>  Partial candidate pattern
//!   -c, --config <FILE>        TOML config file with default patterns
//!   -v, --verbose              Enable verbose output
//!   -h, --help                 Print help

use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use html_stitcher::{
    discover, render, FileInfo, FileSink, OutputSink, StitchConfig, StringSink,
};

#[derive(Parser)]
#[command(name = "html-stitcher")]
#[command(about = "Combine multiple HTML files", version)]
struct Cli {
    /// Root HTML file, or directory of root HTML files, to build
    input: PathBuf,

    /// Path of the file or directory to write outputs to
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Glob pattern selecting root files in directory mode
    #[arg(short, long)]
    root_glob: Option<String>,

    /// Glob pattern selecting partial candidate files
    #[arg(short, long)]
    partial_glob: Option<String>,

    /// TOML config file holding default glob patterns
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Config file supplies defaults; CLI flags win over both
    let mut config = match &cli.config {
        Some(path) => match StitchConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => StitchConfig::default(),
    };
    if let Some(root_glob) = &cli.root_glob {
        config.root_glob = root_glob.clone();
    }
    if let Some(partial_glob) = &cli.partial_glob {
        config.partial_glob = partial_glob.clone();
    }

    if !cli.input.exists() {
        eprintln!("Input path does not exist: {}", cli.input.display());
        std::process::exit(1);
    }

    let run_timer = Instant::now();
    let result = if cli.input.is_file() {
        process_file(&cli.input, &config.partial_glob, cli.output.as_deref())
    } else if cli.input.is_dir() {
        match &cli.output {
            Some(output) => process_directory(&cli.input, &config, output),
            None => {
                eprintln!(
                    "Output directory required for batch mode (--output): {}",
                    cli.input.display()
                );
                std::process::exit(1);
            }
        }
    } else {
        eprintln!(
            "Input path is not a file or directory: {}",
            cli.input.display()
        );
        std::process::exit(1);
    };

    match result {
        Ok(()) => {
            info!("finished in {}ms", run_timer.elapsed().as_millis());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("html_stitcher=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Build a single root file. Partial candidates come from the root's own
/// directory; output goes to `output` or, absent that, to stdout.
fn process_file(
    input: &Path,
    partial_glob: &str,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let root = FileInfo::new(input)?;
    let parent = root
        .path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let partials = discover(&parent, partial_glob, &[root.path.clone()])?;

    match output {
        Some(path) => {
            let mut sink = FileSink::create(path)?;
            render(&root, &partials, &mut sink)?;
            sink.close()?;
        }
        None => {
            let mut sink = StringSink::new();
            render(&root, &partials, &mut sink)?;
            sink.close()?;
            print!("{}", sink.as_str());
        }
    }
    Ok(())
}

/// Build every root file under `input_dir` into `output_dir`, preserving
/// each root's relative path.
fn process_directory(
    input_dir: &Path,
    config: &StitchConfig,
    output_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all(output_dir)?;
    let input_dir = input_dir.canonicalize()?;
    let output_dir = output_dir.canonicalize()?;

    let roots = discover(&input_dir, &config.root_glob, &[])?;
    let root_paths: Vec<PathBuf> = roots.iter().map(|root| root.path.clone()).collect();
    // Root files are not eligible as partials of each other
    let partials = discover(&input_dir, &config.partial_glob, &root_paths)?;

    for root in &roots {
        let timer = Instant::now();
        let relative = root.path.strip_prefix(&input_dir).unwrap_or(&root.path);
        let mut output_path = output_dir.join(relative);
        if output_path == root.path {
            let mut clashing = output_path.into_os_string();
            clashing.push(".out");
            output_path = clashing.into();
        }

        let mut sink = FileSink::create(&output_path)?;
        render(root, &partials, &mut sink)?;
        sink.close()?;
        println!(
            "{} => {} {}ms",
            root.path.display(),
            output_path.display(),
            timer.elapsed().as_millis()
        );
    }
    Ok(())
}
