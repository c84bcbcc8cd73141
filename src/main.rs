use std::path::PathBuf;

use clap::Parser;
use odt2tex::Config;

#[derive(Parser)]
#[command(name = "odt2tex", version)]
#[command(about = "Convert ODT files to LaTeX source files")]
struct Cli {
    /// Input ODT file
    input: PathBuf,

    /// Output directory (created if it does not exist)
    output_dir: PathBuf,

    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every recovered oddity in the document
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let _ = env_logger::builder()
        .filter_module("odt2tex", level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();

    log::info!("ODT2TeX {}", env!("CARGO_PKG_VERSION"));

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error reading {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Config::compiled_default(),
    };

    log::info!(
        "Processing {} to directory {}",
        cli.input.display(),
        cli.output_dir.display()
    );

    match odt2tex::convert_to_dir(&cli.input, &cli.output_dir, &config) {
        Ok(output) => log::info!("Created {}", output.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
