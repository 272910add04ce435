//! Quote Banner CLI
//!
//! Usage:
//!   quote-banner [OPTIONS]
//!
//! Options:
//!   -c, --config <FILE>     Configuration file (TOML format)
//!   -q, --quotes <FILE>     Quote store JSON file
//!   -a, --assets-dir <DIR>  Directory holding the themed image pairs
//!   -i, --image <NAME>      Image base name (expects <name>_dark/<name>_light)
//!   -o, --output <FILE>     Output SVG path
//!       --stdout            Print the SVG instead of writing a file
//!   -h, --help              Print help

use std::path::PathBuf;

use clap::Parser;

use quote_banner::{generate, output, BannerConfig};

#[derive(Parser)]
#[command(name = "quote-banner")]
#[command(about = "Theme-aware SVG quote banner generator for READMEs")]
struct Cli {
    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Quote store JSON file
    #[arg(short, long)]
    quotes: Option<PathBuf>,

    /// Directory holding the themed image pairs
    #[arg(short, long)]
    assets_dir: Option<PathBuf>,

    /// Image base name (expects <name>_dark.<ext> and <name>_light.<ext>)
    #[arg(short, long)]
    image: Option<String>,

    /// Output SVG path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the SVG to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config file first, then CLI flags override individual fields
    let mut config = match &cli.config {
        Some(path) => match BannerConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => BannerConfig::default(),
    };

    if let Some(quotes) = cli.quotes {
        config = config.with_quotes(quotes);
    }
    if let Some(assets_dir) = cli.assets_dir {
        config = config.with_assets_dir(assets_dir);
    }
    if let Some(image) = cli.image {
        config = config.with_image(image);
    }
    if let Some(out) = cli.output {
        config = config.with_output(out);
    }

    // A missing image is the single hard-failure path; everything else has
    // already been recovered inside the pipeline.
    let svg = match generate(&config) {
        Ok(svg) => svg,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.stdout {
        println!("{}", svg);
    } else {
        // Write failures are reported by the writer and do not change the
        // exit status
        output::save_svg(&config.output, &svg);
    }
}
