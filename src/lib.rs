//! coco2yolo: COCO JSON to YOLO label converter.
//!
//! Reads a COCO object-detection annotation file and writes one YOLO
//! label file per annotated image. Each label line is
//! `<class> <cx> <cy> <w> <h>`: a dense zero-based class index followed
//! by the box in normalized center form, printed to six decimal places.
//!
//! # Modules
//!
//! - [`coco`]: COCO JSON document model and loader
//! - [`index`]: per-document lookup tables (image metadata, class indexes)
//! - [`transform`]: annotation conversion and grouping
//! - [`emit`]: YOLO label file writer
//! - [`convert`]: the end-to-end pipeline
//! - [`error`]: error types for coco2yolo operations

pub mod bbox;
pub mod coco;
pub mod convert;
pub mod emit;
pub mod error;
pub mod ids;
pub mod index;
pub mod report;
pub mod transform;

use std::fs;
use std::path::PathBuf;

use clap::Parser;

pub use convert::{convert_file, ConvertOptions};
pub use error::ConvertError;
pub use report::ConversionReport;

/// The coco2yolo CLI application.
#[derive(Parser)]
#[command(name = "coco2yolo")]
#[command(version, author, about)]
struct Cli {
    /// Path to the COCO JSON annotation file.
    #[arg(short = 'j', long)]
    json_path: PathBuf,

    /// Directory the label files are written to (created if missing).
    #[arg(short = 'o', long)]
    output_path: PathBuf,

    /// Also write classes.txt with the class names in index order.
    #[arg(long)]
    classes: bool,

    /// Suppress the conversion summary on stdout.
    #[arg(long)]
    quiet: bool,
}

/// Run the coco2yolo CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), ConvertError> {
    let cli = Cli::parse();

    // The emitter expects the output directory to exist.
    fs::create_dir_all(&cli.output_path)?;

    let opts = ConvertOptions {
        classes_file: cli.classes,
    };
    let report = convert_file(&cli.json_path, &cli.output_path, &opts)?;

    if !cli.quiet {
        print!("{report}");
    }

    Ok(())
}
