#![forbid(unsafe_code)]

use crate::convert::convert_file;
use crate::discover::{evaluate_png_files, traversal_root};

use std::ops::Not;
use std::path::PathBuf;
use std::process::ExitCode;

mod convert;
mod discover;
mod encode;
mod mode;
mod report;
mod statistics;

pub use crate::report::summary;
pub use crate::statistics::Statistics;

pub const DEFAULT_DIRECTORY: &str = "photos";

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub directory: PathBuf,
    pub delete_original: bool,
}

/// Converts every PNG below the directory and prints progress plus a summary.
/// Individual failures are reported and skipped, they never stop the run.
pub fn convert_images(options: &ConvertOptions) -> Statistics {
    let mut statistics = Statistics::new();

    if traversal_root(&options.directory).exists().not() {
        println!("{}", report::directory_missing(&options.directory));
        return statistics;
    }

    println!("{}", report::conversion_started(&options.directory));

    let Some((paths, errors)) = evaluate_png_files(&options.directory) else {
        return statistics;
    };

    if errors.is_empty().not() {
        log::warn!(
            "Some paths below '{}' could not be read and were left out. \
            Make sure you have the permissions for these paths and symlinks are not broken.",
            options.directory.display()
        );

        for error in errors.iter() {
            log::warn!("{}", error);
        }
    }

    for path in paths {
        convert_file(&path, options.delete_original, &mut statistics);
    }

    println!("{}", report::summary(&statistics));
    log::debug!(
        "Skipped files: {}, failed files: {}",
        statistics.skipped_files,
        statistics.failed_files
    );

    statistics
}

/// Runs a conversion for the command line. Failures are only reported on the console, so this always succeeds.
pub fn run(options: ConvertOptions) -> ExitCode {
    convert_images(&options);

    ExitCode::SUCCESS
}
