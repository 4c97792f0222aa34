#![forbid(unsafe_code)]

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;
use webpify::ConvertOptions;

mod cli;

fn main() -> ExitCode {
    env_logger::builder()
        .format_timestamp(None)
        .format_target(false)
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = cli::WebpifyCli::parse();

    let options = ConvertOptions {
        delete_original: args.delete_original(),
        directory: PathBuf::from(args.directory),
    };

    webpify::run(options)
}
