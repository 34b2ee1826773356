// src/main.rs
#![allow(clippy::multiple_crate_versions)]

mod args;
mod presentation;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use file_meta_core::{ExtractOptions, FileMetadataService, config};

use crate::args::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Describes every path; returns `false` if any of them failed.
fn run(args: &Args) -> Result<bool> {
    let options = match &args.config {
        Some(path) => config::load_options(path).with_context(|| format!("loading {}", path.display()))?,
        None => ExtractOptions::default(),
    };
    let options = args.apply(options);
    log::debug!("extract options: {options:?}");

    let service = FileMetadataService::new(options);
    let mut all_ok = true;
    for path in &args.paths {
        match service.describe(path) {
            Ok(info) => println!("{}", presentation::render(path, &info, args.pretty)?),
            Err(err) => {
                all_ok = false;
                log::warn!("Error processing {}: {err}", path.display());
            }
        }
    }
    Ok(all_ok)
}
