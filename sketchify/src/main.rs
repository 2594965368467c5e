//! Sketchify
//!
//! Converts an image into a pencil sketch and saves it next to the source
//! image as `<output name>.<file type>`.

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use image_sketch::{SketchConverter, export_sketch};
use std::{io::Write, path::PathBuf, process::ExitCode};

#[derive(Parser, Debug)]
#[command(name = "sketchify", version, about = "Convert an image into a pencil sketch")]
struct Args {
    /// Source image
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file name without extension [default: sketch_output]
    #[arg(short = 'n', long, value_name = "NAME")]
    output_name: Option<String>,

    /// Output file extension [default: png]
    #[arg(short = 't', long, value_name = "EXT")]
    file_type: Option<String>,

    /// Config file, defaults to the per-user sketchify.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                buf.timestamp_seconds(),
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

fn run(args: &Args) -> Result<PathBuf> {
    let mut config = Config::load(args.config.as_deref()).context("load config failed")?;
    if let Some(path) = &config.config_path {
        log::debug!("Loaded config from {}", path.display());
    }

    if let Some(name) = &args.output_name {
        config.save.output_name = name.clone();
    }

    if let Some(file_type) = &args.file_type {
        config.save.file_type = file_type.clone();
    }

    let options = config.save_options();
    log::debug!("{:?}", options);

    export_sketch(&SketchConverter::new(), &args.input, &options)
        .with_context(|| format!("convert {} to sketch failed", args.input.display()))
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    match run(&args) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e:?}");
            ExitCode::FAILURE
        }
    }
}
