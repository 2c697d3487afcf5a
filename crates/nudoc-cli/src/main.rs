use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nudoc_config::Config;
use nudoc_engine::{Document, Format, ParseError, ParseLimits, parse_with_limits, render_with};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

#[derive(Debug, Parser)]
#[command(name = "nudoc", version, about = "Render and check nudoc documents")]
struct Cli {
    /// Config file to use instead of ~/.config/nudoc/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a document and write it out in another format
    Render {
        file: PathBuf,

        /// Output format (html, markdown or nudoc)
        #[arg(short, long)]
        format: Option<Format>,

        /// Write to this file instead of stdout. A directory gets a file
        /// named after FILE with the format's extension.
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },
    /// Parse documents and report the first error in each
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Render {
            file,
            format,
            output,
        } => {
            let format = format.unwrap_or(config.format);
            render_file(&file, format, output.as_deref(), &config)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { files } => {
            let mut failed = 0;
            for file in &files {
                let report = check_file(file, &config.limits);
                if report.is_err() {
                    failed += 1;
                }
                println!("{}", format_report(file, &report));
            }
            if failed > 0 {
                log::info!("{failed} of {} documents failed", files.len());
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let Some(path) = explicit else {
        return Ok(Config::load()?.unwrap_or_default());
    };

    let config_path = Config::expand_path(path);
    match Config::load_from_path(&config_path)? {
        Some(config) => {
            log::debug!("loaded config from {}", config_path.display());
            Ok(config)
        }
        None => anyhow::bail!("config file {} does not exist", config_path.display()),
    }
}

/// Where `render` writes. An existing directory gets a file named after the
/// input with the extension of `format`.
fn output_path(input: &Path, output: &Path, format: Format) -> PathBuf {
    if !output.is_dir() {
        return output.to_path_buf();
    }
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    output.join(stem).with_extension(format.extension())
}

fn parse_file(path: &Path, limits: &ParseLimits) -> Result<Document, CheckError> {
    let file = File::open(path).map_err(CheckError::Open)?;
    parse_with_limits(BufReader::new(file), limits).map_err(CheckError::Parse)
}

fn render_file(
    path: &Path,
    format: Format,
    output: Option<&Path>,
    config: &Config,
) -> Result<()> {
    let doc = parse_file(path, &config.limits)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    let rendered = render_with(&doc, format, &config.render_options());

    match output {
        Some(out) => {
            let out = output_path(path, out, format);
            std::fs::write(&out, rendered)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            log::info!("wrote {} as {format} to {}", path.display(), out.display());
        }
        None => std::io::stdout()
            .lock()
            .write_all(rendered.as_bytes())
            .context("Failed to write to stdout")?,
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
enum CheckError {
    #[error("open: {0}")]
    Open(std::io::Error),
    #[error(transparent)]
    Parse(ParseError),
}

fn check_file(path: &Path, limits: &ParseLimits) -> Result<(), CheckError> {
    parse_file(path, limits).map(|_| ())
}

/// One line per file: `path: ok`, `path:line: message` or `path: message`
/// when the file could not be opened.
fn format_report(path: &Path, report: &Result<(), CheckError>) -> String {
    match report {
        Ok(()) => format!("{}: ok", path.display()),
        Err(CheckError::Parse(err)) => format!("{}:{}: {}", path.display(), err.line, err.kind),
        Err(err) => format!("{}: {err}", path.display()),
    }
}
