//! `crosshair-code` command-line tool.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use crosshair_code_core::{
    console_script, decode_share_code, encode_crosshair, from_ui_config_with, to_ui_config,
    HiddenFields, ShareCodeError, UiConfig,
};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "crosshair-code", version, about = "Decode and encode crosshair share codes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the UI configuration of a share code as JSON.
    Decode {
        code: String,
        /// Print the full decoded record instead of the UI configuration.
        #[arg(long)]
        record: bool,
    },
    /// Read a UI configuration as JSON and print its share code.
    Encode {
        /// JSON file to read; stdin when omitted.
        file: Option<PathBuf>,
        /// JSON file overriding the fields the UI does not expose.
        #[arg(long)]
        hidden: Option<PathBuf>,
    },
    /// Print the console commands reproducing a share code.
    Commands { code: String },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid share code: {0}")]
    ShareCode(#[from] ShareCodeError),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Runs one command. Regular output goes to `out`, warnings to `err`.
pub fn run(
    command: &Command,
    input: &mut impl Read,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        Command::Decode { code, record } => {
            let decoded = decode_share_code(code.trim())?;
            if let Some(mismatch) = decoded.checksum_mismatch {
                writeln!(err, "warning: {mismatch}")?;
            }
            let json = if *record {
                serde_json::to_string_pretty(&decoded.crosshair)?
            } else {
                serde_json::to_string_pretty(&to_ui_config(&decoded.crosshair))?
            };
            writeln!(out, "{json}")?;
        }
        Command::Encode { file, hidden } => {
            let text = match file {
                Some(path) => read_file(path)?,
                None => {
                    let mut text = String::new();
                    input.read_to_string(&mut text)?;
                    text
                }
            };
            let config: UiConfig = serde_json::from_str(&text)?;
            let hidden = match hidden {
                Some(path) => serde_json::from_str(&read_file(path)?)?,
                None => HiddenFields::default(),
            };
            debug!(?hidden, "encoding ui config");
            let code = encode_crosshair(&from_ui_config_with(&config, &hidden));
            writeln!(out, "{code}")?;
        }
        Command::Commands { code } => {
            let decoded = decode_share_code(code.trim())?;
            if let Some(mismatch) = decoded.checksum_mismatch {
                writeln!(err, "warning: {mismatch}")?;
            }
            writeln!(out, "{}", console_script(&decoded.crosshair))?;
        }
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::File {
        path: path.to_path_buf(),
        source,
    })
}
