//! pixlit - Turn 32x32 PNG sprites into code literals
//!
//! A command-line tool for converting sprites to decimal, packed hex or
//! Solidity byte literals, and for reading such literals back.

use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use pixel_literal::{
    parse_decimal, parse_hex, process, render_error, EncodeOptions, OutputMode, SourceFile,
};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pixlit")]
#[command(author = "Mike Krüger <mkrueger@posteo.de>")]
#[command(version)]
#[command(about = "Turn 32x32 PNG sprites into code literals", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one or more 32x32 PNG files
    Convert {
        /// Input PNG files, converted in the given order
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Mode::Decimal)]
        mode: Mode,

        /// Pad hex output to whole 10-nibble pixel groups
        #[arg(long)]
        pad_hex: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the pixels of an encoded string
    Inspect {
        /// Encoded pixels (use - for stdin)
        input: String,

        /// Input is packed hex instead of decimal
        #[arg(long)]
        hex: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Decimal,
    Hex,
    Solidity,
}

impl From<Mode> for OutputMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Decimal => OutputMode::Decimal,
            Mode::Hex => OutputMode::Hex,
            Mode::Solidity => OutputMode::Solidity,
        }
    }
}

fn read_source(path: &Path) -> Result<SourceFile, String> {
    let bytes =
        fs::read(path).map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    debug!("read {} bytes from '{}'", bytes.len(), path.display());
    Ok(SourceFile::from_name(name, bytes))
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            files,
            mode,
            pad_hex,
            output,
        } => {
            let sources = files
                .iter()
                .map(|p| read_source(p))
                .collect::<Result<Vec<_>, _>>()?;

            let opts = EncodeOptions { pad_hex };
            let text = match process(&sources, mode.into(), &opts) {
                Ok(text) => text,
                Err(err) => {
                    println!("{}", render_error(&err));
                    return Ok(ExitCode::FAILURE);
                }
            };

            match output {
                Some(path) => {
                    fs::write(&path, &text)?;
                    eprintln!("Written {} bytes to '{}'", text.len(), path.display());
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    stdout.write_all(text.as_bytes())?;
                    if !text.is_empty() {
                        stdout.write_all(b"\n")?;
                    }
                }
            }
        }

        Commands::Inspect { input, hex } => {
            let text = if input == "-" {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                input
            };

            let parsed = if hex {
                parse_hex(&text)
            } else {
                parse_decimal(&text)
            };
            let pixels = match parsed {
                Ok(pixels) => pixels,
                Err(err) => {
                    println!("{}", render_error(&err));
                    return Ok(ExitCode::FAILURE);
                }
            };

            let mut stdout = io::stdout().lock();
            for p in &pixels {
                writeln!(stdout, "{}", p)?;
            }
            eprintln!("{} pixel(s)", pixels.len());
        }
    }

    Ok(ExitCode::SUCCESS)
}
