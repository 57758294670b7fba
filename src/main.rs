//! Cemtext ABA CLI
//!
//! Builds an ABA file from a header CSV and a detail CSV.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --header header.csv --details details.csv --output payroll.aba
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use cemtext_aba::{input, AbaWriter, AmountFormat, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Amounts {
    Cents,
    Dollars,
}

impl From<Amounts> for AmountFormat {
    fn from(amounts: Amounts) -> Self {
        match amounts {
            Amounts::Cents => AmountFormat::Cents,
            Amounts::Dollars => AmountFormat::Dollars,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "cemtext-aba", version, about = "Write Cemtext ABA direct-entry files")]
struct Cli {
    /// CSV file with the descriptive record in its first row
    #[arg(long)]
    header: PathBuf,

    /// CSV file with one detail record per row
    #[arg(long)]
    details: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// How amount columns are written
    #[arg(long, value_enum, default_value = "cents")]
    amounts: Amounts,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let header = input::read_header(BufReader::new(File::open(&cli.header)?))?;
    let details = input::read_details(
        BufReader::new(File::open(&cli.details)?),
        cli.amounts.into(),
    )?;

    let mut writer = AbaWriter::new();
    writer.set_header(header);
    *writer.details_mut() = details;

    match cli.output {
        Some(path) => writer.save(path),
        None => {
            let stdout = io::stdout();
            let handle = stdout.lock();
            writer.write_to(handle)
        }
    }
}
