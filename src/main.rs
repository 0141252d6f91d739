//! sortdec CLI - inspect and produce sortable decimal strings.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use num_bigint::BigInt;
use sortdec::{decode_to_parts, DecodedValue, Decimal, SortableDecimal, MAX_PRECISION};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Fixed-width, order-preserving string encoding for decimals.
#[derive(Parser)]
#[command(
    name = "sortdec",
    version,
    about = "Fixed-width, order-preserving string encoding for decimals",
    long_about = r#"
Fixed-width, order-preserving string encoding for decimals.

Examples:
    sortdec encode 123.456              # Sortable string for 123.456
    sortdec encode 10 --scale -10       # 10 × 10^10 from unscaled + scale
    sortdec decode '__00000000,1000…'   # Back to a decimal
    sortdec inspect '--ffffffff,8999…'  # Show the individual fields
    sortdec sort prices.txt             # Sort decimal literals by their keys
"#
)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a decimal into its sortable string
    Encode {
        /// Decimal literal, or an unscaled integer when --scale is given
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Power-of-ten scale: the value is VALUE × 10^(-SCALE)
        #[arg(long, allow_hyphen_values = true)]
        scale: Option<i32>,
    },

    /// Decode a sortable string back into a decimal
    Decode {
        /// Encoded string
        #[arg(allow_hyphen_values = true)]
        key: String,
    },

    /// Show the sign, exponent and mantissa fields of a sortable string
    Inspect {
        /// Encoded string
        #[arg(allow_hyphen_values = true)]
        key: String,
    },

    /// Sort decimal literals (one per line) by their sortable strings
    Sort {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Encode { value, scale } => cmd_encode(&mut out, &value, scale),
        Commands::Decode { key } => cmd_decode(&mut out, &key),
        Commands::Inspect { key } => cmd_inspect(&mut out, &key),
        Commands::Sort { file } => cmd_sort(&mut out, file.as_deref()),
    }
}

fn parse_value(value: &str, scale: Option<i32>) -> Result<Decimal> {
    match scale {
        Some(scale) => {
            let unscaled: BigInt = value
                .trim()
                .parse()
                .with_context(|| format!("invalid unscaled integer: {value:?}"))?;
            Ok(Decimal::new(unscaled, scale))
        }
        None => value
            .parse()
            .with_context(|| format!("invalid decimal: {value:?}")),
    }
}

fn cmd_encode(out: &mut impl Write, value: &str, scale: Option<i32>) -> Result<()> {
    let decimal = parse_value(value, scale)?;
    if decimal.precision() > MAX_PRECISION {
        tracing::warn!(
            precision = decimal.precision(),
            max = MAX_PRECISION,
            "value exceeds maximum precision, trailing digits will be truncated"
        );
    }
    writeln!(out, "{}", SortableDecimal::from(&decimal))?;
    Ok(())
}

fn cmd_decode(out: &mut impl Write, key: &str) -> Result<()> {
    let decimal = sortdec::decode(key).context("invalid sortable string")?;
    writeln!(out, "{decimal}")?;
    Ok(())
}

fn cmd_inspect(out: &mut impl Write, key: &str) -> Result<()> {
    match decode_to_parts(key).context("invalid sortable string")? {
        DecodedValue::Zero => writeln!(out, "sign:        zero")?,
        DecodedValue::Regular(parts) => {
            let digits: String = parts
                .significand
                .iter()
                .map(|&d| char::from(b'0' + d))
                .collect();
            let significant = digits.trim_end_matches('0');
            writeln!(
                out,
                "sign:        {}",
                if parts.negative { "negative" } else { "positive" }
            )?;
            writeln!(out, "exponent:    {}", parts.exponent)?;
            writeln!(out, "mantissa:    {significant}")?;
            let value = parts.to_decimal().context("value has no 32-bit scale")?;
            writeln!(out, "unscaled:    {}", value.unscaled())?;
            writeln!(out, "scale:       {}", value.scale())?;
            writeln!(out, "value:       {value}")?;
        }
    }
    Ok(())
}

fn cmd_sort(out: &mut impl Write, file: Option<&std::path::Path>) -> Result<()> {
    let reader: Box<dyn BufRead> = match file {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut entries = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line.context("failed to read input")?;
        let literal = line.trim();
        if literal.is_empty() {
            continue;
        }
        let decimal: Decimal = literal
            .parse()
            .with_context(|| format!("line {}: invalid decimal {literal:?}", number + 1))?;
        entries.push((SortableDecimal::from(&decimal), literal.to_string()));
    }

    tracing::info!(count = entries.len(), "sorting by encoded key");
    entries.sort();

    for (key, literal) in entries {
        writeln!(out, "{key}\t{literal}")?;
    }
    Ok(())
}
