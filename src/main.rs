//! trit-pack - CLI Entry Point
//!
//! Commands:
//! - `trit-pack pack <trits>` - Pack 5, 9 or 27 trits into an integer
//! - `trit-pack unpack <value> --width N` - Unpack an integer into trits
//! - `trit-pack spare <byte>` - Check a byte against the spare range
//! - `trit-pack table <op>` - Print an operator's truth table

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use tritpack::{Op, Trit, Width, format_trits, is_spare};
use tritpack::ternary::parse_trit_vec;

#[derive(Parser)]
#[command(name = "trit-pack")]
#[command(version)]
#[command(about = "Pack balanced ternary digits into 1-, 2- and 6-byte integers")]
struct Cli {
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a trit string (N/O/P or -/0/+, most significant first)
    Pack {
        /// The trits to pack
        #[arg(allow_hyphen_values = true)]
        trits: String,
        /// Expected trit count; inferred from the input if omitted
        #[arg(short, long)]
        width: Option<usize>,
    },
    /// Unpack an integer into trits
    Unpack {
        /// The packed value
        value: u64,
        /// Trit count: 5, 9 or 27
        #[arg(short, long)]
        width: usize,
        /// Reject spare and out-of-range values instead of decoding them
        #[arg(short, long)]
        strict: bool,
    },
    /// Check whether a byte is a spare 5-trit codepoint (243..=255)
    Spare {
        /// The byte to check
        value: u8,
    },
    /// Print the truth table of a trit operator
    Table {
        #[arg(value_enum)]
        op: OpArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OpArg {
    Neg,
    Add,
    Mul,
}

impl From<OpArg> for Op {
    fn from(arg: OpArg) -> Self {
        match arg {
            OpArg::Neg => Op::Neg,
            OpArg::Add => Op::Add,
            OpArg::Mul => Op::Mul,
        }
    }
}

#[derive(Serialize)]
struct CodecReport {
    width: usize,
    bytes: usize,
    trits: String,
    values: Vec<i8>,
    packed: u64,
    spare: bool,
}

impl CodecReport {
    fn new(width: Width, trits: &[Trit], packed: u64) -> Self {
        Self {
            width: width.digits(),
            bytes: width.bytes(),
            trits: format_trits(trits),
            values: trits.iter().map(|t| t.value()).collect(),
            packed,
            spare: width.is_spare(packed),
        }
    }
}

#[derive(Serialize)]
struct TableRow {
    a: i8,
    #[serde(skip_serializing_if = "Option::is_none")]
    b: Option<i8>,
    result: i8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Pack { trits, width } => pack_command(&trits, width, cli.json),
        Commands::Unpack { value, width, strict } => unpack_command(value, width, strict, cli.json),
        Commands::Spare { value } => spare_command(value, cli.json),
        Commands::Table { op } => table_command(op.into(), cli.json),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("❌ {}", message);
    std::process::exit(1);
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => fail(format!("Failed to serialize output: {}", e)),
    }
}

fn pack_command(input: &str, width: Option<usize>, json: bool) {
    let trits = match parse_trit_vec(input) {
        Ok(t) => t,
        Err(e) => fail(format!("Parse error: {}", e)),
    };

    if let Some(expected) = width {
        if expected != trits.len() {
            fail(format!("Expected {} trits, got {}", expected, trits.len()));
        }
    }

    let width = match Width::from_digits(trits.len()) {
        Ok(w) => w,
        Err(e) => fail(e),
    };

    let packed = match width.pack(&trits) {
        Ok(p) => p,
        Err(e) => fail(e),
    };
    debug!(%width, trits = %format_trits(&trits), packed, "packed");

    let report = CodecReport::new(width, &trits, packed);
    if json {
        print_json(&report);
    } else {
        println!("{} → {}", report.trits, report.packed);
    }
}

fn unpack_command(value: u64, digits: usize, strict: bool, json: bool) {
    let width = match Width::from_digits(digits) {
        Ok(w) => w,
        Err(e) => fail(e),
    };

    if width.is_spare(value) {
        warn!(value, "spare codepoint; decoded trits carry no defined meaning");
    }

    let trits = match width.unpack(value, strict) {
        Ok(t) => t,
        Err(e) => {
            warn!(value, %width, error = %e, "rejected");
            fail(e)
        }
    };
    debug!(%width, value, trits = %format_trits(&trits), "unpacked");

    let report = CodecReport::new(width, &trits, value);
    if json {
        print_json(&report);
    } else {
        println!("{} → {}", report.packed, report.trits);
    }
}

fn spare_command(value: u8, json: bool) {
    let spare = is_spare(value);
    debug!(value, spare, "spare check");

    if json {
        print_json(&serde_json::json!({ "value": value, "spare": spare }));
    } else if spare {
        println!("{} is a spare codepoint", value);
    } else {
        println!("{} is a valid 5-trit value", value);
    }
}

fn table_command(op: Op, json: bool) {
    let rows: Vec<TableRow> = op
        .truth_table()
        .into_iter()
        .map(|(a, b, result)| TableRow {
            a: a.value(),
            b: op.is_binary().then_some(b.value()),
            result: result.value(),
        })
        .collect();

    if json {
        print_json(&rows);
        return;
    }

    println!("━━━ {} ━━━", op);
    for (a, b, result) in op.truth_table() {
        if op.is_binary() {
            println!("  {} {} {} = {}", a, op.symbol(), b, result);
        } else {
            println!("  {}{} = {}", op.symbol(), a, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_unpack_requires_width() {
        assert!(Cli::try_parse_from(["trit-pack", "unpack", "17"]).is_err());

        let cli = Cli::try_parse_from(["trit-pack", "unpack", "17", "--width", "5"]).unwrap();
        assert!(matches!(cli.command, Commands::Unpack { value: 17, width: 5, strict: false }));
    }

    #[test]
    fn test_pack_accepts_leading_hyphen() {
        let cli = Cli::try_parse_from(["trit-pack", "pack", "--0++"]).unwrap();
        assert!(matches!(cli.command, Commands::Pack { ref trits, width: None } if trits == "--0++"));
    }
}
