use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use recwire::{Decode, Discriminator};
use std::fmt::Display;
use tracing_subscriber::EnvFilter;

/// Inspect buffers in the recwire little-endian record format.
#[derive(Parser, Debug)]
#[command(name = "recwire", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the 8-byte discriminator for an instruction or account name.
    Discriminator {
        name: String,
        /// Derive an account discriminator instead of an instruction one.
        #[arg(long)]
        account: bool,
    },
    /// Decode a hex buffer as a count-prefixed vector of unsigned integers.
    DumpVec {
        /// Element width in bytes: 1, 2, 4 or 8.
        #[arg(long, default_value_t = 1)]
        width: usize,
        /// Byte offset of the count prefix.
        #[arg(long, default_value_t = 0)]
        offset: usize,
        hex: String,
    },
    /// Decode a hex buffer as a length-prefixed UTF-8 string.
    #[command(name = "string")]
    DecodeString {
        #[arg(long, default_value_t = 0)]
        offset: usize,
        hex: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Discriminator { name, account } => {
            let disc = if account {
                Discriminator::for_account(&name)
            } else {
                Discriminator::for_instruction(&name)
            };
            println!("{}", disc);
        }
        Command::DumpVec { width, offset, hex } => {
            let buf = decode_hex(&hex)?;
            let (values, consumed) = dump_vec(width, &buf, offset)?;
            println!("count: {}", values.len());
            for (index, value) in values.iter().enumerate() {
                println!("[{}] {}", index, value);
            }
            println!("consumed: {} bytes", consumed);
        }
        Command::DecodeString { offset, hex } => {
            let buf = decode_hex(&hex)?;
            let (value, consumed) = String::read(&buf, offset).context("Failed to decode string")?;
            println!("{:?}", value);
            println!("consumed: {} bytes", consumed);
        }
    }
    Ok(())
}

fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let cleaned: String = input
        .trim()
        .trim_start_matches("0x")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    hex::decode(&cleaned).with_context(|| format!("Invalid hex input {:?}", input))
}

fn dump_vec(width: usize, buf: &[u8], offset: usize) -> Result<(Vec<String>, usize)> {
    let decoded = match width {
        1 => render(Vec::<u8>::read(buf, offset)?),
        2 => render(Vec::<u16>::read(buf, offset)?),
        4 => render(Vec::<u32>::read(buf, offset)?),
        8 => render(Vec::<u64>::read(buf, offset)?),
        other => bail!("Unsupported element width {} (expected 1, 2, 4 or 8)", other),
    };
    tracing::debug!(width, offset, count = decoded.0.len(), "decoded vector");
    Ok(decoded)
}

fn render<T: Display>((values, consumed): (Vec<T>, usize)) -> (Vec<String>, usize) {
    (values.iter().map(ToString::to_string).collect(), consumed)
}
