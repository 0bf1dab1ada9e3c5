//! confkv CLI
//!
//! Command-line front end for inspecting and editing a confkv store file.
//! Demonstrates the Manager's public surface; the library itself has no
//! command-line coupling.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use confkv::{Format, Manager, Value};

/// confkv CLI
#[derive(Parser, Debug)]
#[command(name = "confkv-cli")]
#[command(about = "CLI for confkv configuration stores")]
struct Args {
    /// Store file path
    #[arg(short, long, default_value = "confkv.json")]
    file: String,

    /// Store file format (json or binary)
    #[arg(long, default_value = "json")]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the value stored under a key
    Get {
        /// The key to look up
        key: String,
    },

    /// Store a value under a key
    Set {
        /// The key to set
        key: String,

        /// The value to store
        value: String,

        /// Value type: text, int, float, or bool
        #[arg(short = 't', long = "type", default_value = "text")]
        kind: String,
    },

    /// Delete a key
    Del {
        /// The key to delete
        key: String,
    },

    /// Check whether a key exists
    Has {
        /// The key to check
        key: String,
    },

    /// List all stored entries
    List,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let mut manager = Manager::open(&args.file, args.format);

    match run(&mut manager, args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(manager: &mut Manager, command: Commands) -> confkv::Result<()> {
    match command {
        Commands::Get { key } => match manager.database().get(&key) {
            Ok(record) => println!("{}", record.value),
            Err(_) => println!("(not set)"),
        },
        Commands::Set { key, value, kind } => {
            let value = parse_value(&value, &kind)?;
            manager.set(&key, value)?;
        }
        Commands::Del { key } => {
            manager.remove(&key)?;
        }
        Commands::Has { key } => {
            println!("{}", manager.contains(&key));
        }
        Commands::List => {
            for record in manager.database().iter() {
                println!("{}\t{}\t{}", record.key, record.kind(), record.value);
            }
        }
    }
    Ok(())
}

/// Parse a command-line string into a typed [`Value`]
fn parse_value(raw: &str, kind: &str) -> confkv::Result<Value> {
    let parsed = match kind {
        "text" => Value::from(raw),
        "int" => Value::from(raw.parse::<i64>().map_err(invalid_value)?),
        "float" => Value::from(raw.parse::<f64>().map_err(invalid_value)?),
        "bool" => Value::from(raw.parse::<bool>().map_err(invalid_value)?),
        other => {
            return Err(invalid_value(format!(
                "unknown value type: {} (expected text, int, float, or bool)",
                other
            )))
        }
    };
    Ok(parsed)
}

fn invalid_value(e: impl ToString) -> confkv::StoreError {
    confkv::StoreError::Io(std::io::Error::new(
        std::io::ErrorKind::InvalidInput,
        e.to_string(),
    ))
}
