use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use restring_core::{
    json, reconstruct, token, ObjectShape, PrimitiveKind, ReprError, TypeDescriptor,
};
use serde::Serialize;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Debug-representation reconstruction toolkit.
#[derive(Parser)]
#[command(name = "restring", version, about = "Debug-representation reconstruction toolkit")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a debug representation into its top-level tokens
    Tokens {
        /// The text to split, e.g. "a, (b, c), d"
        text: String,
    },

    /// Reconstruct the built-in sample rendering and print it as JSON
    Demo,
}

#[derive(Serialize)]
struct TokenReport {
    count: usize,
    tokens: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tokens { text } => run_tokens(&text, cli.output),
        Commands::Demo => run_demo(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run_tokens(text: &str, output: OutputFormat) -> Result<(), ReprError> {
    let mut split = Vec::new();
    for token in token::tokens(text) {
        split.push(token?.trim().to_owned());
    }

    match output {
        OutputFormat::Text => {
            for token in &split {
                println!("{token}");
            }
        }
        OutputFormat::Json => {
            let report = TokenReport {
                count: split.len(),
                tokens: split,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&report).unwrap_or_default()
            );
        }
    }
    Ok(())
}

fn run_demo() -> Result<(), ReprError> {
    let value = reconstruct(&sample_descriptor(), SAMPLE)?;
    println!("{}", json::to_json_pretty(&value));
    Ok(())
}

const SAMPLE: &str = "UserRequest(id=42, name=Ada Lovelace, active=true, \
    created=Wed Dec 15 10:30:00 +0000 2021, tags=[math, pioneer], \
    scores={theory=99, practice=87}, address=UserRequest.Address(city=London, zip=N1))";

fn sample_descriptor() -> TypeDescriptor {
    TypeDescriptor::Object(
        ObjectShape::new("UserRequest")
            .field("id", TypeDescriptor::Primitive(PrimitiveKind::Long))
            .field("name", TypeDescriptor::Primitive(PrimitiveKind::Str))
            .field("active", TypeDescriptor::Primitive(PrimitiveKind::Bool))
            .field("created", TypeDescriptor::Temporal)
            .field(
                "tags",
                TypeDescriptor::sequence(TypeDescriptor::Primitive(PrimitiveKind::Str)),
            )
            .field(
                "scores",
                TypeDescriptor::mapping(
                    TypeDescriptor::Primitive(PrimitiveKind::Str),
                    TypeDescriptor::Primitive(PrimitiveKind::Int),
                ),
            )
            .field(
                "address",
                TypeDescriptor::Object(
                    ObjectShape::new("UserRequest::Address")
                        .field("city", TypeDescriptor::Primitive(PrimitiveKind::Str))
                        .field("zip", TypeDescriptor::Primitive(PrimitiveKind::Str)),
                ),
            ),
    )
}
