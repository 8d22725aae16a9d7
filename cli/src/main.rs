use anyhow::Result;
use clap::Parser;
use entity_enums_cli::{Command, GenCommand};
use entity_enums_sdk::{DEFAULT_ENUM_NAME, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "enumerate-entities")]
#[command(about = "Generate a C++ enum class header from the entity catalog")]
struct Cli {
    /// JSON object whose keys are entity names
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Header to overwrite
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Name of the generated enum type
    #[arg(long, default_value = DEFAULT_ENUM_NAME)]
    enum_name: String,

    /// Write colliding or empty identifiers verbatim instead of failing
    ///
    /// Covers entities that normalize to the same identifier and entities
    /// whose names have no letters, digits or whitespace.
    #[arg(long)]
    allow_duplicates: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

/// Initialize logging to stderr so stdout only carries the summary line
fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };

    let result = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(debug)
        .with_file(debug)
        .try_init();

    match result {
        Ok(_) => {}
        Err(_) => {
            // Global subscriber already set; keep the one installed first
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let command = GenCommand {
        input: cli.input,
        output: cli.output,
        enum_name: cli.enum_name,
        allow_duplicates: cli.allow_duplicates,
    };
    command.execute()
}
