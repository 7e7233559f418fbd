use std::io::Write;

use clap::{Args, ValueEnum};
use resource_namer::{Composition, NameComposer, NamerOptions, TruncationStrategy};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::config::AppConfig;
use crate::errors::Error;

#[cfg(test)]
#[path = "compose_cmd_tests.rs"]
mod tests;

/// Arguments for the compose command
#[derive(Args, Debug, Clone, Default)]
pub struct ComposeArgs {
    /// Resource name, e.g. "cache"
    #[arg(short, long)]
    pub part: String,

    /// Resource type, e.g. "instance"; omitted from the name when empty
    #[arg(short, long, default_value = "")]
    pub kind: String,

    /// Base name; overrides `base_name` from the configuration file
    #[arg(short, long)]
    pub base: Option<String>,

    /// Maximum name length; overrides `default_max_length`
    #[arg(short, long)]
    pub max_length: Option<usize>,

    /// Lowercase the resource name and type and replace '.' and '_' with '-'
    #[arg(short, long)]
    pub normalize: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Path to the configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

/// How the composed name is printed.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The bare name
    #[default]
    Text,

    /// A JSON object with the name and how it was produced
    Json,
}

#[derive(Debug, Serialize)]
struct ComposeOutput<'a> {
    name: &'a str,
    length: usize,
    original_length: usize,
    strategy: TruncationStrategy,
}

/// Execute the compose command, writing the result to `out`.
#[instrument(skip(out))]
pub fn execute(args: &ComposeArgs, out: &mut impl Write) -> Result<(), Error> {
    let config = AppConfig::resolve(args.config.as_deref())?;
    let namer = build_composer(args, &config)?;
    let max_length = args.max_length.unwrap_or(config.default_max_length);

    debug!(
        base_name = namer.base_name(),
        part = %args.part,
        kind = %args.kind,
        max_length,
        "Composing resource name"
    );

    let composition = namer.compose(&args.part, &args.kind, max_length)?;
    if composition.was_truncated() {
        info!(
            name = %composition.name,
            strategy = %composition.strategy,
            "Resource name was truncated to fit {} characters",
            max_length
        );
    }

    let rendered = render(&composition, args.format)?;
    writeln!(out, "{}", rendered).map_err(|_| Error::StdOutFlushFailed)?;
    Ok(())
}

/// Builds the composer from flags, falling back to the configuration file.
fn build_composer(args: &ComposeArgs, config: &AppConfig) -> Result<NameComposer, Error> {
    let base_name = args
        .base
        .clone()
        .or_else(|| config.base_name.clone())
        .ok_or_else(|| {
            Error::InvalidArguments(
                "no base name given; pass --base or set base_name in the configuration file"
                    .to_string(),
            )
        })?;

    let options = NamerOptions {
        normalize: args.normalize || config.options.normalize,
    };

    Ok(NameComposer::with_options(base_name, options))
}

fn render(composition: &Composition, format: OutputFormat) -> Result<String, Error> {
    match format {
        OutputFormat::Text => Ok(composition.name.to_string()),
        OutputFormat::Json => {
            let output = ComposeOutput {
                name: composition.name.as_str(),
                length: composition.name.len(),
                original_length: composition.original_length,
                strategy: composition.strategy,
            };
            serde_json::to_string_pretty(&output).map_err(|e| Error::Serialization(e.to_string()))
        }
    }
}
