use std::io::Write;

use clap::Args;
use resource_namer::{NamerError, NamerOptions, ResourceName};
use tracing::{debug, error, info, instrument};

use crate::config::{get_config_path, AppConfig};
use crate::errors::Error;

#[cfg(test)]
#[path = "init_cmd_tests.rs"]
mod tests;

/// Arguments for the init command
#[derive(Args, Debug, Clone, Default)]
pub struct InitArgs {
    /// Base name to store in the configuration file
    #[arg(short, long)]
    pub base: Option<String>,

    /// Enable normalization of resource names and types
    #[arg(short, long)]
    pub normalize: bool,

    /// Path to save the configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

/// Writes a starter configuration file, refusing to overwrite an existing one.
#[instrument(skip(out))]
pub fn execute(args: &InitArgs, out: &mut impl Write) -> Result<(), Error> {
    let config_path = get_config_path(args.config.as_deref());
    debug!(message = "Initializing configuration", path = ?config_path);

    if config_path.exists() {
        let err = Error::Config(format!(
            "Configuration file already exists at {:?}",
            config_path
        ));
        error!(message = "Configuration file already exists", path = ?config_path);
        return Err(err);
    }

    // The base name is never normalized, so it must already be valid.
    if let Some(base) = &args.base {
        ResourceName::try_new(base.as_str()).map_err(NamerError::from)?;
    }

    let config = AppConfig {
        base_name: args.base.clone(),
        options: NamerOptions {
            normalize: args.normalize,
        },
        ..AppConfig::default()
    };
    config.save(&config_path)?;

    info!(message = "Configuration initialized", path = ?config_path);
    writeln!(out, "Configuration initialized at {:?}", config_path)
        .map_err(|_| Error::StdOutFlushFailed)?;
    Ok(())
}
