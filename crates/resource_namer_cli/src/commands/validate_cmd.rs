use std::io::Write;

use clap::Args;
use resource_namer::{NamerError, ResourceName};
use tracing::{debug, instrument};

use crate::errors::Error;

#[cfg(test)]
#[path = "validate_cmd_tests.rs"]
mod tests;

/// Arguments for the validate command
#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Name to check
    pub name: String,
}

/// Checks a name against RFC 1035 and prints `valid` when it passes.
#[instrument(skip(out))]
pub fn execute(args: &ValidateArgs, out: &mut impl Write) -> Result<(), Error> {
    let name = ResourceName::try_new(args.name.as_str()).map_err(NamerError::from)?;
    debug!(name = %name, length = name.len(), "Name is valid");

    writeln!(out, "valid").map_err(|_| Error::StdOutFlushFailed)?;
    Ok(())
}
