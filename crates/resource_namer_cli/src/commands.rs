//! Command modules for the resource-namer CLI.
//!
//! - `compose_cmd`: Compose a length-bounded resource name
//! - `init_cmd`: Write a starter configuration file
//! - `validate_cmd`: Check an existing name against RFC 1035

pub mod compose_cmd;
pub mod init_cmd;
pub mod validate_cmd;
