//! Consistent, length-bounded resource names.
//!
//! Cloud and cluster APIs reject resource names that break RFC 1035 or run
//! over a provider-specific length limit. This crate composes names from a
//! base name (an environment or project prefix), a resource name and an
//! optional resource type, shortens them predictably when they are too long,
//! and refuses to hand back anything the provider would reject.
//!
//! ```
//! use resource_namer::{NameComposer, NamerOptions};
//!
//! let namer = NameComposer::with_options("app", NamerOptions { normalize: true });
//! let name = namer.compose_name("user.auth_service", "instance", 50)?;
//! assert_eq!(name.as_str(), "app-user-auth-service-instance");
//! # Ok::<(), resource_namer::NamerError>(())
//! ```

pub mod errors;
pub mod namer;
pub mod normalize;
pub mod resource_name;
pub mod truncation;

pub use errors::{InvalidNameError, InvalidNameReason, NamerError, NamerResult};
pub use namer::{Composition, NameComposer, NamerOptions};
pub use normalize::normalize_segment;
pub use resource_name::{is_valid_name, ResourceName, MAX_RESOURCE_NAME_LENGTH};
pub use truncation::TruncationStrategy;
