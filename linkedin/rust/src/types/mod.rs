//! LinkedIn API types.

mod organization;
mod post;
pub mod restli;
mod token;
mod urn;

pub use organization::*;
pub use post::*;
pub use token::*;
pub use urn::*;

/// Untyped JSON object, used for resources without a fixed schema (e.g. `/me`).
pub type JsonObject = serde_json::Map<String, serde_json::Value>;
