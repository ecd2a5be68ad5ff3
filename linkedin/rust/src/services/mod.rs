//! LinkedIn API service implementations.

mod organizations;
mod posts;
mod profile;

pub use organizations::*;
pub use posts::*;
pub use profile::*;
