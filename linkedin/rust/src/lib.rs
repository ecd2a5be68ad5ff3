//! # LinkedIn Integration Library
//!
//! An async LinkedIn REST API client with:
//! - OAuth2 authorization-code exchange, token refresh and introspection
//! - Versioned Rest.li requests (`LinkedIn-Version`, `X-RestLi-Protocol-Version`)
//! - Pagination link traversal for collection finders
//! - Typed organization, organization ACL and post resources
//! - Cancellation and deadlines per session
//! - Pluggable HTTP transport for testing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_linkedin::{Application, SortBy, Urn};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = Application::builder("client-id", "client-secret")
//!         .redirect_uri("https://app.example.com/callback")
//!         .build()?;
//!
//!     // Exchange the code received on the redirect URI
//!     let token = app.exchange_authorization_code("AQTx...").await?;
//!     let session = app.new_session(token.access_token);
//!
//!     let acls = session.organizations().acl_pages(10).collect_all().await?;
//!     for acl in &acls {
//!         let author = Urn::organization(acl.organization_id()).to_string();
//!         let posts = session
//!             .posts()
//!             .list_by_author(&author, 10, SortBy::LastModified)
//!             .await?;
//!         println!("{}: {} posts", acl.organization, posts.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

// Core modules
pub mod config;
pub mod errors;
pub mod types;

// Encoding helpers
pub mod encoding;

// HTTP transport and request context
pub mod context;
pub mod transport;

// OAuth application and sessions
pub mod app;
pub mod session;

// Pagination handling
pub mod pagination;

// API Services
pub mod services;

// Re-exports for convenience
pub use app::{Application, ApplicationBuilder};
pub use config::{LinkedInConfig, LinkedInConfigBuilder};
pub use context::RequestContext;
pub use encoding::{decode_url, encode_url};
pub use errors::{LinkedInError, LinkedInResult};
pub use pagination::{Link, Page, PageIterator, Paging};
pub use session::Session;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, MockHttpTransport, ReqwestHttpTransport};
pub use types::*;
