//! GitHub organization client.
//!
//! [`GithubOrgClient`] composes the `orgkit-utils` primitives into a small
//! pipeline:
//!
//! ```text
//! org()  ──►  public_repos_url()  ──►  repos_payload()  ──►  public_repos(license)
//! (GET, memoized)  (nested access)     (GET, memoized)       (filter by has_license)
//! ```
//!
//! Both GETs go through a [`JsonFetcher`], so the client runs unchanged against
//! the real API, a mock server, or an in-memory double.
//!
//! # Usage
//!
//! ```ignore
//! use orgkit_client::GithubOrgClient;
//!
//! let client = GithubOrgClient::new("google");
//! let apache = client.public_repos(Some("apache-2.0")).await?;
//! ```

mod error;
mod org;

pub use error::ClientError;
pub use org::{DEFAULT_BASE_URL, GithubOrgClient, has_license};
pub use orgkit_utils::{FetchError, HttpFetcher, HttpSettings, JsonFetcher};
