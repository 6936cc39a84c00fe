//! Shared primitives for orgkit.
//!
//! The organization client is built from three small pieces that live here
//! so they can be tested on their own:
//!
//! - **`nested`**: key-path lookup through nested JSON objects
//! - **`memo`**: per-instance lazily computed values
//! - **`http`**: one-shot GET returning a decoded JSON body

pub mod http;
pub mod memo;
pub mod nested;

pub use http::{FetchError, HttpFetcher, HttpSettings, JsonFetcher, get_json, http_client};
pub use memo::Memo;
pub use nested::{NestedMapError, access_nested_map};
