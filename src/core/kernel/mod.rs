//! Transport kernel: route composition, parameter building, request
//! dispatch, and the optional response cache.
//!
//! The kernel carries no endpoint knowledge. Facades under
//! [`crate::endpoints`] compose a [`Route`] and [`Params`] and hand them to
//! the [`Dispatcher`], which owns auth state, the cache, and outcome
//! classification.

pub mod cache;
pub mod params;
pub mod rest;
pub mod route;

// Re-export key types for convenience
pub use cache::{CacheBackend, CacheConfig, CacheLayer, CacheMode, CacheStore, CachedResponse};
pub use params::Params;
pub use rest::{Dispatcher, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, Session};
pub use route::Route;
