//! Transport abstraction for terrarium environments.
//!
//! Environments treat their upstream data sources as opaque, fail-able HTTP
//! calls. The [`http::HttpClient`] trait is the seam: production code uses
//! [`http::NativeHttpClient`] (reqwest), tests swap in mock implementations
//! that return canned responses or errors.

pub mod http;

pub use http::{HttpClient, HttpError, HttpResponse, NativeHttpClient};
