//! staffdeck-server: HTTP front end for the staffdeck directory
//!
//! Thin glue over `staffdeck-core`: handlers parse request input through the
//! core's validated models, call the repositories, and translate domain
//! errors into stable HTTP responses. No store internals leak past the error
//! mapping in [`http::error`].

pub mod http;

pub use http::error::ApiError;
pub use http::server::{run_server, AppState, ServerConfig};
