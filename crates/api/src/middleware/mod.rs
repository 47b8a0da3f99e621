//! HTTP middleware.

pub mod logging;
pub mod security_headers;
pub mod trace_id;

pub use security_headers::security_headers_middleware;
pub use trace_id::trace_id;
