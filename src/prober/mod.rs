//! HTTP probing of a single server.
//!
//! A probe builds `http://<host>:<port><endpoint>` for one server, sends a
//! GET bounded by the client timeout and records either the status code
//! with the time to response headers, or the reason it failed. Failures
//! are data, never panics or propagated errors: every call to
//! [`Prober::probe`](traits::Prober::probe) yields exactly one outcome.

pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod traits;
pub mod types;
