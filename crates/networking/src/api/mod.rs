//! Endpoint table and request header helpers for the Matchain API

mod endpoints;
mod headers;

pub use endpoints::*;
pub use headers::*;
