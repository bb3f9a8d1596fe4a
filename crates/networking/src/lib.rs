//! Matchfarm Networking - HTTP transport, headers, and endpoint table

pub mod api;
pub mod http;
mod response;
mod transport;

pub use api::Endpoint;
pub use http::MatchainClient;
pub use response::ApiResponse;
pub use transport::Transport;
