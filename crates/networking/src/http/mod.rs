//! reqwest-backed transport

mod client;

pub use client::MatchainClient;
