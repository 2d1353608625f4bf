//! Networking for the browser client.
//!
//! `api` executes `portal` requests over `gloo-net` and decodes the replies
//! with the shared `portal::api` rules.

pub mod api;
