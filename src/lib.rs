//! Native terminal client for the employee feedback portal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `portal` crate holds the wire types and the sans-I/O form, dashboard,
//! and view-switcher state machines. This crate supplies the reqwest
//! transport ([`client::FeedbackClient`]) behind the [`api::FeedbackApi`]
//! seam, an effect runner that feeds responses back into the machines, and
//! the `feedback` binary's one-shot commands and interactive portal.

pub mod api;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod interactive;
pub mod render;
pub mod runner;

pub use api::FeedbackApi;
pub use client::FeedbackClient;
pub use config::{ClientConfig, ConfigError, Timeouts};
pub use error::CliError;
