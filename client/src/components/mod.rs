//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render pieces of a page from the `portal` state handed to them
//! and report user intent back through `Callback` props. Only the header
//! talks to the network, for its connectivity probe.

pub mod feedback_table;
pub mod header;
pub mod pagination;
pub mod stats_cards;
pub mod status_message;
