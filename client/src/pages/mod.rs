//! Page modules, one per portal view.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its `portal` state machine in an `RwSignal`, runs the
//! requests it asks for, and delegates markup details to `components`.

pub mod admin_dashboard;
pub mod employee_form;
