//! Core type definitions for configuration sessions.
//!
//! This crate defines the plain values shared by the client and the
//! session layers:
//! - The application credential (`ApiKey`)
//! - Plan and token identifiers issued by the provisioning service
//! - The tri-state `ActivationState` of a session
//!
//! Nothing in here performs I/O.

mod ids;
mod state;

pub use ids::{ApiKey, PlanId, Token};
pub use state::ActivationState;
