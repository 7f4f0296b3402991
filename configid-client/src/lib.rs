//! Session request client for the configuration provisioning service.
//!
//! Performs the single round-trip that exchanges an application credential
//! (and optionally an existing plan id) for a one-time configuration token.
//!
//! # Design Principles
//!
//! - **One attempt per call**: the client never retries; a token represents
//!   exactly one attempt and retry policy belongs to the application
//! - **Stateless**: nothing is cached between calls
//! - **Classified failures**: every error maps onto a fixed `ErrorKind`
//!   taxonomy so callers can tell retryable failures from fatal ones
//!
//! # Wire Format
//!
//! `POST {base_url}/configs` with body `{"apiKey": "...", "planId": "..."}`
//! (`planId` omitted when a new plan should be allocated). A 2xx response
//! carries `{"token": "...", "planId": "...", "expiresAt": "..."}`; failures
//! carry `{"code": "...", "message": "..."}`.

mod client;
mod config;
mod error;
mod http;
mod request;

pub use client::ProvisioningClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, ErrorKind, ProvisionError, ProvisionResult};
pub use http::HttpProvisioningClient;
pub use request::{ConfigGrant, ConfigRequest};
