//! Shared types and state for the ReviewHub front end
//!
//! This crate contains everything that does not touch the network: entity
//! models, wire envelopes, client-side validation, the resource store
//! reducers and the view derivations. It is used by the native client and,
//! via WASM, by the browser host page.

pub mod forms;
pub mod models;
pub mod store;
pub mod types;
pub mod validation;
pub mod view;

pub use models::*;
pub use types::*;
pub use validation::*;
