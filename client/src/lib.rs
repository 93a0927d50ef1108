//! ReviewHub client
//!
//! State synchronization layer of the ReviewHub front end: a resource store
//! mirroring server businesses, reviews and the session, the fetch gateway
//! that keeps it in step with the REST API, and the page and form
//! controllers that drive both.

pub mod actions;
pub mod app;
pub mod config;
pub mod debounce;
pub mod error;
pub mod forms;
pub mod gateway;
pub mod pages;
pub mod store;
pub mod telemetry;

pub use app::App;
pub use config::Config;
pub use error::{ApiOutcome, ClientError, ClientResult, Deleted};
pub use gateway::Gateway;
pub use store::Store;
