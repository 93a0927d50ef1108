//! Domain models for the ReviewHub front end

mod business;
mod filters;
mod review;
mod user;

pub use business::*;
pub use filters::*;
pub use review::*;
pub use user::*;
