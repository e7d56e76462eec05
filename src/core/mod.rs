//! Core domain models and business logic for the internship marketplace

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod proxy;

pub mod error;
pub mod guard;
pub mod models;
pub mod role;
pub mod session;
pub mod status;
pub mod validation;

pub use error::ApiError;
pub use guard::{RouteDecision, decide};
pub use role::{ALL_ROLES, Role};
pub use session::Session;
pub use status::ApplicationStatus;
