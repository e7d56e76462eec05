//! UI components and pages for the InternLink frontend

pub mod api;
pub mod auth;
pub mod guard;
pub mod icon;
pub mod notifications;
pub mod page_shell;
pub mod pages;

pub use guard::RequireRole;
pub use icon::{Icon, icons};
pub use notifications::{ToastContainer, provide_notifications, use_notifications};
