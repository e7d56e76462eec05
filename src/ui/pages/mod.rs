//! Application pages module
//!
//! This module contains all the page components for the application:
//! - Login page (home)
//! - Signup page
//! - Forgot-password page
//! - Unauthorized page
//! - Role dashboards (student, employer, institute)

mod employer;
mod forgot_password;
mod institute;
mod login;
mod not_found;
mod signup;
mod student;
mod unauthorized;

pub use employer::EmployerPage;
pub use forgot_password::ForgotPasswordPage;
pub use institute::InstitutePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use signup::SignupPage;
pub use student::StudentPage;
pub use unauthorized::UnauthorizedPage;
