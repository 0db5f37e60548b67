//! Pages
//!
//! One component per route.

mod dashboard;
mod home;
mod login;
mod signup;
mod verify_email;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use signup::SignupPage;
pub use verify_email::VerifyEmailPage;
