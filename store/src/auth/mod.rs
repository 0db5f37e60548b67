//! Auth Layer
//!
//! Client for the backend's auth API and the rules pages use to gate content
//! on the current session.

mod client;
mod gate;
mod session;

pub use client::{AuthApi, GoTrueClient, SignUpOutcome};
pub use gate::{evaluate, Gate};
pub use session::{plan_renewal, Credentials, Renewal, Session, User};
