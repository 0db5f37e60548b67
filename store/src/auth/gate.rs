//! Page gating on the session state.

use super::session::User;
use crate::route::Route;

/// What a protected page should do with the current session
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    /// Initial session resolution still running
    Loading,
    /// No user: go to the login page
    ToLogin,
    /// Signed in but the email is unverified
    ToVerify(Route),
    Ready(User),
}

/// Gate on (a) session loaded, (b) user present, (c) email verified.
pub fn evaluate(loading: bool, user: Option<&User>) -> Gate {
    if loading {
        return Gate::Loading;
    }
    match user {
        None => Gate::ToLogin,
        Some(user) if !user.is_verified() => Gate::ToVerify(Route::VerifyEmail {
            email: user.email.clone(),
        }),
        Some(user) => Gate::Ready(user.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use chrono::Utc;

    fn user(verified: bool) -> User {
        User {
            id: UserId("u1".into()),
            email: Some("a+b@example.com".into()),
            email_confirmed_at: verified.then(Utc::now),
        }
    }

    #[test]
    fn test_gate_order() {
        assert_eq!(evaluate(true, None), Gate::Loading);
        assert_eq!(evaluate(true, Some(&user(true))), Gate::Loading);
        assert_eq!(evaluate(false, None), Gate::ToLogin);
        assert!(matches!(evaluate(false, Some(&user(true))), Gate::Ready(_)));
    }

    #[test]
    fn test_unverified_goes_to_verify_page() {
        let Gate::ToVerify(route) = evaluate(false, Some(&user(false))) else {
            panic!("expected verify redirect");
        };
        assert_eq!(route.href(), "/verify-email?email=a%2Bb%40example.com");
    }
}
