//! Page Routes
//!
//! The handful of paths the app navigates between.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const VERIFY_EMAIL_PATH: &str = "/verify-email";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
    Dashboard,
    /// Verification prompt; carries the address from `?email=`
    VerifyEmail { email: Option<String> },
    NotFound(String),
}

impl Route {
    /// Resolve `location.pathname` + `location.search`
    pub fn parse(path: &str, search: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::Home,
            LOGIN_PATH => Route::Login,
            SIGNUP_PATH => Route::Signup,
            DASHBOARD_PATH => Route::Dashboard,
            VERIFY_EMAIL_PATH => Route::VerifyEmail {
                email: query_param(search, "email").filter(|e| !e.is_empty()),
            },
            other => Route::NotFound(other.to_string()),
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => LOGIN_PATH.to_string(),
            Route::Signup => SIGNUP_PATH.to_string(),
            Route::Dashboard => DASHBOARD_PATH.to_string(),
            Route::VerifyEmail { email: Some(email) } => format!(
                "{}?email={}",
                VERIFY_EMAIL_PATH,
                utf8_percent_encode(email, QUERY_VALUE)
            ),
            Route::VerifyEmail { email: None } => VERIFY_EMAIL_PATH.to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }
}

/// First value of `key` in a `?a=b&c=d` query string, decoded
pub fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| {
            let v = v.replace('+', " ");
            percent_decode_str(&v).decode_utf8_lossy().into_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paths() {
        assert_eq!(Route::parse("/", ""), Route::Home);
        assert_eq!(Route::parse("/login/", ""), Route::Login);
        assert_eq!(Route::parse("/dashboard", "?x=1"), Route::Dashboard);
        assert_eq!(Route::parse("/nope", ""), Route::NotFound("/nope".into()));
    }

    #[test]
    fn test_verify_email_round_trip() {
        let route = Route::VerifyEmail { email: Some("jo.doe+goals@example.com".into()) };
        let href = route.href();
        let (path, search) = href.split_once('?').unwrap();
        assert_eq!(Route::parse(path, &format!("?{}", search)), route);
    }

    #[test]
    fn test_verify_email_without_param() {
        assert_eq!(Route::parse("/verify-email", ""), Route::VerifyEmail { email: None });
        assert_eq!(Route::parse("/verify-email", "?email="), Route::VerifyEmail { email: None });
    }

    #[test]
    fn test_query_param_decoding() {
        assert_eq!(query_param("?email=a%40b.co&x=1", "email"), Some("a@b.co".into()));
        assert_eq!(query_param("?name=Jo+Doe", "name"), Some("Jo Doe".into()));
        assert_eq!(query_param("?flag", "flag"), Some(String::new()));
        assert_eq!(query_param("", "email"), None);
    }
}
