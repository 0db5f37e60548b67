//! Auth Commands
//!
//! Session holder operations: restore, refresh, sign in/up, sign out, resend
//! verification.

use chrono::Utc;
use leptos::prelude::WithUntracked;
use goal_store::auth::{
    plan_renewal, AuthApi, Credentials, GoTrueClient, Renewal, Session, SignUpOutcome, User,
};
use goal_store::route::Route;

use crate::context::AppContext;
use crate::navigation;
use crate::session::{clear_stored_session, load_stored_session, store_session};

fn client(ctx: &AppContext) -> GoTrueClient {
    GoTrueClient::new(ctx.config())
}

/// Resolve the stored session on load; always ends the loading phase.
pub async fn restore_session(ctx: AppContext) {
    if let Some(stored) = load_stored_session() {
        if stored.is_expired(Utc::now()) {
            log::info!("[AUTH] Stored session expired");
            match stored.refresh_token() {
                Some(token) => match client(&ctx).refresh_session(token).await {
                    Ok(session) => {
                        adopt(&ctx, session);
                    }
                    Err(e) => {
                        log::warn!("[AUTH] Session refresh failed: {}", e);
                        clear_stored_session();
                    }
                },
                None => clear_stored_session(),
            }
        } else {
            match client(&ctx).get_user(&stored.access_token).await {
                Ok(user) => {
                    adopt(&ctx, Session { user, ..stored });
                }
                Err(e) => {
                    log::warn!("[AUTH] Stored session rejected: {}", e);
                    clear_stored_session();
                }
            }
        }
    }
    ctx.finish_auth_loading();
}

/// Recover after the backend rejected `rejected_token`: refresh the session
/// and reload the list, or sign out when that is not possible.
pub async fn renew_session(ctx: AppContext, rejected_token: String) {
    let renewal = ctx.session.with_untracked(|s| plan_renewal(s.as_ref(), &rejected_token));
    match renewal {
        Renewal::Retry => ctx.reload(),
        Renewal::Refresh(token) => match client(&ctx).refresh_session(&token).await {
            Ok(session) => {
                log::info!("[AUTH] Session refreshed");
                adopt(&ctx, session);
                ctx.reload();
            }
            Err(e) => {
                log::warn!("[AUTH] Session refresh failed: {}", e);
                end_session(&ctx);
            }
        },
        Renewal::SignOut => end_session(&ctx),
    }
}

fn adopt(ctx: &AppContext, session: Session) -> User {
    store_session(&session);
    let user = session.user.clone();
    ctx.set_session(Some(session));
    user
}

/// Sign in and return where to go next
pub async fn sign_in(ctx: AppContext, email: String, password: String) -> Result<Route, String> {
    let credentials = Credentials::new(&email, &password).map_err(invalid_message)?;
    let session = client(&ctx)
        .sign_in_with_password(&credentials)
        .await
        .map_err(|e| e.to_string())?;
    let user = adopt(&ctx, session);
    Ok(landing_route(&user))
}

/// Sign up; unconfirmed accounts go to the verification prompt
pub async fn sign_up(ctx: AppContext, email: String, password: String) -> Result<Route, String> {
    let credentials = Credentials::new(&email, &password).map_err(invalid_message)?;
    let redirect = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| format!("{}{}", origin, Route::Dashboard.href()));
    let outcome = client(&ctx)
        .sign_up(&credentials, redirect.as_deref())
        .await
        .map_err(|e| e.to_string())?;
    Ok(match outcome {
        SignUpOutcome::SignedIn(session) => landing_route(&adopt(&ctx, session)),
        SignUpOutcome::ConfirmationSent(user) => Route::VerifyEmail {
            email: user.email.or(Some(credentials.email)),
        },
    })
}

/// Clear the session and return to the login page
pub async fn sign_out(ctx: AppContext) {
    if let Some(token) = ctx.access_token() {
        if let Err(e) = client(&ctx).sign_out(&token).await {
            log::warn!("[AUTH] Sign-out request failed: {}", e);
        }
    }
    end_session(&ctx);
}

fn end_session(ctx: &AppContext) {
    clear_stored_session();
    ctx.set_session(None);
    navigation::navigate(&Route::Login);
}

pub async fn resend_verification(ctx: AppContext, email: String) -> Result<(), String> {
    client(&ctx).resend_signup_email(&email).await.map_err(|e| match e {
        goal_store::DomainError::Backend { message, .. } => message,
        other => other.to_string(),
    })
}

fn landing_route(user: &User) -> Route {
    if user.is_verified() {
        Route::Dashboard
    } else {
        Route::VerifyEmail { email: user.email.clone() }
    }
}

fn invalid_message(e: goal_store::DomainError) -> String {
    match e {
        goal_store::DomainError::InvalidInput(msg) => msg,
        other => other.to_string(),
    }
}
