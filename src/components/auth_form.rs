//! Auth Form Component
//!
//! Email/password form shared by the login and signup pages.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::navigation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    fn submit_label(&self, busy: bool) -> &'static str {
        match (self, busy) {
            (AuthMode::Login, false) => "Log in",
            (AuthMode::Login, true) => "Logging in...",
            (AuthMode::Signup, false) => "Sign up",
            (AuthMode::Signup, true) => "Signing up...",
        }
    }

    fn password_autocomplete(&self) -> &'static str {
        match self {
            AuthMode::Login => "current-password",
            AuthMode::Signup => "new-password",
        }
    }
}

#[component]
pub fn AuthForm(mode: AuthMode) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);
        set_error.set(None);

        let email = email.get_untracked();
        let password = password.get_untracked();
        spawn_local(async move {
            let result = match mode {
                AuthMode::Login => commands::sign_in(ctx, email, password).await,
                AuthMode::Signup => commands::sign_up(ctx, email, password).await,
            };
            set_submitting.set(false);
            match result {
                Ok(route) => navigation::navigate(&route),
                Err(message) => {
                    log::warn!("[AUTH] {:?} failed: {}", mode, message);
                    set_error.set(Some(message));
                }
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            {move || error.get().map(|msg| view! { <div class="alert destructive">{msg}</div> })}
            <label>
                "Email"
                <input
                    type="email"
                    autocomplete="email"
                    required=true
                    prop:value=move || email.get()
                    disabled=move || submitting.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Password"
                <input
                    type="password"
                    autocomplete=mode.password_autocomplete()
                    required=true
                    prop:value=move || password.get()
                    disabled=move || submitting.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" disabled=move || submitting.get()>
                {move || mode.submit_label(submitting.get())}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_labels() {
        assert_eq!(AuthMode::Login.submit_label(false), "Log in");
        assert_eq!(AuthMode::Signup.submit_label(true), "Signing up...");
    }
}
