//! Verify Email Page
//!
//! Prompt shown to signed-up users until they confirm their address.

use leptos::prelude::*;
use leptos::task::spawn_local;

use goal_store::route::Route;

use crate::commands;
use crate::context::AppContext;

#[component]
pub fn VerifyEmailPage(email: Option<String>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let email = StoredValue::new(email);

    let (resending, set_resending) = signal(false);
    let (resent, set_resent) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let resend = move |_| {
        let Some(address) = email.get_value() else {
            return;
        };
        set_resending.set(true);
        set_resent.set(false);
        set_error.set(None);
        spawn_local(async move {
            match commands::resend_verification(ctx, address).await {
                Ok(()) => set_resent.set(true),
                Err(message) => {
                    log::error!("[AUTH] Resend failed: {}", message);
                    set_error.set(Some(message));
                }
            }
            set_resending.set(false);
        });
    };

    view! {
        <div class="page verify-email">
            <h2>"Verify Your Email"</h2>

            <div class="notice info">
                <p>"We've sent a verification email to:"</p>
                <p class="email">
                    {email.get_value().unwrap_or_else(|| "your email address".to_string())}
                </p>
            </div>

            <p>"Please check your inbox and click the verification link to complete your registration."</p>
            <p class="hint">"If you don't see the email, check your spam folder."</p>

            {move || error.get().map(|msg| view! { <div class="alert destructive">{msg}</div> })}
            <Show when=move || resent.get()>
                <div class="alert success">"Verification email resent successfully!"</div>
            </Show>

            <div class="verify-actions">
                <button on:click=resend disabled=move || resending.get()>
                    {move || if resending.get() { "Resending..." } else { "Resend Verification Email" }}
                </button>
                <a class="button secondary" href=Route::Login.href()>"Back to Login"</a>
            </div>
        </div>
    }
}
