use leptos::prelude::*;

use goal_store::route::Route;

use crate::components::{AuthForm, AuthMode};

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="page auth-page">
            <h2>"Log in to your account"</h2>
            <AuthForm mode=AuthMode::Login />
            <p class="auth-switch">
                "No account yet? " <a href=Route::Signup.href()>"Sign up"</a>
            </p>
        </div>
    }
}
