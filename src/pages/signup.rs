use leptos::prelude::*;

use goal_store::route::Route;

use crate::components::{AuthForm, AuthMode};

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <div class="page auth-page">
            <h2>"Create your account"</h2>
            <AuthForm mode=AuthMode::Signup />
            <p class="auth-switch">
                "Already have an account? " <a href=Route::Login.href()>"Log in"</a>
            </p>
        </div>
    }
}
