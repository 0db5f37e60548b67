//! Goal List Frontend App
//!
//! Resolves backend settings, provides shared state and renders the page for
//! the current path.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use goal_store::route::Route;
use goal_store::BackendConfig;

use crate::commands;
use crate::config;
use crate::context::AppContext;
use crate::navigation;
use crate::pages::{DashboardPage, HomePage, LoginPage, SignupPage, VerifyEmailPage};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    match config::backend_config() {
        Ok(config) => view! { <ConfiguredApp config=config /> }.into_any(),
        Err(e) => {
            log::error!("[APP] {}", e);
            view! {
                <div class="page config-error">
                    <h1>"Configuration error"</h1>
                    <p>{e.to_string()}</p>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn ConfiguredApp(config: BackendConfig) -> impl IntoView {
    let ctx = AppContext::new(config);

    // Provide context to all children
    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    // Resolve the stored session once on load
    spawn_local(commands::restore_session(ctx));

    let route = navigation::current_route();
    log::debug!("[APP] Route {:?}", route);

    match route {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::Login => view! { <LoginPage /> }.into_any(),
        Route::Signup => view! { <SignupPage /> }.into_any(),
        Route::Dashboard => view! { <DashboardPage /> }.into_any(),
        Route::VerifyEmail { email } => view! { <VerifyEmailPage email=email /> }.into_any(),
        Route::NotFound(path) => view! {
            <div class="page not-found">
                <h1>"Page not found"</h1>
                <p>{path}</p>
                <a href=Route::Home.href()>"Home"</a>
            </div>
        }
        .into_any(),
    }
}
