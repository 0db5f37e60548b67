//! Dashboard Page
//!
//! The signed-in user's list. Gated on session loaded, user present and email
//! verified; redirects otherwise.

use leptos::prelude::*;
use leptos::task::spawn_local;

use goal_store::auth::{evaluate, Gate};
use goal_store::route::Route;

use crate::commands;
use crate::components::ItemListView;
use crate::context::AppContext;
use crate::navigation;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let gate = Memo::new(move |_| evaluate(ctx.auth_loading.get(), ctx.user().as_ref()));

    Effect::new(move |_| match gate.get() {
        Gate::ToLogin => navigation::navigate(&Route::Login),
        Gate::ToVerify(route) => navigation::navigate(&route),
        Gate::Loading | Gate::Ready(_) => {}
    });

    let (signing_out, set_signing_out) = signal(false);
    let sign_out = move |_| {
        set_signing_out.set(true);
        spawn_local(commands::sign_out(ctx));
    };

    move || match gate.get() {
        Gate::Loading => view! { <div class="page loading">"Loading..."</div> }.into_any(),
        Gate::Ready(user) => view! {
            <div class="page dashboard">
                <div class="dashboard-header">
                    <h1>"Your Goal List"</h1>
                    <p>"Welcome, " {user.email_or_empty().to_string()} "!"</p>
                    <button class="sign-out-btn" disabled=move || signing_out.get() on:click=sign_out>
                        "Sign Out"
                    </button>
                </div>
                <ItemListView />
            </div>
        }
        .into_any(),
        // Redirect in flight
        Gate::ToLogin | Gate::ToVerify(_) => ().into_any(),
    }
}
