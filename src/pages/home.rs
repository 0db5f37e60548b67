//! Landing page.

use leptos::prelude::*;

use goal_store::route::Route;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home">
            <header class="site-header">"The Goal List"</header>
            <main>
                <h1>"What is the Goal List?"</h1>
                <p>
                    "A place to list, track and share your stretch goals in life: things you want \
                     to do but that scare you, things you are not sure you can accomplish."
                </p>
                <div class="home-actions">
                    <a class="button" href=Route::Login.href()>"Log in"</a>
                    <a class="button secondary" href=Route::Signup.href()>"Sign up"</a>
                </div>
            </main>
        </div>
    }
}
