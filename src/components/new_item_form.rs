//! New Item Form Component
//!
//! Single-field creator form. The input and button stay disabled while the
//! insert is in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (new_text, set_new_text) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let text = new_text.get_untracked();
        if text.trim().is_empty() {
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            // Failures are logged by the action; the text stays for another try.
            if let Ok(Some(_)) = commands::create_item(ctx, text).await {
                set_new_text.set(String::new());
                ctx.reload();
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <div class="new-item-row">
                <input
                    type="text"
                    placeholder="Add a new goal to your list..."
                    prop:value=move || new_text.get()
                    disabled=move || submitting.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    disabled=move || submitting.get() || new_text.get().trim().is_empty()
                >
                    {move || if submitting.get() { "Adding..." } else { "Add" }}
                </button>
            </div>
        </form>
    }
}
