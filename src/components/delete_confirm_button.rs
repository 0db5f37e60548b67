//! Delete Confirm Button Component
//!
//! Inline delete confirmation. Nothing is sent until the user confirms.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a delete button initially. When clicked, shows the warning with
/// Delete/Cancel actions.
///
/// # Arguments
/// * `disabled` - Disables the initial button (e.g. while a delete is in flight)
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class="delete-btn"
                title="Delete"
                disabled=move || disabled.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                {move || if disabled.get() { "…" } else { "×" }}
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <div class="delete-confirm" role="alertdialog">
                <p class="delete-confirm-title">"Delete this item?"</p>
                <p class="delete-confirm-text">
                    "This action cannot be undone. This will permanently delete this item from your list."
                </p>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "Cancel"
                </button>
                <button
                    class="confirm-btn destructive"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "Delete"
                </button>
            </div>
        </Show>
    }
}
