//! List Item Row Component
//!
//! One goal: completion checkbox, inline content editor, delete with
//! confirmation. Successful mutations patch the store in place.

use chrono::{DateTime, Local, TimeZone};
use leptos::prelude::*;
use leptos::task::spawn_local;

use goal_store::actions::EditOutcome;
use goal_store::ListItem;

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::store::{store_remove_item, store_update_item, use_app_store};

/// "Mar 1, 2024"
fn format_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%b %-d, %Y").to_string()
}

/// Checkbox state once a toggle settles: the stored flag, or the old one on failure
fn checked_after_toggle(before: bool, result: &Result<ListItem, String>) -> bool {
    match result {
        Ok(item) => item.is_completed,
        Err(_) => before,
    }
}

/// A single item row in the list
#[component]
pub fn ListItemRow(item: ListItem) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let completed = item.is_completed;
    let added_on = format_date(&item.created_at.with_timezone(&Local));
    let completed_on = item
        .completed_at
        .filter(|_| completed)
        .map(|at| format_date(&at.with_timezone(&Local)));
    let item = StoredValue::new(item);

    let (editing, set_editing) = signal(false);
    let (buffer, set_buffer) = signal(item.with_value(|i| i.content.clone()));
    let (updating, set_updating) = signal(false);
    let (deleting, set_deleting) = signal(false);
    // Follows the server value; the browser flips the box before the request settles.
    let (checked, set_checked) = signal(completed);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let toggle = move || {
        if updating.get_untracked() {
            return;
        }
        set_updating.set(true);
        let current = item.get_value();
        spawn_local(async move {
            let result = commands::toggle_item(ctx, current).await;
            set_updating.set(false);
            set_checked.set(checked_after_toggle(completed, &result));
            if let Ok(updated) = result {
                store_update_item(&store, updated);
            }
        });
    };

    let save = move || {
        if updating.get_untracked() {
            return;
        }
        set_updating.set(true);
        let current = item.get_value();
        let text = buffer.get_untracked();
        spawn_local(async move {
            let outcome = commands::save_item_content(ctx, current, text).await;
            set_updating.set(false);
            set_buffer.set(outcome.buffer().to_string());
            if outcome.closes_editor() {
                set_editing.set(false);
            }
            if let EditOutcome::Saved(saved) = outcome {
                store_update_item(&store, saved);
            }
        });
    };

    let cancel = move || {
        set_editing.set(false);
        set_buffer.set(item.with_value(|i| i.content.clone()));
    };

    let delete = Callback::new(move |_: ()| {
        if deleting.get_untracked() {
            return;
        }
        set_deleting.set(true);
        let current = item.get_value();
        spawn_local(async move {
            let id = current.id.clone();
            let result = commands::delete_item(ctx, current).await;
            set_deleting.set(false);
            if result.is_ok() {
                store_remove_item(&store, &id);
            }
        });
    });

    view! {
        <div class=move || {
            let mut c = String::from("item-row");
            if completed { c.push_str(" completed"); }
            if editing.get() { c.push_str(" editing"); }
            c
        }>
            <input
                type="checkbox"
                class="item-check"
                prop:checked=move || checked.get()
                disabled=move || updating.get()
                on:change=move |ev| {
                    set_checked.set(event_target_checked(&ev));
                    toggle();
                }
            />

            <div class="item-body">
                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <span
                            class="item-text"
                            on:click=move |_| if !updating.get_untracked() { set_editing.set(true) }
                        >
                            {move || buffer.get()}
                        </span>
                    }
                >
                    <div class="item-edit-row">
                        <input
                            type="text"
                            node_ref=input_ref
                            prop:value=move || buffer.get()
                            disabled=move || updating.get()
                            on:input=move |ev| set_buffer.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                                "Enter" => save(),
                                "Escape" => cancel(),
                                _ => {}
                            }
                        />
                        <button class="save-btn" disabled=move || updating.get() on:click=move |_| save()>
                            {move || if updating.get() { "…" } else { "✓" }}
                        </button>
                        <button class="cancel-btn" disabled=move || updating.get() on:click=move |_| cancel()>
                            "✗"
                        </button>
                    </div>
                </Show>

                <div class="item-dates">
                    <span>"Added on " {added_on}</span>
                    {completed_on.map(|on| view! { <span class="completed-on">"Completed on " {on}</span> })}
                </div>
            </div>

            <Show when=move || !editing.get()>
                <div class="item-actions">
                    <button
                        class="edit-btn"
                        title="Edit"
                        disabled=move || updating.get() || deleting.get()
                        on:click=move |_| set_editing.set(true)
                    >
                        "✎"
                    </button>
                    <DeleteConfirmButton disabled=deleting on_confirm=delete />
                </div>
            </Show>
        </div>
    }
}
