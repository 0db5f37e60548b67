//! Item List View Component
//!
//! Owns the fetch of the current user's items and renders the filtered view.
//! Refetches whenever the reload trigger fires; a newer fetch does not cancel
//! an older one, the last to settle wins.

use leptos::prelude::*;
use leptos::task::spawn_local;

use goal_store::view::Presentation;
use goal_store::ListItem;

use crate::commands;
use crate::components::{FilterTabs, ListItemRow, NewItemForm};
use crate::context::AppContext;
use crate::store::{store_begin_load, store_finish_load, use_app_store, AppStateStoreFields};

#[component]
pub fn ItemListView() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    // Load items when the trigger changes
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("[LIST] Loading items, trigger={}", trigger);
        store_begin_load(&store);
        spawn_local(async move {
            let result = commands::list_items(ctx).await;
            store_finish_load(&store, result);
        });
    });

    // Everything except the item rows themselves; rows render through <For>
    // so untouched rows keep their local edit state.
    let banner = Memo::new(move |_| {
        let filter = store.filter().get();
        match store.list().read().presentation(filter) {
            Presentation::Items(_) => None,
            other => Some(other),
        }
    });

    let visible = move || {
        let filter = store.filter().get();
        store.list().read().filtered(filter)
    };

    view! {
        <div class="item-list-view">
            <NewItemForm />
            <FilterTabs />

            {move || match banner.get() {
                Some(Presentation::Loading) => view! {
                    <div class="skeleton-list">
                        {(0..3).map(|_| view! {
                            <div class="item-row skeleton">
                                <span class="skeleton-box check"></span>
                                <span class="skeleton-box line"></span>
                            </div>
                        }).collect_view()}
                    </div>
                }.into_any(),
                Some(Presentation::Failed(message)) => view! {
                    <div class="alert destructive" role="alert">{message}</div>
                }.into_any(),
                Some(Presentation::Empty(state)) => view! {
                    <div class="empty-state">
                        <p>{state.headline()}</p>
                        {state.hint().map(|hint| view! { <p class="hint">{hint}</p> })}
                    </div>
                }.into_any(),
                Some(Presentation::Items(_)) | None => view! {
                    <div class="item-list">
                        <For
                            each=visible
                            key=|item: &ListItem| (item.id.clone(), item.updated_at)
                            children=move |item: ListItem| view! { <ListItemRow item=item /> }
                        />
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
