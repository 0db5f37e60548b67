//! Filter Tabs Component
//!
//! All / Active / Completed tabs with live counts. Switching only changes the
//! client-side predicate.

use leptos::prelude::*;

use goal_store::view::Filter;

use crate::store::{store_set_filter, use_app_store, AppStateStoreFields};

#[component]
pub fn FilterTabs() -> impl IntoView {
    let store = use_app_store();
    let counts = Memo::new(move |_| store.list().read().counts());

    view! {
        <div class="filter-tabs" role="tablist">
            {Filter::ALL.into_iter().map(|filter| {
                let is_active = move || store.filter().get() == filter;
                view! {
                    <button
                        type="button"
                        role="tab"
                        class=move || if is_active() { "tab-btn active" } else { "tab-btn" }
                        aria-selected=move || is_active().to_string()
                        on:click=move |_| store_set_filter(&store, filter)
                    >
                        {move || format!("{} ({})", filter.label(), counts.get().for_filter(filter))}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
