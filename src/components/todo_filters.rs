//! Filter selector and clear-completed action.

#[cfg(test)]
#[path = "todo_filters_test.rs"]
mod todo_filters_test;

use leptos::prelude::*;

use crate::app::TodosVersion;
use crate::state::todos::{Filter, TodoStore};

/// All/Active/Completed selector plus the clear-completed button.
///
/// The filter is transient UI state owned by the page; it is not persisted.
#[component]
pub fn TodoFilters(filter: RwSignal<Filter>) -> impl IntoView {
    let todos = expect_context::<TodoStore>();
    let version = expect_context::<TodosVersion>().0;

    let class_for = move |value: Filter| {
        if filter.get() == value {
            "btn todo-filters__filter todo-filters__filter--active"
        } else {
            "btn todo-filters__filter"
        }
    };

    let clear_todos = todos.clone();
    let completed_count = move || {
        version.get();
        todos.counts().completed
    };

    view! {
        <div class="todo-filters">
            <button class=move || class_for(Filter::All) on:click=move |_| filter.set(Filter::All)>
                {filter_label(Filter::All)}
            </button>
            <button
                class=move || class_for(Filter::Active)
                on:click=move |_| filter.set(Filter::Active)
            >
                {filter_label(Filter::Active)}
            </button>
            <button
                class=move || class_for(Filter::Completed)
                on:click=move |_| filter.set(Filter::Completed)
            >
                {filter_label(Filter::Completed)}
            </button>

            <span class="todo-filters__spacer"></span>

            <button
                class="btn todo-filters__clear"
                prop:disabled=move || completed_count() == 0
                on:click=move |_| clear_todos.clear_completed()
            >
                "Clear completed"
            </button>
        </div>
    }
}

/// Visible label for a filter button.
fn filter_label(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "All",
        Filter::Active => "Active",
        Filter::Completed => "Completed",
    }
}
