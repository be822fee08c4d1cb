//! Filtered todo list.

use leptos::prelude::*;

use crate::app::TodosVersion;
use crate::components::todo_item::TodoItem;
use crate::state::todos::{Filter, TodoStore};

/// The list itself, restricted to the active filter, with an empty-state
/// message when nothing matches.
#[component]
pub fn TodoList(filter: RwSignal<Filter>) -> impl IntoView {
    let todos = expect_context::<TodoStore>();
    let version = expect_context::<TodosVersion>().0;

    let visible = Memo::new(move |_| {
        version.get();
        todos.list(filter.get())
    });

    view! {
        <div class="todo-list">
            <Show when=move || visible.get().is_empty()>
                <p class="todo-list__empty">"Nothing to show."</p>
            </Show>
            <ul class="todo-list__items">
                {move || {
                    visible
                        .get()
                        .into_iter()
                        .map(|todo| view! { <TodoItem todo=todo/> })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}
