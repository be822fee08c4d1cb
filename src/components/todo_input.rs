//! Entry row for creating todos: title, optional description, add button.

use leptos::prelude::*;

use crate::state::todos::TodoStore;

/// Input row at the top of the page.
///
/// The add button stays disabled while the title trims to nothing; the
/// store rejects blank titles anyway, so a stale click cannot slip an empty
/// todo through.
#[component]
pub fn TodoInput() -> impl IntoView {
    let todos = expect_context::<TodoStore>();
    let text = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let submit_todos = todos.clone();
    let submit = Callback::new(move |()| {
        let title = text.get();
        if title.trim().is_empty() {
            return;
        }
        let details = description.get();
        if submit_todos.add(&title, Some(details.as_str())).is_ok() {
            text.set(String::new());
            description.set(String::new());
        }
    });

    view! {
        <div class="todo-input">
            <input
                class="todo-input__text"
                type="text"
                placeholder="What needs to be done?"
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        submit.run(());
                    }
                }
            />
            <input
                class="todo-input__description"
                type="text"
                placeholder="Add a description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        submit.run(());
                    }
                }
            />
            <button
                class="btn btn--primary todo-input__add"
                prop:disabled=move || text.get().trim().is_empty()
                on:click=move |_| submit.run(())
            >
                "Add"
            </button>
        </div>
    }
}
