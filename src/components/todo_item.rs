//! Single todo row: completion checkbox, texts, delete button.

#[cfg(test)]
#[path = "todo_item_test.rs"]
mod todo_item_test;

use leptos::prelude::*;

use crate::state::todos::{Todo, TodoStore};

/// One row of the todo list.
#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let todos = expect_context::<TodoStore>();
    let delete_todos = todos.clone();
    let id = todo.id;

    let item_class = if todo.completed {
        "todo-item todo-item--completed"
    } else {
        "todo-item"
    };

    view! {
        <li class=item_class>
            <input
                class="todo-item__toggle"
                type="checkbox"
                prop:checked=todo.completed
                on:change=move |_| todos.toggle(id)
            />
            <div class="todo-item__body">
                <span class="todo-item__text">{todo.text.clone()}</span>
                {todo
                    .description
                    .clone()
                    .map(|details| view! { <span class="todo-item__description">{details}</span> })}
                <span class="todo-item__created">{format_created_at(&todo.created_at)}</span>
            </div>
            <button
                class="btn todo-item__delete"
                on:click=move |_| delete_todos.delete(id)
                title="Delete todo"
            >
                "×"
            </button>
        </li>
    }
}

/// Date portion of an ISO-8601 timestamp, for compact display.
fn format_created_at(created_at: &str) -> String {
    created_at
        .split('T')
        .next()
        .unwrap_or(created_at)
        .to_owned()
}
