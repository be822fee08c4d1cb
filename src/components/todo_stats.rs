//! Derived count tiles: total, active, completed.

use leptos::prelude::*;

use crate::app::TodosVersion;
use crate::state::todos::TodoStore;

/// Read-only stat tiles fed by `TodoStore::counts`.
#[component]
pub fn TodoStats() -> impl IntoView {
    let todos = expect_context::<TodoStore>();
    let version = expect_context::<TodosVersion>().0;

    let counts = Memo::new(move |_| {
        version.get();
        todos.counts()
    });

    view! {
        <div class="todo-stats">
            <div class="todo-stats__stat todo-stats__stat--total">
                <span class="todo-stats__value">{move || counts.get().total}</span>
                <span class="todo-stats__label">"Total"</span>
            </div>
            <div class="todo-stats__stat todo-stats__stat--active">
                <span class="todo-stats__value">{move || counts.get().active}</span>
                <span class="todo-stats__label">"Active"</span>
            </div>
            <div class="todo-stats__stat todo-stats__stat--completed">
                <span class="todo-stats__value">{move || counts.get().completed}</span>
                <span class="todo-stats__label">"Completed"</span>
            </div>
        </div>
    }
}
