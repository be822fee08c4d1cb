//! Root application component and store wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! The two stores are constructed once here, rehydrated from storage, and
//! provided to the component tree via context. Store change notifications
//! are bridged into per-store version signals; components depend on a
//! version signal plus the store handle instead of duplicating store state
//! into the reactive graph.

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::components::todo_filters::TodoFilters;
use crate::components::todo_input::TodoInput;
use crate::components::todo_list::TodoList;
use crate::components::todo_stats::TodoStats;
use crate::state::theme::ThemeStore;
use crate::state::todos::{Filter, TodoStore};
use crate::util::color_scheme::MediaQuerySignal;
use crate::util::storage::{KeyValueStore, LocalStorage};

/// Version counter bumped on every todo-store notification. Components
/// read it inside reactive closures so their store queries re-run after
/// each mutation.
#[derive(Clone, Copy)]
pub struct TodosVersion(pub RwSignal<u64>);

/// Version counter bumped on every theme-store notification.
#[derive(Clone, Copy)]
pub struct ThemeVersion(pub RwSignal<u64>);

/// Root application component.
///
/// Builds the storage seams and both stores, resolves persisted state, and
/// lays out the single page.
#[component]
pub fn App() -> impl IntoView {
    let storage: Rc<dyn KeyValueStore> = Rc::new(LocalStorage);
    let todos = TodoStore::new(storage.clone());
    let theme = ThemeStore::new(storage, Rc::new(MediaQuerySignal));

    let todos_version = RwSignal::new(0_u64);
    todos.subscribe(move || todos_version.update(|v| *v += 1));
    let theme_version = RwSignal::new(0_u64);
    theme.subscribe(move |_| theme_version.update(|v| *v += 1));

    todos.load();
    theme.init();

    provide_context(todos);
    provide_context(theme);
    provide_context(TodosVersion(todos_version));
    provide_context(ThemeVersion(theme_version));

    // Transient view selector; deliberately not persisted.
    let filter = RwSignal::new(Filter::All);

    view! {
        <main class="todo-app">
            <header class="todo-app__header">
                <h1 class="todo-app__title">"Taskpad"</h1>
                <span class="todo-app__spacer"></span>
                <ThemeToggle/>
            </header>

            <TodoInput/>
            <TodoStats/>
            <TodoFilters filter=filter/>
            <TodoList filter=filter/>
        </main>
    }
}
