//! Todo collection store: mutations, derived views, and persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! This store owns the authoritative todo list for the session. Components
//! read it through `list`/`counts`, mutate it through `add`/`toggle`/
//! `delete`/`clear_completed`, and re-render off its change notifications.
//! The full collection is written to storage synchronously after every
//! mutation, so a reload immediately after any mutation observes the
//! post-mutation state.
//!
//! Persistence is best-effort by contract: absent, malformed, or
//! unavailable storage degrades to an empty collection at load and to
//! session-only data on write, never to an error.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::observers::{ObserverId, Observers};
use crate::util::storage::KeyValueStore;
use crate::util::time;

/// Storage key holding the serialized todo array.
pub const STORAGE_KEY: &str = "todos";

/// A single task record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique within the store's lifetime; never reused, even after delete.
    pub id: u64,
    /// Required title; non-empty after trimming, enforced at creation.
    pub text: String,
    /// Optional supplementary detail; omitted from storage when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Completion flag; `false` at creation.
    pub completed: bool,
    /// ISO-8601 creation timestamp; immutable for the entity's lifetime.
    pub created_at: String,
}

/// View selector over the collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.completed,
            Self::Completed => todo.completed,
        }
    }
}

/// Derived tallies over the collection; `active + completed == total`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TodoCounts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// Rejection raised by [`TodoStore::add`]; never fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("todo text must not be empty")]
    EmptyText,
}

/// Shared handle to the todo collection store.
///
/// Cloning shares the underlying collection; all access happens on the
/// single UI thread.
#[derive(Clone)]
pub struct TodoStore {
    inner: Rc<Inner>,
}

struct Inner {
    items: RefCell<Vec<Todo>>,
    // Seeded from the persisted maximum at load; never decremented, so ids
    // stay strictly increasing even when the current maximum is deleted.
    next_id: Cell<u64>,
    storage: Rc<dyn KeyValueStore>,
    observers: Observers<()>,
}

impl TodoStore {
    /// Create an empty store over `storage`. Call [`TodoStore::load`] to
    /// rehydrate persisted items.
    #[must_use]
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self {
            inner: Rc::new(Inner {
                items: RefCell::new(Vec::new()),
                next_id: Cell::new(1),
                storage,
                observers: Observers::new(),
            }),
        }
    }

    /// Replace the collection with the persisted representation.
    ///
    /// Absent, malformed, or unavailable storage yields the empty
    /// collection. Never fails.
    pub fn load(&self) {
        let items = match self.inner.storage.get(STORAGE_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<Todo>>(&raw) {
                Ok(items) => items,
                Err(err) => {
                    log::warn!("discarding malformed persisted todos: {err}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        let next_id = items.iter().map(|t| t.id).max().map_or(1, |max| max + 1);
        self.inner.next_id.set(next_id);
        *self.inner.items.borrow_mut() = items;
        self.inner.observers.notify(&());
    }

    /// Append a new todo with the trimmed `text` and optional
    /// `description`, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyText`] when `text` trims to nothing;
    /// the collection and storage are left untouched.
    pub fn add(&self, text: &str, description: Option<&str>) -> Result<Todo, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }

        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        let todo = Todo {
            id,
            text: text.to_owned(),
            description: description
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_owned),
            completed: false,
            created_at: time::now_iso(),
        };
        self.inner.items.borrow_mut().push(todo.clone());
        self.persist();
        self.inner.observers.notify(&());
        Ok(todo)
    }

    /// Flip the completion flag of the todo with `id`. Silent no-op on an
    /// unknown id.
    pub fn toggle(&self, id: u64) {
        let changed = {
            let mut items = self.inner.items.borrow_mut();
            match items.iter_mut().find(|t| t.id == id) {
                Some(todo) => {
                    todo.completed = !todo.completed;
                    true
                }
                None => false,
            }
        };
        if changed {
            self.persist();
            self.inner.observers.notify(&());
        }
    }

    /// Remove the todo with `id`. Silent no-op on an unknown id.
    pub fn delete(&self, id: u64) {
        let changed = {
            let mut items = self.inner.items.borrow_mut();
            let before = items.len();
            items.retain(|t| t.id != id);
            items.len() != before
        };
        if changed {
            self.persist();
            self.inner.observers.notify(&());
        }
    }

    /// Remove every completed todo. Safe no-op when there are none.
    pub fn clear_completed(&self) {
        let changed = {
            let mut items = self.inner.items.borrow_mut();
            let before = items.len();
            items.retain(|t| !t.completed);
            items.len() != before
        };
        if changed {
            self.persist();
            self.inner.observers.notify(&());
        }
    }

    /// Read-only view of the collection restricted by `filter`, in
    /// insertion order.
    #[must_use]
    pub fn list(&self, filter: Filter) -> Vec<Todo> {
        self.inner
            .items
            .borrow()
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect()
    }

    /// Derived total/active/completed tallies.
    #[must_use]
    pub fn counts(&self) -> TodoCounts {
        let items = self.inner.items.borrow();
        let completed = items.iter().filter(|t| t.completed).count();
        TodoCounts {
            total: items.len(),
            active: items.len() - completed,
            completed,
        }
    }

    /// Register `callback` to run synchronously after every change to the
    /// collection.
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> ObserverId {
        self.inner.observers.subscribe(move |&()| callback())
    }

    /// Remove a previously registered callback.
    pub fn unsubscribe(&self, id: ObserverId) {
        self.inner.observers.unsubscribe(id);
    }

    fn persist(&self) {
        let Ok(raw) = serde_json::to_string(&*self.inner.items.borrow()) else {
            return;
        };
        self.inner.storage.set(STORAGE_KEY, &raw);
    }
}
