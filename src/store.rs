//! Todo State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::logging::{log_info, log_warn};
use crate::models::Task;
use crate::error::Result;
use crate::todo;

const LOG_TAG: &str = "TODO";

/// Widget state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Tasks in insertion order
    pub tasks: Vec<Task>,
    /// Pending value of the input box
    pub draft: String,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a task from the current draft, clearing the draft on success
pub fn store_add_task(store: &TodoStore) {
    let draft = store.draft().get_untracked();
    if let Err(e) = todo::check_draft(&draft) {
        log_warn(LOG_TAG, &format!("Add ignored: {}", e));
        return;
    }
    let added = todo::add_task(&mut store.tasks().write(), &draft);
    match added {
        Ok(index) => {
            store.draft().set(String::new());
            log_info(LOG_TAG, &format!("Added task #{}: {:?}", index, draft));
        }
        Err(e) => log_warn(LOG_TAG, &format!("Add ignored: {}", e)),
    }
}

/// Check `index` without subscribing or notifying
fn check_task_index(store: &TodoStore, index: usize) -> Result<()> {
    store.tasks().with_untracked(|tasks| todo::check_index(tasks, index))
}

/// Toggle the completed flag of the task at `index`
pub fn store_toggle_task(store: &TodoStore, index: usize) {
    if let Err(e) = check_task_index(store, index) {
        log_warn(LOG_TAG, &format!("Toggle ignored: {}", e));
        return;
    }
    let toggled = todo::toggle_task_completion(&mut store.tasks().write(), index);
    match toggled {
        Ok(completed) => log_info(LOG_TAG, &format!("Task #{} completed={}", index, completed)),
        Err(e) => log_warn(LOG_TAG, &format!("Toggle ignored: {}", e)),
    }
}

/// Remove the task at `index`
pub fn store_delete_task(store: &TodoStore, index: usize) {
    if let Err(e) = check_task_index(store, index) {
        log_warn(LOG_TAG, &format!("Delete ignored: {}", e));
        return;
    }
    let deleted = todo::delete_task(&mut store.tasks().write(), index);
    match deleted {
        Ok(task) => {
            let json = serde_json::to_string(&task).unwrap_or_default();
            log_info(LOG_TAG, &format!("Deleted task #{}: {}", index, json));
        }
        Err(e) => log_warn(LOG_TAG, &format!("Delete ignored: {}", e)),
    }
}
