//! Task Row Component
//!
//! One task with its checkbox, text and delete button.

use leptos::prelude::*;

use crate::models::Task;
use crate::store::{store_delete_task, store_toggle_task, use_todo_store};

/// A single task row, addressed by its position in the list
#[component]
pub fn TaskRow(index: usize, task: Task) -> impl IntoView {
    let store = use_todo_store();
    let completed = task.completed;
    let text_class = if completed { "task-text completed" } else { "task-text" };

    view! {
        <li class="task-row">
            <label class="task-main">
                <input
                    type="checkbox"
                    checked=completed
                    on:change=move |_| store_toggle_task(&store, index)
                />
                <span class=text_class>
                    {task.text}
                </span>
            </label>
            <button class="delete-btn" on:click=move |_| store_delete_task(&store, index)>
                "Delete"
            </button>
        </li>
    }
}
