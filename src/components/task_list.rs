//! Task List Component
//!
//! Renders every task in insertion order plus a short summary.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::store::{use_todo_store, TodoStateStoreFields};
use crate::todo::completed_count;

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_todo_store();

    let rows = move || {
        store.tasks().get().into_iter().enumerate().collect::<Vec<_>>()
    };

    view! {
        <ul class="task-list">
            <For
                each=rows
                // Keyed on index and contents so rows rebuild after a shift
                key=|(index, task)| (*index, task.text.clone(), task.completed)
                children=move |(index, task)| view! { <TaskRow index=index task=task /> }
            />
        </ul>
        {move || {
            let tasks = store.tasks().get();
            (!tasks.is_empty()).then(|| view! {
                <p class="task-count">
                    {format!("{} tasks, {} done", tasks.len(), completed_count(&tasks))}
                </p>
            })
        }}
    }
}
