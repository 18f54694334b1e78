//! New Task Form Component
//!
//! Input box and Add button for appending tasks.

use leptos::prelude::*;

use crate::store::{store_add_task, use_todo_store, TodoStateStoreFields};

const PLACEHOLDER: &str = "Enter a task";

/// Form for creating new tasks. Submitting with a blank draft does nothing.
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_todo_store();

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_add_task(&store);
    };

    view! {
        <form class="new-task-form" on:submit=on_add>
            <input
                type="text"
                placeholder=PLACEHOLDER
                prop:value=move || store.draft().get()
                on:input=move |ev| store.draft().set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">"Add"</button>
        </form>
    }
}
