//! To-Do Frontend App
//!
//! Root component: creates the store and lays out the widget.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTaskForm, TaskList};
use crate::store::TodoState;

const TITLE: &str = "TO-DOs";

#[component]
pub fn App() -> impl IntoView {
    // State lives for the page session only
    provide_context(Store::new(TodoState::default()));

    view! {
        <div class="app-layout">
            <main class="todo-card">
                <h1>{TITLE}</h1>
                <NewTaskForm />
                <TaskList />
            </main>
        </div>
    }
}
