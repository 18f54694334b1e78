//! UI Components
//!
//! Leptos components making up the to-do widget.

mod new_task_form;
mod task_list;
mod task_row;

pub use new_task_form::NewTaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
