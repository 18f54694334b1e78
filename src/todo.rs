//! Task List Transitions
//!
//! Pure state transitions over the ordered task sequence.
//! Tasks are addressed by their position in the list.

use crate::error::{Result, TodoError};
use crate::models::Task;

/// Reject drafts whose trimmed form is empty
pub fn check_draft(draft: &str) -> Result<()> {
    if draft.trim().is_empty() {
        return Err(TodoError::BlankText);
    }
    Ok(())
}

/// Reject positions past the end of the list
pub fn check_index(tasks: &[Task], index: usize) -> Result<()> {
    if index >= tasks.len() {
        return Err(TodoError::IndexOutOfRange { index, len: tasks.len() });
    }
    Ok(())
}

/// Append a task built from `draft` if its trimmed form is non-empty.
///
/// Returns the index of the new task. The stored text is `draft` as typed.
pub fn add_task(tasks: &mut Vec<Task>, draft: &str) -> Result<usize> {
    check_draft(draft)?;
    tasks.push(Task::new(draft));
    Ok(tasks.len() - 1)
}

/// Flip the completed flag of the task at `index`, returning the new value.
pub fn toggle_task_completion(tasks: &mut [Task], index: usize) -> Result<bool> {
    check_index(tasks, index)?;
    let task = &mut tasks[index];
    task.completed = !task.completed;
    Ok(task.completed)
}

/// Remove the task at `index`; later tasks shift down by one.
pub fn delete_task(tasks: &mut Vec<Task>, index: usize) -> Result<Task> {
    check_index(tasks, index)?;
    Ok(tasks.remove(index))
}

/// Number of completed tasks
pub fn completed_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| t.completed).count()
}
