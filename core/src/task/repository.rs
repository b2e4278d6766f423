//! Task repository trait
//!
//! Defines the interface for task storage operations. The repository is
//! the sole enforcer of field-level validation and id assignment, and
//! the sole implementer of pagination. It reports failures as sentinel
//! errors (`Error::DataNotFound`, `Error::InvalidData`) and never
//! constructs use case errors.

use async_trait::async_trait;

use super::model::{Task, TaskDraft, TaskUpdate};
use crate::Result;

/// Repository interface for task CRUD operations
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task from a draft, assigning id and timestamps
    async fn create_task(&self, draft: TaskDraft) -> Result<Task>;

    /// Get a task by id
    async fn get_task_by_id(&self, id: u64) -> Result<Task>;

    /// List one page of tasks in ascending-id order, plus the total
    /// record count
    async fn list_tasks_by_page(
        &self,
        page_index: usize,
        page_size: usize,
    ) -> Result<(Vec<Task>, usize)>;

    /// Update an existing task's name and status
    async fn update_task(&self, update: TaskUpdate) -> Result<Task>;

    /// Delete a task by id
    async fn delete_task(&self, id: u64) -> Result<()>;
}
