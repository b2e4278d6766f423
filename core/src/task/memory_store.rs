//! In-memory task storage implementation
//!
//! Keeps all tasks in a single table behind a reader/writer lock. Ids
//! are assigned from a monotonically increasing counter and are never
//! reused, even after a delete.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::model::{self, Task, TaskDraft, TaskUpdate};
use super::repository::TaskRepository;
use crate::{Error, Result};

/// In-memory task store
///
/// Reads take the shared lock; mutations take the exclusive lock, so no
/// caller observes a partially applied create, update or delete.
#[derive(Default)]
pub struct MemoryTaskStore {
    state: RwLock<TableState>,
}

#[derive(Default)]
struct TableState {
    tasks: HashMap<u64, Task>,
    last_id: u64,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for MemoryTaskStore {
    async fn create_task(&self, draft: TaskDraft) -> Result<Task> {
        model::validate_name(&draft.name)?;

        let mut state = self.state.write().await;
        let id = state.last_id + 1;
        let now = Utc::now();
        let task = Task {
            id,
            name: draft.name,
            status: draft.status,
            created_at: now,
            updated_at: now,
        };

        state.last_id = id;
        state.tasks.insert(id, task.clone());

        Ok(task)
    }

    async fn get_task_by_id(&self, id: u64) -> Result<Task> {
        let state = self.state.read().await;
        state.tasks.get(&id).cloned().ok_or(Error::DataNotFound)
    }

    async fn list_tasks_by_page(
        &self,
        page_index: usize,
        page_size: usize,
    ) -> Result<(Vec<Task>, usize)> {
        if page_index < 1 || page_size < 1 {
            return Err(Error::InvalidData(
                "page index and page size must be at least 1".to_string(),
            ));
        }

        let state = self.state.read().await;
        let mut tasks: Vec<Task> = state.tasks.values().cloned().collect();
        tasks.sort_by_key(|task| task.id);

        let total = tasks.len();
        let start = (page_index - 1).saturating_mul(page_size);
        let end = start.saturating_add(page_size).min(total);

        // A window past the last record yields an empty page but still
        // reports the true total.
        if start >= total {
            return Ok((Vec::new(), total));
        }

        Ok((tasks[start..end].to_vec(), total))
    }

    async fn update_task(&self, update: TaskUpdate) -> Result<Task> {
        model::validate_name(&update.name)?;

        let mut state = self.state.write().await;
        let task = state.tasks.get_mut(&update.id).ok_or(Error::DataNotFound)?;

        task.name = update.name;
        task.status = update.status;
        task.updated_at = Utc::now();

        Ok(task.clone())
    }

    async fn delete_task(&self, id: u64) -> Result<()> {
        let mut state = self.state.write().await;
        state.tasks.remove(&id).map(|_| ()).ok_or(Error::DataNotFound)
    }
}
