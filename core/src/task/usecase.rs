//! Task use case layer
//!
//! Sequences repository calls and classifies their sentinel failures
//! into the caller-facing `UseCaseError` taxonomy. This is the only
//! component aware of that taxonomy; the repository never constructs
//! it.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use super::model::{Task, TaskDraft, TaskStatus, TaskUpdate};
use super::repository::TaskRepository;
use crate::Error as StoreError;

/// Coarse classification of a use case failure, usable by any
/// transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Client,
    Server,
}

/// Classified, caller-facing errors
///
/// `Display` includes the wrapped cause for diagnostics; callers must
/// render `error_code()` and `error_msg()` instead, which never expose
/// internals.
#[derive(Error, Debug)]
pub enum UseCaseError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: u64 },

    #[error("{resource} {value} already exists")]
    DuplicatedResource {
        resource: &'static str,
        value: String,
    },

    #[error("internal server error: {0}")]
    Internal(#[from] StoreError),
}

impl UseCaseError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::DuplicatedResource { .. } => "DUPLICATED_RESOURCE",
            Self::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn error_msg(&self) -> String {
        match self {
            Self::NotFound { resource, id } => format!("{resource} {id} not found"),
            Self::DuplicatedResource { resource, value } => {
                format!("{resource} {value} already exists")
            }
            Self::Internal(_) => "Internal Server Error".to_string(),
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            Self::NotFound { .. } | Self::DuplicatedResource { .. } => ErrorClass::Client,
            Self::Internal(_) => ErrorClass::Server,
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::DuplicatedResource { .. } => 400,
            Self::Internal(_) => 500,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTaskParams {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct ListTasksParams {
    pub page_index: usize,
    pub page_size: usize,
}

#[derive(Debug, Clone)]
pub struct UpdateTaskParams {
    pub id: u64,
    pub name: String,
    pub status: TaskStatus,
}

#[derive(Debug, Clone)]
pub struct ListTasksResult {
    pub tasks: Vec<Task>,
    pub total: usize,
}

/// Use case interface consumed by the request-handling boundary
#[async_trait]
pub trait TaskUseCase: Send + Sync {
    /// Create a new incomplete task
    async fn create_task(&self, params: CreateTaskParams) -> Result<Task, UseCaseError>;

    /// List one page of tasks
    async fn list_tasks(&self, params: ListTasksParams) -> Result<ListTasksResult, UseCaseError>;

    /// Update an existing task's name and status
    async fn update_task(&self, params: UpdateTaskParams) -> Result<Task, UseCaseError>;

    /// Delete a task by id
    async fn delete_task(&self, id: u64) -> Result<(), UseCaseError>;
}

/// Production task use case backed by an injected repository
pub struct TaskService {
    repo: Arc<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(repo: Arc<dyn TaskRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl TaskUseCase for TaskService {
    async fn create_task(&self, params: CreateTaskParams) -> Result<Task, UseCaseError> {
        // Callers cannot set status at creation; every task starts
        // incomplete.
        let draft = TaskDraft {
            name: params.name,
            status: TaskStatus::Incomplete,
        };

        self.repo
            .create_task(draft)
            .await
            .map_err(UseCaseError::Internal)
    }

    async fn list_tasks(&self, params: ListTasksParams) -> Result<ListTasksResult, UseCaseError> {
        let (tasks, total) = self
            .repo
            .list_tasks_by_page(params.page_index, params.page_size)
            .await
            .map_err(UseCaseError::Internal)?;

        Ok(ListTasksResult { tasks, total })
    }

    async fn update_task(&self, params: UpdateTaskParams) -> Result<Task, UseCaseError> {
        let update = TaskUpdate {
            id: params.id,
            name: params.name,
            status: params.status,
        };

        self.repo.update_task(update).await.map_err(|err| match err {
            StoreError::DataNotFound => UseCaseError::NotFound {
                resource: "task",
                id: params.id,
            },
            other => UseCaseError::Internal(other),
        })
    }

    async fn delete_task(&self, id: u64) -> Result<(), UseCaseError> {
        self.repo.delete_task(id).await.map_err(|err| match err {
            StoreError::DataNotFound => UseCaseError::NotFound { resource: "task", id },
            other => UseCaseError::Internal(other),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::MemoryTaskStore;
    use crate::Result as StoreResult;

    /// Repository double that fails every operation with a fresh copy
    /// of the configured sentinel.
    struct FailingRepository {
        kind: FailKind,
    }

    #[derive(Clone, Copy)]
    enum FailKind {
        NotFound,
        Storage,
    }

    impl FailingRepository {
        fn fail(&self) -> StoreError {
            match self.kind {
                FailKind::NotFound => StoreError::DataNotFound,
                FailKind::Storage => StoreError::Storage("disk on fire".to_string()),
            }
        }
    }

    #[async_trait]
    impl TaskRepository for FailingRepository {
        async fn create_task(&self, _draft: TaskDraft) -> StoreResult<Task> {
            Err(self.fail())
        }

        async fn get_task_by_id(&self, _id: u64) -> StoreResult<Task> {
            Err(self.fail())
        }

        async fn list_tasks_by_page(
            &self,
            _page_index: usize,
            _page_size: usize,
        ) -> StoreResult<(Vec<Task>, usize)> {
            Err(self.fail())
        }

        async fn update_task(&self, _update: TaskUpdate) -> StoreResult<Task> {
            Err(self.fail())
        }

        async fn delete_task(&self, _id: u64) -> StoreResult<()> {
            Err(self.fail())
        }
    }

    fn service_with_store() -> TaskService {
        TaskService::new(Arc::new(MemoryTaskStore::new()))
    }

    fn service_failing(kind: FailKind) -> TaskService {
        TaskService::new(Arc::new(FailingRepository { kind }))
    }

    #[tokio::test]
    async fn test_create_task_defaults_to_incomplete() {
        let service = service_with_store();

        let task = service
            .create_task(CreateTaskParams {
                name: "buy milk".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(task.id, 1);
        assert_eq!(task.name, "buy milk");
        assert_eq!(task.status, TaskStatus::Incomplete);
    }

    #[tokio::test]
    async fn test_create_task_wraps_repository_failure() {
        let service = service_failing(FailKind::Storage);

        let err = service
            .create_task(CreateTaskParams {
                name: "buy milk".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "INTERNAL_SERVER_ERROR");
        assert_eq!(err.class(), ErrorClass::Server);
    }

    #[tokio::test]
    async fn test_list_tasks_returns_page_and_total() {
        let service = service_with_store();
        for name in ["first", "second"] {
            service
                .create_task(CreateTaskParams {
                    name: name.to_string(),
                })
                .await
                .unwrap();
        }

        let result = service
            .list_tasks(ListTasksParams {
                page_index: 1,
                page_size: 10,
            })
            .await
            .unwrap();

        assert_eq!(result.total, 2);
        assert_eq!(
            result.tasks.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[tokio::test]
    async fn test_list_tasks_wraps_repository_failure() {
        let service = service_failing(FailKind::Storage);

        let err = service
            .list_tasks(ListTasksParams {
                page_index: 1,
                page_size: 10,
            })
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "INTERNAL_SERVER_ERROR");
    }

    #[tokio::test]
    async fn test_update_task_success() {
        let service = service_with_store();
        service
            .create_task(CreateTaskParams {
                name: "buy milk".to_string(),
            })
            .await
            .unwrap();

        let updated = service
            .update_task(UpdateTaskParams {
                id: 1,
                name: "buy bread".to_string(),
                status: TaskStatus::Completed,
            })
            .await
            .unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "buy bread");
        assert_eq!(updated.status, TaskStatus::Completed);
    }

    #[tokio::test]
    async fn test_update_task_classifies_missing_record() {
        let service = service_failing(FailKind::NotFound);

        let err = service
            .update_task(UpdateTaskParams {
                id: 7,
                name: "anything".to_string(),
                status: TaskStatus::Incomplete,
            })
            .await
            .unwrap_err();

        match err {
            UseCaseError::NotFound { resource, id } => {
                assert_eq!(resource, "task");
                assert_eq!(id, 7);
            }
            other => panic!("expected NotFound, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_task_wraps_other_failures() {
        let service = service_failing(FailKind::Storage);

        let err = service
            .update_task(UpdateTaskParams {
                id: 7,
                name: "anything".to_string(),
                status: TaskStatus::Incomplete,
            })
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "INTERNAL_SERVER_ERROR");
    }

    #[tokio::test]
    async fn test_delete_task_success() {
        let service = service_with_store();
        service
            .create_task(CreateTaskParams {
                name: "buy milk".to_string(),
            })
            .await
            .unwrap();

        service.delete_task(1).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_task_classifies_missing_record() {
        let service = service_failing(FailKind::NotFound);

        let err = service.delete_task(7).await.unwrap_err();

        assert_eq!(err.error_code(), "NOT_FOUND");
        assert_eq!(err.class(), ErrorClass::Client);
        assert_eq!(err.http_status(), 404);
        assert_eq!(err.error_msg(), "task 7 not found");
    }

    #[test]
    fn test_taxonomy_codes_and_classes() {
        let not_found = UseCaseError::NotFound {
            resource: "task",
            id: 1,
        };
        assert_eq!(not_found.error_code(), "NOT_FOUND");
        assert_eq!(not_found.http_status(), 404);

        let duplicated = UseCaseError::DuplicatedResource {
            resource: "task",
            value: "buy milk".to_string(),
        };
        assert_eq!(duplicated.error_code(), "DUPLICATED_RESOURCE");
        assert_eq!(duplicated.class(), ErrorClass::Client);
        assert_eq!(duplicated.http_status(), 400);
        assert_eq!(duplicated.error_msg(), "task buy milk already exists");

        let internal = UseCaseError::Internal(StoreError::Storage("boom".to_string()));
        assert_eq!(internal.error_code(), "INTERNAL_SERVER_ERROR");
        assert_eq!(internal.http_status(), 500);
    }

    #[test]
    fn test_internal_error_msg_hides_cause() {
        let err = UseCaseError::Internal(StoreError::Storage("secret detail".to_string()));

        // Display carries the cause for logs, the caller-facing message
        // does not.
        assert!(err.to_string().contains("secret detail"));
        assert!(!err.error_msg().contains("secret detail"));
    }
}
