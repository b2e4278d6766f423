//! Task API endpoints
//!
//! RESTful API for task CRUD operations. Handlers bind and validate the
//! request shape, delegate to the task use case, and render classified
//! errors as `{error_code, error_message}` bodies. Server-class causes
//! are logged here and never forwarded to the caller.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use tasktrack_core::task::{
    CreateTaskParams, ListTasksParams, Task, TaskStatus, UpdateTaskParams, UseCaseError,
    MAX_NAME_LEN,
};

use crate::state::AppState;

const DEFAULT_PAGE_INDEX: usize = 1;
const DEFAULT_PAGE_SIZE: usize = 10;
const MAX_PAGE_SIZE: usize = 100;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub name: String,
    pub status: u8,
}

#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    #[serde(default = "default_page_index")]
    pub page_index: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_index() -> usize {
    DEFAULT_PAGE_INDEX
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: u64,
    pub name: String,
    pub status: TaskStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            name: task.name,
            status: task.status,
            created_at: task.created_at.to_rfc3339(),
            updated_at: task.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateTaskResponse {
    pub task: TaskResponse,
}

#[derive(Debug, Serialize)]
pub struct UpdateTaskResponse {
    pub task: TaskResponse,
}

#[derive(Debug, Serialize)]
pub struct ListTasksResponse {
    pub tasks: Vec<TaskResponse>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_code: String,
    pub error_message: String,
}

/// Transport-level error: a status code plus the rendered error body
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    fn invalid_request() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse {
                error_code: "INVALID_REQUEST".to_string(),
                error_message: "Invalid Request".to_string(),
            },
        }
    }
}

impl From<UseCaseError> for ApiError {
    fn from(err: UseCaseError) -> Self {
        Self {
            status: StatusCode::from_u16(err.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body: ErrorResponse {
                error_code: err.error_code().to_string(),
                error_message: err.error_msg(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

fn name_is_valid(name: &str) -> bool {
    !name.is_empty() && name.chars().count() <= MAX_NAME_LEN
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/tasks - Create a new task
async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<Json<CreateTaskResponse>, ApiError> {
    if !name_is_valid(&req.name) {
        return Err(ApiError::invalid_request());
    }

    let task = state
        .task_usecase()
        .create_task(CreateTaskParams { name: req.name })
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "task create failed");
            ApiError::from(err)
        })?;

    Ok(Json(CreateTaskResponse { task: task.into() }))
}

/// GET /api/v1/tasks - List tasks by page
async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<ListTasksResponse>, ApiError> {
    if query.page_index < 1 || query.page_size < 1 || query.page_size > MAX_PAGE_SIZE {
        return Err(ApiError::invalid_request());
    }

    let result = state
        .task_usecase()
        .list_tasks(ListTasksParams {
            page_index: query.page_index,
            page_size: query.page_size,
        })
        .await
        .map_err(|err| {
            tracing::error!(
                error = %err,
                page_index = query.page_index,
                page_size = query.page_size,
                "task list failed"
            );
            ApiError::from(err)
        })?;

    Ok(Json(ListTasksResponse {
        tasks: result.tasks.into_iter().map(TaskResponse::from).collect(),
        total: result.total,
    }))
}

/// PUT /api/v1/tasks/{id} - Update a task
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<UpdateTaskResponse>, ApiError> {
    if !name_is_valid(&req.name) {
        return Err(ApiError::invalid_request());
    }

    let status = TaskStatus::try_from(req.status).map_err(|_| ApiError::invalid_request())?;

    let task = state
        .task_usecase()
        .update_task(UpdateTaskParams {
            id,
            name: req.name,
            status,
        })
        .await
        .map_err(|err| {
            tracing::error!(error = %err, id, "task update failed");
            ApiError::from(err)
        })?;

    Ok(Json(UpdateTaskResponse { task: task.into() }))
}

/// DELETE /api/v1/tasks/{id} - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.task_usecase().delete_task(id).await.map_err(|err| {
        tracing::error!(error = %err, id, "task delete failed");
        ApiError::from(err)
    })?;

    Ok(Json(serde_json::json!({})))
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/tasks", get(list_tasks).post(create_task))
        .route("/api/v1/tasks/{id}", put(update_task).delete(delete_task))
}
